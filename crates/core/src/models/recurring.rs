use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A recurring-expense template.
///
/// Not itself a spending event — the recurrence expander materializes one
/// expense instance per applicable month. Templates are immutable between
/// creation and deletion (there is no edit operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringExpense {
    /// Storage-assigned identifier
    pub id: String,

    /// Free-form category tag
    pub category: String,

    /// Amount charged each month
    pub amount: f64,

    /// Day of month the charge recurs on, 1–31
    pub day: u32,

    /// No instance is generated before this date
    pub start_date: NaiveDate,

    /// Payment method tag, copied onto every materialized instance
    pub payment_method: String,

    #[serde(default)]
    pub note: Option<String>,
}

impl RecurringExpense {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        day: u32,
        start_date: NaiveDate,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            amount,
            day,
            start_date,
            payment_method: payment_method.into(),
            note: None,
        }
    }

    /// Attach a note (builder-style).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A recurring-definition submission from the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringDraft {
    pub category: String,
    pub amount: f64,
    /// Day of month, 1–31
    pub day: u32,
    pub start_date: NaiveDate,
    pub payment_method: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl RecurringDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        if !(1..=31).contains(&self.day) {
            return Err(CoreError::Validation(format!(
                "day {} is out of range 1-31",
                self.day
            )));
        }
        if self.amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "amount {} must be non-negative",
                self.amount
            )));
        }
        Ok(())
    }
}
