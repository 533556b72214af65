use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Where an expense record came from.
///
/// Deletion routing reads this tag to decide which backing collection to
/// address — a materialized instance must delete its recurring definition,
/// never itself. The tag is explicit so nothing has to be inferred from
/// the shape of the id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpenseOrigin {
    /// Entered directly by the user (one-off or installment record)
    OneOff,
    /// Materialized from a recurring definition for a specific month
    Recurring {
        /// Storage id of the backing definition
        definition_id: String,
    },
}

/// A single concrete spending event.
///
/// Records come from two places: direct user submissions (persisted in the
/// document store) and on-demand materialization of recurring definitions
/// (ephemeral — regenerated on every render pass, never persisted as-is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique within the active dataset; not necessarily the storage id
    pub id: String,

    /// Free-form category tag (e.g., "food", "transport")
    pub category: String,

    /// Calendar date — determines the year/month bucket
    pub date: NaiveDate,

    /// Non-negative amount, 2-decimal currency value
    pub amount: f64,

    /// Payment method tag (e.g., "cash", "card", "pix")
    pub payment_method: String,

    /// Total installment count of the originating submission,
    /// set on every record of the split
    #[serde(default)]
    pub installments: Option<u32>,

    /// 1-based position within the split; only set when the split
    /// produced more than one record
    #[serde(default)]
    pub installment_number: Option<u32>,

    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,

    /// True when derived from a recurring definition
    #[serde(default)]
    pub fixed: bool,

    /// Provenance tag used for deletion routing
    pub origin: ExpenseOrigin,
}

impl Expense {
    /// Create a one-off expense with a caller-provided id.
    pub fn one_off(
        id: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            date,
            amount,
            payment_method: payment_method.into(),
            installments: None,
            installment_number: None,
            note: None,
            fixed: false,
            origin: ExpenseOrigin::OneOff,
        }
    }

    /// Attach a note (builder-style, used by tests and callers).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether this record falls in the given year.
    #[must_use]
    pub fn in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }

    /// Whether this record falls in the given (year, month) bucket.
    #[must_use]
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// A user submission as it arrives from the presentation layer: a day within
/// a selected (year, month) plus the raw form fields. Validated here before
/// the installment splitter turns it into concrete records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub category: String,
    pub year: i32,
    pub month: u32,
    /// Day of month, 1–31
    pub day: u32,
    pub amount: f64,
    pub payment_method: String,
    /// Total installment count; `None` means a single payment
    #[serde(default)]
    pub installments: Option<u32>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExpenseDraft {
    /// Validate the submission before splitting.
    ///
    /// Rules:
    /// - category and payment method must be non-empty
    /// - month must be 1–12, day must be 1–31
    /// - amount must be non-negative
    /// - installment count, when present, must be at least 1
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        if self.payment_method.trim().is_empty() {
            return Err(CoreError::Validation(
                "payment method must not be empty".into(),
            ));
        }
        if !(1..=12).contains(&self.month) {
            return Err(CoreError::Validation(format!(
                "month {} is out of range 1-12",
                self.month
            )));
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
        if self.installments == Some(0) {
            return Err(CoreError::Validation(
                "installment count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
