use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single income event. Independent of expenses — incomes are aggregated
/// separately per month/year, never merged into expense views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: String,

    /// Category tag (e.g., "salary", "freelance")
    pub category: String,

    pub amount: f64,

    pub date: NaiveDate,

    #[serde(default)]
    pub note: Option<String>,

    /// Who/what paid (employer, client, ...)
    #[serde(default)]
    pub source: Option<String>,
}

impl Income {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            amount,
            date,
            note: None,
            source: None,
        }
    }

    #[must_use]
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    #[must_use]
    pub fn in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }
}

/// An income submission from the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeDraft {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl IncomeDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        if self.amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "income amount {} must be positive",
                self.amount
            )));
        }
        Ok(())
    }
}
