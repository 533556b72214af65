use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::income::Income;
use super::recurring::RecurringExpense;
use super::settings::Settings;

/// The in-memory data container the presentation layer renders from.
///
/// Holds the collections last fetched from the document store plus user
/// settings. Materialized recurring instances are NOT stored here — they
/// are re-derived on every view build so the merged view never drifts
/// from the definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Persisted one-off and installment expense records
    pub expenses: Vec<Expense>,

    /// Recurring-expense definitions
    pub recurring: Vec<RecurringExpense>,

    /// Income events
    pub incomes: Vec<Income>,

    /// User settings (alert thresholds, currency symbol)
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            recurring: Vec::new(),
            incomes: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }
}
