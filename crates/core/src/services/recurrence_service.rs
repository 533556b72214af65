use chrono::Datelike;

use crate::models::expense::{Expense, ExpenseOrigin};
use crate::models::recurring::RecurringExpense;
use crate::util;

/// Materializes recurring-expense definitions into concrete monthly
/// instances.
///
/// Pure business logic — no I/O. Instance ids are derived from
/// `(definition id, year, month)`, so repeated expansion of the same inputs
/// yields the same ids: views can be rebuilt on every state change and
/// delete-by-id keeps working across rebuilds.
pub struct RecurrenceService;

impl RecurrenceService {
    pub fn new() -> Self {
        Self
    }

    /// Expand definitions into one instance per applicable month of `year`.
    ///
    /// Per definition: nothing when it starts after `year`; from its start
    /// month when it starts within `year`; from January when it started
    /// earlier. An instance that would land before the start date itself
    /// (a mid-month start past the charge day) is dropped — no definition
    /// ever yields an instance dated before its start. Days past the end
    /// of a month are clamped to the month's last day. A definition with
    /// an out-of-range day is skipped whole — one bad document must not
    /// take down the batch.
    pub fn expand_year(&self, recurring: &[RecurringExpense], year: i32) -> Vec<Expense> {
        let mut instances = Vec::new();

        for definition in recurring {
            if definition.start_date.year() > year {
                continue;
            }
            if !Self::day_in_range(definition) {
                continue;
            }

            let first_month = if definition.start_date.year() < year {
                1
            } else {
                definition.start_date.month()
            };

            for month in first_month..=12 {
                if let Some(instance) = Self::materialize(definition, year, month) {
                    if instance.date >= definition.start_date {
                        instances.push(instance);
                    }
                }
            }
        }

        tracing::debug!(
            year,
            definitions = recurring.len(),
            instances = instances.len(),
            "expanded recurring definitions"
        );
        instances
    }

    /// Expand definitions for a single (year, month) bucket.
    ///
    /// A definition applies when its materialized date for the bucket falls
    /// on or after its start date.
    pub fn expand_month(
        &self,
        recurring: &[RecurringExpense],
        year: i32,
        month: u32,
    ) -> Vec<Expense> {
        recurring
            .iter()
            .filter(|definition| Self::day_in_range(definition))
            .filter_map(|definition| {
                let instance = Self::materialize(definition, year, month)?;
                (instance.date >= definition.start_date).then_some(instance)
            })
            .collect()
    }

    fn day_in_range(definition: &RecurringExpense) -> bool {
        if (1..=31).contains(&definition.day) {
            return true;
        }
        tracing::warn!(
            definition = %definition.id,
            day = definition.day,
            "skipping recurring definition with out-of-range day"
        );
        false
    }

    fn materialize(definition: &RecurringExpense, year: i32, month: u32) -> Option<Expense> {
        let date = util::clamped_date(year, month, definition.day)?;
        Some(Expense {
            id: format!("recurring-{}-{}-{}", definition.id, year, month),
            category: definition.category.clone(),
            date,
            amount: definition.amount,
            payment_method: definition.payment_method.clone(),
            installments: None,
            installment_number: None,
            note: definition.note.clone(),
            fixed: true,
            origin: ExpenseOrigin::Recurring {
                definition_id: definition.id.clone(),
            },
        })
    }
}

impl Default for RecurrenceService {
    fn default() -> Self {
        Self::new()
    }
}
