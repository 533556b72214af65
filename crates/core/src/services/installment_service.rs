use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::expense::{Expense, ExpenseOrigin};
use crate::services::identity_service::IdGenerator;
use crate::util;

/// A validated submission ready to be split into installment records.
#[derive(Debug, Clone)]
pub struct InstallmentPlan {
    pub category: String,

    /// Total amount of the original submission
    pub amount: f64,

    /// Number of installments, at least 1
    pub count: u32,

    /// Date of the first installment; record `i` lands `i` months later
    pub base_date: NaiveDate,

    pub payment_method: String,

    pub note: Option<String>,
}

/// Splits a single submission into `count` dated records, one per
/// consecutive month.
///
/// Per-installment amounts are rounded to 2 decimals; the last record
/// absorbs the rounding remainder so the records always sum to the
/// original amount exactly.
pub struct InstallmentService;

impl InstallmentService {
    pub fn new() -> Self {
        Self
    }

    pub fn split(
        &self,
        plan: &InstallmentPlan,
        ids: &dyn IdGenerator,
    ) -> Result<Vec<Expense>, CoreError> {
        if plan.count == 0 {
            return Err(CoreError::Validation(
                "installment count must be at least 1".into(),
            ));
        }
        if plan.amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "amount {} must be non-negative",
                plan.amount
            )));
        }

        let per_installment = util::round2(plan.amount / f64::from(plan.count));
        let mut records = Vec::with_capacity(plan.count as usize);

        for i in 0..plan.count {
            let is_last = i + 1 == plan.count;
            let amount = if is_last {
                // remainder lands here so the split sums to the original
                util::round2(plan.amount - per_installment * f64::from(plan.count - 1))
            } else {
                per_installment
            };

            let note = if plan.count > 1 {
                Some(match &plan.note {
                    Some(text) => format!("{} - Parcela {} de {}", text, i + 1, plan.count),
                    None => format!("Parcela {} de {}", i + 1, plan.count),
                })
            } else {
                plan.note.clone()
            };

            records.push(Expense {
                id: ids.generate(),
                category: plan.category.clone(),
                date: util::add_months(plan.base_date, i),
                amount,
                payment_method: plan.payment_method.clone(),
                installments: Some(plan.count),
                installment_number: (plan.count > 1).then_some(i + 1),
                note,
                fixed: false,
                origin: ExpenseOrigin::OneOff,
            });
        }

        Ok(records)
    }
}

impl Default for InstallmentService {
    fn default() -> Self {
        Self::new()
    }
}
