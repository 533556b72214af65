use crate::errors::CoreError;
use crate::models::expense::{Expense, ExpenseOrigin};
use crate::models::ledger::Ledger;
use crate::services::identity_service::{IdGenerator, IdentityService};
use crate::services::recurrence_service::RecurrenceService;

/// Which backing collection a delete must address, and the storage id to
/// delete there. Derived from the record's explicit origin tag, never from
/// the shape of the id string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRoute {
    /// Delete the recurring definition behind a materialized instance
    Recurring { definition_id: String },
    /// Delete a persisted one-off/installment record
    OneOff { expense_id: String },
}

/// Collection-level rules over the ledger: building the merged year view,
/// month filtering, and delete routing.
pub struct LedgerService {
    recurrence_service: RecurrenceService,
    identity_service: IdentityService,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            recurrence_service: RecurrenceService::new(),
            identity_service: IdentityService::new(),
        }
    }

    /// The merged, display-ready collection for a year: persisted one-off
    /// records dated in the year plus materialized recurring instances,
    /// sorted by date and id-sanitized.
    ///
    /// Expansion is cheap and deterministic, so the view is recomputed on
    /// every call rather than cached — same inputs, same output ids.
    pub fn build_year_view(
        &self,
        ledger: &Ledger,
        year: i32,
        ids: &dyn IdGenerator,
    ) -> Vec<Expense> {
        let mut view: Vec<Expense> = ledger
            .expenses
            .iter()
            .filter(|e| e.in_year(year))
            .cloned()
            .collect();
        view.extend(self.recurrence_service.expand_year(&ledger.recurring, year));

        // stable sort: one-off records stay ahead of same-day instances
        view.sort_by_key(|e| e.date);

        self.identity_service.sanitize(view, ids)
    }

    /// Records of `expenses` falling in the (year, month) bucket,
    /// order-preserving.
    pub fn filter_by_month(&self, expenses: &[Expense], year: i32, month: u32) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| e.in_month(year, month))
            .cloned()
            .collect()
    }

    /// Resolve an id from the active view to the collection a delete must
    /// address.
    pub fn route_delete(&self, view: &[Expense], id: &str) -> Result<DeleteRoute, CoreError> {
        let expense = view
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))?;

        Ok(match &expense.origin {
            ExpenseOrigin::Recurring { definition_id } => DeleteRoute::Recurring {
                definition_id: definition_id.clone(),
            },
            ExpenseOrigin::OneOff => DeleteRoute::OneOff {
                expense_id: expense.id.clone(),
            },
        })
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
