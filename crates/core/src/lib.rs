#![doc(test(attr(deny(warnings))))]

//! Finance Tracker Core — recurring-expense materialization and monthly
//! aggregation for a personal finance tracker. The presentation layer
//! renders what this crate computes; the document store behind
//! [`storage::traits::FinanceStore`] persists what this crate routes to it.

pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod util;

use std::sync::Once;

use models::expense::{Expense, ExpenseDraft};
use models::income::{Income, IncomeDraft};
use models::ledger::Ledger;
use models::recurring::{RecurringDraft, RecurringExpense};
use models::settings::Settings;
use models::summary::{CategoryBreakdown, DaySpending, IncomeSummary, MonthSummary, MonthlyTotal};
use services::identity_service::{IdGenerator, UuidGenerator};
use services::installment_service::{InstallmentPlan, InstallmentService};
use services::ledger_service::{DeleteRoute, LedgerService};
use services::summary_service::SummaryService;
use storage::traits::FinanceStore;

use errors::CoreError;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("finance_tracker_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Finance Tracker core tracing initialized.");
    });
}

/// Main entry point for the Finance Tracker core library.
///
/// Holds the ledger state, the pure services that compute views over it,
/// and the document-store collaborator. All expansion/aggregation is
/// synchronous and recomputed per call; only store round-trips are async.
#[must_use]
pub struct FinanceTracker {
    ledger: Ledger,
    installment_service: InstallmentService,
    summary_service: SummaryService,
    ledger_service: LedgerService,
    ids: Box<dyn IdGenerator>,
    store: Box<dyn FinanceStore>,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("expenses", &self.ledger.expenses.len())
            .field("recurring", &self.ledger.recurring.len())
            .field("incomes", &self.ledger.incomes.len())
            .field("store", &self.store.name())
            .finish()
    }
}

impl FinanceTracker {
    /// Create a tracker over a document store, with random (UUID v4) ids.
    pub fn new(store: Box<dyn FinanceStore>) -> Self {
        Self::with_id_generator(store, Box::new(UuidGenerator))
    }

    /// Create a tracker with an injected id generator (deterministic tests).
    pub fn with_id_generator(store: Box<dyn FinanceStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            ledger: Ledger::new(),
            installment_service: InstallmentService::new(),
            summary_service: SummaryService::new(),
            ledger_service: LedgerService::new(),
            ids,
            store,
        }
    }

    /// Pull all three collections from the store into the ledger.
    /// The store is the source of truth; views are derived from here on.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        self.ledger.expenses = self.store.list_expenses().await?;
        self.ledger.recurring = self.store.list_recurring().await?;
        self.ledger.incomes = self.store.list_incomes().await?;
        Ok(())
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Validate a submission, split it into installment records, persist
    /// each record, and mirror them into the ledger.
    /// Returns the storage-assigned ids in installment order.
    pub async fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Vec<String>, CoreError> {
        draft.validate()?;

        let base_date = util::clamped_date(draft.year, draft.month, draft.day).ok_or_else(|| {
            CoreError::Validation(format!(
                "no valid date for year {} month {} day {}",
                draft.year, draft.month, draft.day
            ))
        })?;

        let plan = InstallmentPlan {
            category: draft.category,
            amount: draft.amount,
            count: draft.installments.unwrap_or(1),
            base_date,
            payment_method: draft.payment_method,
            note: draft.note,
        };
        let records = self.installment_service.split(&plan, self.ids.as_ref())?;

        let mut saved_ids = Vec::with_capacity(records.len());
        for mut record in records {
            record.id = self.store.insert_expense(record.clone()).await?;
            saved_ids.push(record.id.clone());
            self.ledger.expenses.push(record);
        }
        Ok(saved_ids)
    }

    /// Delete by an id taken from the year view. Recurring-derived ids are
    /// routed to their backing definition; one-off ids to the expense
    /// collection. Returns the route that was taken.
    pub async fn delete_expense(&mut self, year: i32, id: &str) -> Result<DeleteRoute, CoreError> {
        let route = self.route_delete(year, id)?;
        match &route {
            DeleteRoute::Recurring { definition_id } => {
                self.store.delete_recurring(definition_id).await?;
                self.ledger.recurring.retain(|r| r.id != *definition_id);
            }
            DeleteRoute::OneOff { expense_id } => {
                self.store.delete_expense(expense_id).await?;
                self.ledger.expenses.retain(|e| e.id != *expense_id);
            }
        }
        Ok(route)
    }

    /// Resolve which backing collection a delete would address, without
    /// deleting anything.
    pub fn route_delete(&self, year: i32, id: &str) -> Result<DeleteRoute, CoreError> {
        let view = self.year_view(year);
        self.ledger_service.route_delete(&view, id)
    }

    /// The merged, display-ready collection for a year: persisted records
    /// plus materialized recurring instances, date-sorted and id-sanitized.
    #[must_use]
    pub fn year_view(&self, year: i32) -> Vec<Expense> {
        self.ledger_service
            .build_year_view(&self.ledger, year, self.ids.as_ref())
    }

    /// The year view narrowed to one month.
    pub fn month_view(&self, year: i32, month: u32) -> Result<Vec<Expense>, CoreError> {
        Self::check_month(month)?;
        Ok(self
            .ledger_service
            .filter_by_month(&self.year_view(year), year, month))
    }

    /// Persisted expense records currently mirrored in the ledger
    /// (no materialized instances).
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    // ── Summaries ───────────────────────────────────────────────────

    /// Monthly total, full-year category totals, and threshold alerts.
    pub fn summarize(&self, year: i32, month: u32) -> Result<MonthSummary, CoreError> {
        Self::check_month(month)?;
        Ok(self.summary_service.summarize(
            &self.year_view(year),
            &self.ledger.settings,
            year,
            month,
        ))
    }

    /// Chart data: 12 zero-filled month buckets for a year.
    #[must_use]
    pub fn monthly_totals(&self, year: i32) -> Vec<MonthlyTotal> {
        self.summary_service
            .monthly_totals(&self.year_view(year), year)
    }

    /// Per-category totals for one month with the extremes picked out.
    pub fn category_breakdown(
        &self,
        year: i32,
        month: u32,
    ) -> Result<CategoryBreakdown, CoreError> {
        Self::check_month(month)?;
        Ok(self
            .summary_service
            .category_breakdown(&self.year_view(year), year, month))
    }

    /// Calendar grid data: one bucket per day of the month.
    pub fn daily_spending(&self, year: i32, month: u32) -> Result<Vec<DaySpending>, CoreError> {
        Self::check_month(month)?;
        Ok(self
            .summary_service
            .daily_spending(&self.year_view(year), year, month))
    }

    // ── Recurring definitions ───────────────────────────────────────

    /// Persist a new recurring definition and mirror it into the ledger.
    /// Returns the storage-assigned id.
    pub async fn add_recurring(&mut self, draft: RecurringDraft) -> Result<String, CoreError> {
        draft.validate()?;

        let mut definition = RecurringExpense::new(
            self.ids.generate(),
            draft.category,
            draft.amount,
            draft.day,
            draft.start_date,
            draft.payment_method,
        );
        if let Some(note) = draft.note {
            definition = definition.with_note(note);
        }

        definition.id = self.store.insert_recurring(definition.clone()).await?;
        let id = definition.id.clone();
        self.ledger.recurring.push(definition);
        Ok(id)
    }

    /// Delete a recurring definition by its storage id.
    pub async fn delete_recurring(&mut self, id: &str) -> Result<(), CoreError> {
        self.store.delete_recurring(id).await?;
        self.ledger.recurring.retain(|r| r.id != id);
        Ok(())
    }

    #[must_use]
    pub fn recurring(&self) -> &[RecurringExpense] {
        &self.ledger.recurring
    }

    // ── Incomes ─────────────────────────────────────────────────────

    /// Persist a new income and mirror it into the ledger.
    /// Returns the storage-assigned id.
    pub async fn add_income(&mut self, draft: IncomeDraft) -> Result<String, CoreError> {
        draft.validate()?;

        let mut income = Income::new(self.ids.generate(), draft.category, draft.amount, draft.date);
        income.note = draft.note;
        income.source = draft.source;

        income.id = self.store.insert_income(income.clone()).await?;
        let id = income.id.clone();
        self.ledger.incomes.push(income);
        Ok(id)
    }

    /// Delete an income by its storage id.
    pub async fn delete_income(&mut self, id: &str) -> Result<(), CoreError> {
        self.store.delete_income(id).await?;
        self.ledger.incomes.retain(|i| i.id != id);
        Ok(())
    }

    #[must_use]
    pub fn incomes(&self) -> &[Income] {
        &self.ledger.incomes
    }

    /// Income totals for a month (`Some(month)`) or a whole year (`None`).
    pub fn summarize_incomes(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<IncomeSummary, CoreError> {
        if let Some(m) = month {
            Self::check_month(m)?;
        }
        Ok(self
            .summary_service
            .summarize_incomes(&self.ledger.incomes, year, month))
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Set or replace the monthly alert threshold for a category.
    pub fn set_alert_threshold(
        &mut self,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<(), CoreError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        if amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "threshold {amount} must be positive"
            )));
        }
        self.ledger.settings.alert_thresholds.insert(category, amount);
        Ok(())
    }

    /// Remove the alert threshold for a category.
    /// Returns whether a threshold was configured.
    pub fn remove_alert_threshold(&mut self, category: &str) -> bool {
        self.ledger.settings.alert_thresholds.remove(category).is_some()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn check_month(month: u32) -> Result<(), CoreError> {
        if (1..=12).contains(&month) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "month {month} is out of range 1-12"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
