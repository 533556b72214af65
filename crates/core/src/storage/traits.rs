use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::expense::Expense;
use crate::models::income::Income;
use crate::models::recurring::RecurringExpense;

/// Trait abstraction for the document store holding the three collections
/// (expenses, recurring definitions, incomes).
///
/// The core never talks to a database directly — it receives resolved
/// collections and hands deletes/inserts to whatever implements this trait.
/// Network or database failures surface as
/// `CoreError::StorageUnavailable`; the core has no failure mode of its
/// own on this path.
#[async_trait]
pub trait FinanceStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    // ── Expenses ────────────────────────────────────────────────────

    async fn list_expenses(&self) -> Result<Vec<Expense>, CoreError>;

    /// Insert a record and return its storage-assigned id. A record
    /// arriving with a non-empty id keeps it.
    async fn insert_expense(&self, expense: Expense) -> Result<String, CoreError>;

    async fn delete_expense(&self, id: &str) -> Result<(), CoreError>;

    // ── Recurring definitions ───────────────────────────────────────

    async fn list_recurring(&self) -> Result<Vec<RecurringExpense>, CoreError>;

    async fn insert_recurring(&self, recurring: RecurringExpense) -> Result<String, CoreError>;

    async fn delete_recurring(&self, id: &str) -> Result<(), CoreError>;

    // ── Incomes ─────────────────────────────────────────────────────

    async fn list_incomes(&self) -> Result<Vec<Income>, CoreError>;

    async fn insert_income(&self, income: Income) -> Result<String, CoreError>;

    async fn delete_income(&self, id: &str) -> Result<(), CoreError>;
}
