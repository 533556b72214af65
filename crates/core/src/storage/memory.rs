use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::expense::Expense;
use crate::models::income::Income;
use crate::models::recurring::RecurringExpense;
use crate::storage::traits::FinanceStore;

/// In-memory document store: three mutex-guarded collections in insertion
/// order. Backs tests and embedded/offline use; a real deployment puts a
/// database behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    expenses: Mutex<Vec<Expense>>,
    recurring: Mutex<Vec<RecurringExpense>>,
    incomes: Mutex<Vec<Income>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard<'a, T>(lock: &'a Mutex<T>) -> Result<MutexGuard<'a, T>, CoreError> {
        lock.lock()
            .map_err(|_| CoreError::StorageUnavailable("in-memory store lock poisoned".into()))
    }

    fn assign_id(id: &str) -> String {
        if id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            id.to_string()
        }
    }
}

#[async_trait]
impl FinanceStore for InMemoryStore {
    fn name(&self) -> &str {
        "InMemoryStore"
    }

    // ── Expenses ────────────────────────────────────────────────────

    async fn list_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(Self::guard(&self.expenses)?.clone())
    }

    async fn insert_expense(&self, mut expense: Expense) -> Result<String, CoreError> {
        expense.id = Self::assign_id(&expense.id);
        let id = expense.id.clone();
        Self::guard(&self.expenses)?.push(expense);
        Ok(id)
    }

    async fn delete_expense(&self, id: &str) -> Result<(), CoreError> {
        let mut expenses = Self::guard(&self.expenses)?;
        let idx = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))?;
        expenses.remove(idx);
        Ok(())
    }

    // ── Recurring definitions ───────────────────────────────────────

    async fn list_recurring(&self) -> Result<Vec<RecurringExpense>, CoreError> {
        Ok(Self::guard(&self.recurring)?.clone())
    }

    async fn insert_recurring(&self, mut recurring: RecurringExpense) -> Result<String, CoreError> {
        recurring.id = Self::assign_id(&recurring.id);
        let id = recurring.id.clone();
        Self::guard(&self.recurring)?.push(recurring);
        Ok(id)
    }

    async fn delete_recurring(&self, id: &str) -> Result<(), CoreError> {
        let mut recurring = Self::guard(&self.recurring)?;
        let idx = recurring
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::RecurringNotFound(id.to_string()))?;
        recurring.remove(idx);
        Ok(())
    }

    // ── Incomes ─────────────────────────────────────────────────────

    async fn list_incomes(&self) -> Result<Vec<Income>, CoreError> {
        Ok(Self::guard(&self.incomes)?.clone())
    }

    async fn insert_income(&self, mut income: Income) -> Result<String, CoreError> {
        income.id = Self::assign_id(&income.id);
        let id = income.id.clone();
        Self::guard(&self.incomes)?.push(income);
        Ok(id)
    }

    async fn delete_income(&self, id: &str) -> Result<(), CoreError> {
        let mut incomes = Self::guard(&self.incomes)?;
        let idx = incomes
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::IncomeNotFound(id.to_string()))?;
        incomes.remove(idx);
        Ok(())
    }
}
