use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::models::expense::Expense;

/// Source of fresh record identifiers.
///
/// Injectable so tests can pin ids deterministically while production code
/// uses random UUIDs.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by UUID v4.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator producing "gen-1", "gen-2", ... in call order.
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    counter: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("gen-{n}")
    }
}

/// Assigns ids so that every record in a collection has a non-empty id
/// unique within that collection.
pub struct IdentityService;

impl IdentityService {
    pub fn new() -> Self {
        Self
    }

    /// Walk the records in order; an empty id gets a fresh one, a repeated
    /// id gets regenerated until unique. Each generated candidate is checked
    /// against the ids seen so far — collisions are re-checked, never
    /// assumed impossible. Order-preserving and idempotent: a collection
    /// that is already unique passes through unchanged.
    pub fn sanitize(&self, expenses: Vec<Expense>, ids: &dyn IdGenerator) -> Vec<Expense> {
        let mut seen: HashSet<String> = HashSet::with_capacity(expenses.len());
        let mut out = Vec::with_capacity(expenses.len());

        for mut expense in expenses {
            if expense.id.is_empty() || seen.contains(&expense.id) {
                expense.id = Self::fresh_id(&seen, ids);
            }
            seen.insert(expense.id.clone());
            out.push(expense);
        }

        out
    }

    fn fresh_id(seen: &HashSet<String>, ids: &dyn IdGenerator) -> String {
        loop {
            let candidate = ids.generate();
            if !candidate.is_empty() && !seen.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}
