use std::collections::HashMap;

use chrono::Datelike;

use crate::models::expense::Expense;
use crate::models::income::Income;
use crate::models::settings::Settings;
use crate::models::summary::{
    CategoryAlert, CategoryBreakdown, CategoryTotal, DaySpending, IncomeSummary, MonthSummary,
    MonthlyTotal,
};
use crate::util;

/// Fraction of a category threshold at which an alert fires. The margin is
/// an early warning, not an off-by-one: spending 90% of the limit already
/// flags the category.
const ALERT_MARGIN: f64 = 0.9;

/// Computes the aggregate views the presentation layer renders: monthly
/// totals, per-category sums, threshold alerts, chart buckets, and the
/// calendar grid.
///
/// Pure business logic over already-resolved collections — no I/O, no
/// caching. An empty input collection yields zero totals, never an error.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// The month-level report: monthly total, full-year category totals,
    /// and alerts for categories at or past 90% of their threshold.
    pub fn summarize(
        &self,
        expenses: &[Expense],
        settings: &Settings,
        year: i32,
        month: u32,
    ) -> MonthSummary {
        let monthly: Vec<&Expense> = expenses.iter().filter(|e| e.in_month(year, month)).collect();
        let monthly_total = monthly.iter().map(|e| e.amount).sum();

        // Category totals are scoped to the full year, matching the annual
        // per-type panel; alerts are scoped to the month.
        let yearly = expenses.iter().filter(|e| e.in_year(year));
        let category_totals = Self::totals_by_category(yearly);

        let mut monthly_by_category: HashMap<&str, f64> = HashMap::new();
        for expense in &monthly {
            *monthly_by_category
                .entry(expense.category.as_str())
                .or_insert(0.0) += expense.amount;
        }

        let mut alerts: Vec<CategoryAlert> = settings
            .alert_thresholds
            .iter()
            .filter_map(|(category, threshold)| {
                let spent = monthly_by_category.get(category.as_str()).copied()?;
                (spent >= threshold * ALERT_MARGIN).then(|| CategoryAlert {
                    category: category.clone(),
                    monthly_total: spent,
                    threshold: *threshold,
                })
            })
            .collect();
        alerts.sort_by(|a, b| a.category.cmp(&b.category));

        MonthSummary {
            year,
            month,
            monthly_total,
            category_totals,
            alerts,
        }
    }

    /// Chart data: exactly 12 buckets, one per calendar month, zero-filled.
    pub fn monthly_totals(&self, expenses: &[Expense], year: i32) -> Vec<MonthlyTotal> {
        (1..=12)
            .map(|month| MonthlyTotal {
                month,
                total: expenses
                    .iter()
                    .filter(|e| e.in_month(year, month))
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect()
    }

    /// Per-category totals for one month, with the highest and lowest
    /// spending categories picked out.
    pub fn category_breakdown(
        &self,
        expenses: &[Expense],
        year: i32,
        month: u32,
    ) -> CategoryBreakdown {
        let totals =
            Self::totals_by_category(expenses.iter().filter(|e| e.in_month(year, month)));

        // totals are sorted largest first
        let top = totals.first().cloned();
        let lowest = totals.last().cloned();

        CategoryBreakdown {
            year,
            month,
            totals,
            top,
            lowest,
        }
    }

    /// Calendar grid data: one bucket per day of the month, zero-filled,
    /// each carrying the day's expenses. Empty for an invalid month.
    pub fn daily_spending(&self, expenses: &[Expense], year: i32, month: u32) -> Vec<DaySpending> {
        let Some(days) = util::days_in_month(year, month) else {
            return Vec::new();
        };

        let mut by_day: HashMap<u32, Vec<Expense>> = HashMap::new();
        for expense in expenses.iter().filter(|e| e.in_month(year, month)) {
            by_day
                .entry(expense.date.day())
                .or_default()
                .push(expense.clone());
        }

        (1..=days)
            .map(|day| {
                let expenses = by_day.remove(&day).unwrap_or_default();
                DaySpending {
                    day,
                    total: expenses.iter().map(|e| e.amount).sum(),
                    expenses,
                }
            })
            .collect()
    }

    /// Income totals for a month (`Some(month)`) or a whole year (`None`).
    pub fn summarize_incomes(
        &self,
        incomes: &[Income],
        year: i32,
        month: Option<u32>,
    ) -> IncomeSummary {
        let selected: Vec<&Income> = incomes
            .iter()
            .filter(|i| match month {
                Some(m) => i.in_month(year, m),
                None => i.in_year(year),
            })
            .collect();

        let mut by_category: HashMap<&str, f64> = HashMap::new();
        for income in &selected {
            *by_category.entry(income.category.as_str()).or_insert(0.0) += income.amount;
        }
        let mut by_category: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        Self::sort_totals(&mut by_category);

        IncomeSummary {
            year,
            month,
            total: selected.iter().map(|i| i.amount).sum(),
            by_category,
        }
    }

    fn totals_by_category<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<CategoryTotal> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
        }
        let mut totals: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        Self::sort_totals(&mut totals);
        totals
    }

    /// Largest first; ties broken by category name for a stable display order.
    fn sort_totals(totals: &mut [CategoryTotal]) {
        totals.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
