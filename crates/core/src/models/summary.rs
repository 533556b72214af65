use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// A category whose monthly spending is at or past the early-warning margin
/// (90% of its configured threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAlert {
    pub category: String,

    /// What was actually spent in the category this month
    pub monthly_total: f64,

    /// The configured limit the spending is measured against
    pub threshold: f64,
}

/// The month-level report the expense summary panel renders.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,

    /// Sum of all expenses in the (year, month) bucket
    pub monthly_total: f64,

    /// Per-category totals scoped to the FULL year (not just the month),
    /// sorted largest first
    pub category_totals: Vec<CategoryTotal>,

    /// Categories at or past 90% of their monthly threshold
    pub alerts: Vec<CategoryAlert>,
}

/// One bar of the 12-bucket monthly spending chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Calendar month, 1–12
    pub month: u32,
    pub total: f64,
}

/// Per-category totals for a single month, with the extremes picked out
/// for the by-type chart's side panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub year: i32,
    pub month: u32,

    /// Sorted largest first
    pub totals: Vec<CategoryTotal>,

    /// Highest-spending category of the month, if any expenses exist
    pub top: Option<CategoryTotal>,

    /// Lowest-spending category of the month, if any expenses exist
    pub lowest: Option<CategoryTotal>,
}

/// One cell of the calendar grid: everything spent on a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySpending {
    /// Day of month, 1-based
    pub day: u32,

    /// Sum of the day's expense amounts
    pub total: f64,

    /// The expenses dated on this day
    pub expenses: Vec<Expense>,
}

/// Income totals for a month or a whole year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub year: i32,

    /// `None` means the summary covers the whole year
    pub month: Option<u32>,

    pub total: f64,

    /// Per-category totals, sorted largest first
    pub by_category: Vec<CategoryTotal>,
}
