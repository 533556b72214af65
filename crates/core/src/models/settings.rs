use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configurable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Per-category monthly spending thresholds. A category is flagged
    /// when its monthly total reaches 90% of its threshold.
    pub alert_thresholds: HashMap<String, f64>,

    /// Symbol used when formatting amounts for display (e.g., "R$", "$").
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        let mut alert_thresholds = HashMap::new();
        alert_thresholds.insert("food".to_string(), 500.0);
        alert_thresholds.insert("transport".to_string(), 300.0);
        alert_thresholds.insert("leisure".to_string(), 200.0);

        Self {
            alert_thresholds,
            currency_symbol: "R$".to_string(),
        }
    }
}

impl Settings {
    /// Threshold configured for a category, if any.
    #[must_use]
    pub fn threshold_for(&self, category: &str) -> Option<f64> {
        self.alert_thresholds.get(category).copied()
    }
}
