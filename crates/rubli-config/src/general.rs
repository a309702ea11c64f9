//! General presentation configuration.

use serde::{Deserialize, Serialize};

const fn default_per_page() -> u32 {
    50
}

/// Number of bars kept by top-N flow charts.
const fn default_top_n() -> usize {
    15
}

/// Axis label width before truncation.
const fn default_label_width() -> usize {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for paginated list commands.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Default size of top-N flow extractions.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Maximum characters kept in chart labels.
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            top_n: default_top_n(),
            label_width: default_label_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.per_page, 50);
        assert_eq!(config.top_n, 15);
        assert_eq!(config.label_width, 30);
    }
}
