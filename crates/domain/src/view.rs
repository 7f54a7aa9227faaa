//! Dashboard views: the operations selectable from the side panel.

use std::fmt;

/// One of the four mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    SingleTranslate,
    BulkTranslate,
    HealthCheck,
    Logs,
}

impl View {
    /// All views in side-panel order.
    pub const ALL: [Self; 4] = [
        Self::SingleTranslate,
        Self::BulkTranslate,
        Self::HealthCheck,
        Self::Logs,
    ];

    /// Label used in the side panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleTranslate => "Single Translate",
            Self::BulkTranslate => "Bulk Translate",
            Self::HealthCheck => "Health Check",
            Self::Logs => "View Logs",
        }
    }

    /// Page heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SingleTranslate => "Single Translate",
            Self::BulkTranslate => "Bulk Translate",
            Self::HealthCheck => "Health Check",
            Self::Logs => "Translation Logs",
        }
    }

    /// Dashboard path serving the view.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SingleTranslate => "/translate",
            Self::BulkTranslate => "/bulk",
            Self::HealthCheck => "/status",
            Self::Logs => "/logs",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_views_in_panel_order() {
        let labels: Vec<&str> = View::ALL.iter().map(|view| view.label()).collect();
        assert_eq!(
            labels,
            ["Single Translate", "Bulk Translate", "Health Check", "View Logs"]
        );
    }

    #[test]
    fn should_give_each_view_a_distinct_path() {
        let mut paths: Vec<&str> = View::ALL.iter().map(|view| view.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), View::ALL.len());
    }
}
