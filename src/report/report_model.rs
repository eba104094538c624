use serde::{Deserialize, Serialize};

use crate::contents::resolver::Description;

// ============================================================================
// Describe report: one entry per element of a snapshot
// ============================================================================

/// Everything the resolver knows about one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementReport {
    /// Display name (view id, or class and node id)
    pub element: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_label: Option<String>,

    pub needs_label: bool,

    /// Winning description, if any source produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

/// Aggregated report for a whole snapshot.
///
/// Built from a `Vec<ElementReport>` via `from_elements()`. Consumed by the
/// console and JSON renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeReport {
    pub locale: String,
    pub total: usize,
    pub described: usize,
    pub needing_label: usize,
    pub elements: Vec<ElementReport>,
}

impl DescribeReport {
    pub fn from_elements(locale: &str, elements: Vec<ElementReport>) -> Self {
        let total = elements.len();
        let described = elements.iter().filter(|e| e.description.is_some()).count();
        let needing_label = elements.iter().filter(|e| e.needs_label).count();
        Self {
            locale: locale.to_string(),
            total,
            described,
            needing_label,
            elements,
        }
    }

    /// Elements with no description from any source.
    pub fn undescribed(&self) -> impl Iterator<Item = &ElementReport> {
        self.elements.iter().filter(|e| e.description.is_none())
    }
}
