use serde::{Deserialize, Serialize};

/// A user-authored label for a view, keyed by package and view name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: u64,
    pub package_name: String,
    pub view_name: String,

    /// May be empty when the user cleared the label without deleting it.
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default)]
    pub timestamp_ms: u64,
}

impl Label {
    pub fn new(package_name: &str, view_name: &str, text: &str) -> Self {
        Self {
            id: 0,
            package_name: package_name.to_string(),
            view_name: view_name.to_string(),
            text: Some(text.to_string()),
            locale: None,
            timestamp_ms: 0,
        }
    }

    /// The label text if it is present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}
