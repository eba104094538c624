use serde::{Deserialize, Serialize};

/// A snapshot of a single on-screen element.
///
/// Callers own the element; the resolver only borrows it for the duration
/// of one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    #[serde(rename = "windowId", default)]
    pub window_id: i32,
    #[serde(rename = "nodeId", default)]
    pub node_id: i64,
    /// Resource name, e.g. `com.example.app:id/play_button`
    #[serde(rename = "viewId", default)]
    pub view_id: Option<String>,
    #[serde(rename = "className", default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "contentDescription", default)]
    pub content_description: Option<String>,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub focusable: bool,
    #[serde(default)]
    pub bounds: Bounds,
}

impl ElementNode {
    pub fn new(window_id: i32, node_id: i64) -> Self {
        Self {
            window_id,
            node_id,
            view_id: None,
            class_name: None,
            text: None,
            content_description: None,
            clickable: false,
            focusable: false,
            bounds: Bounds::default(),
        }
    }

    pub fn with_view_id(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = Some(view_id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    /// Parsed view id, if present and well formed.
    pub fn resource_id(&self) -> Option<ResourceId> {
        self.view_id.as_deref().and_then(ResourceId::parse)
    }

    /// True when the element already exposes text or a content description.
    pub fn has_own_text(&self) -> bool {
        let non_blank = |s: &Option<String>| s.as_deref().is_some_and(|t| !t.trim().is_empty());
        non_blank(&self.text) || non_blank(&self.content_description)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A view id split into its package and entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub package_name: String,
    pub view_name: String,
}

impl ResourceId {
    /// Parse `package:id/name`. Anything else (including the bare `name`
    /// form some frameworks report) is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let (package_name, rest) = raw.split_once(':')?;
        let (kind, view_name) = rest.split_once('/')?;

        if package_name.is_empty() || kind != "id" || view_name.is_empty() {
            return None;
        }

        Some(Self {
            package_name: package_name.to_string(),
            view_name: view_name.to_string(),
        })
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:id/{}", self.package_name, self.view_name)
    }
}
