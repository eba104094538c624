use serde::{Deserialize, Serialize};

use crate::element::element_model::ElementNode;

/// Stable cache identity of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey(pub String);

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn element_key(el: &ElementNode) -> ElementKey {
    let raw = format!(
        "{}::{}::{}",
        el.window_id,
        el.node_id,
        el.view_id.as_deref().unwrap_or("")
    );
    ElementKey(text_fingerprint(&raw))
}

pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Short human-readable name for reports and traces.
pub fn display_name(el: &ElementNode) -> String {
    match (&el.view_id, &el.class_name) {
        (Some(id), _) => id.clone(),
        (None, Some(class)) => format!("{}#{}", class, el.node_id),
        (None, None) => format!("node#{}", el.node_id),
    }
}
