use crate::contents::error::{ContentsError, read_structured};
use crate::element::element_model::ElementNode;

/// Load a screen snapshot: a JSON (or YAML) array of elements.
pub fn load_snapshot(path: &str) -> Result<Vec<ElementNode>, ContentsError> {
    read_structured(path, &format!("snapshot {}", path))
}
