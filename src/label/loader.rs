use serde::Deserialize;

use crate::contents::error::{ContentsError, read_structured};
use crate::label::label_model::Label;
use crate::label::store::InMemoryLabelStore;

/// On-disk label file: either a bare list or `{ labels: [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LabelFile {
    List(Vec<Label>),
    Wrapped { labels: Vec<Label> },
}

/// Load labels from a JSON or YAML file.
pub fn load_labels(path: &str) -> Result<Vec<Label>, ContentsError> {
    let file: LabelFile = read_structured(path, &format!("labels {}", path))?;
    Ok(match file {
        LabelFile::List(labels) => labels,
        LabelFile::Wrapped { labels } => labels,
    })
}

/// Load a label file straight into an in-memory store.
pub fn load_label_store(path: &str) -> Result<InMemoryLabelStore, ContentsError> {
    Ok(InMemoryLabelStore::from_labels(load_labels(path)?))
}
