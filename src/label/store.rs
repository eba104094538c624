use std::collections::HashMap;

use crate::element::element_model::{ElementNode, ResourceId};
use crate::label::label_model::Label;

// ============================================================================
// Label store contract
// ============================================================================

/// Source of user-authored labels.
pub trait LabelStore {
    /// Look up the label stored for a view id (`package:id/name`).
    fn find_label_by_element_id(&self, view_id: &str) -> Option<Label>;

    /// Whether the element is missing a label the user could supply.
    fn element_needs_label(&self, element: &ElementNode) -> bool;
}

// ============================================================================
// In-memory implementation
// ============================================================================

/// Label store backed by a map from `(package, view name)` to label.
#[derive(Debug, Default)]
pub struct InMemoryLabelStore {
    labels: HashMap<(String, String), Label>,
    next_id: u64,
}

impl InMemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels(labels: Vec<Label>) -> Self {
        let mut store = Self::new();
        for label in labels {
            store.insert(label);
        }
        store
    }

    /// Insert or replace a label. Labels without an id get the next free one.
    pub fn insert(&mut self, mut label: Label) -> Option<Label> {
        if label.id == 0 {
            self.next_id += 1;
            label.id = self.next_id;
        } else {
            self.next_id = self.next_id.max(label.id);
        }
        let key = (label.package_name.clone(), label.view_name.clone());
        self.labels.insert(key, label)
    }

    pub fn remove(&mut self, resource_id: &ResourceId) -> Option<Label> {
        self.labels
            .remove(&(resource_id.package_name.clone(), resource_id.view_name.clone()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn get(&self, resource_id: &ResourceId) -> Option<&Label> {
        self.labels
            .get(&(resource_id.package_name.clone(), resource_id.view_name.clone()))
    }
}

impl LabelStore for InMemoryLabelStore {
    fn find_label_by_element_id(&self, view_id: &str) -> Option<Label> {
        let resource_id = ResourceId::parse(view_id)?;
        self.get(&resource_id).cloned()
    }

    fn element_needs_label(&self, element: &ElementNode) -> bool {
        // Only views with a well-formed resource name can carry a label.
        let Some(resource_id) = element.resource_id() else {
            return false;
        };

        if element.has_own_text() {
            return false;
        }

        self.get(&resource_id)
            .and_then(|l| l.non_empty_text())
            .is_none()
    }
}
