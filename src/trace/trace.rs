use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::contents::locale::Locale;
use crate::element::element_model::ElementNode;
use crate::element::identity::element_key;

#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub operation: String,

    pub element: Option<String>,
    pub locale: Option<String>,

    pub source: Option<String>,
    pub found: bool,

    pub cache_cleared: bool,
    pub previous_locale: Option<String>,
}

impl TraceEvent {
    pub fn now(operation: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            operation: operation.to_string(),
            element: None,
            locale: None,
            source: None,
            found: false,
            cache_cleared: false,
            previous_locale: None,
        }
    }

    pub fn with_element(mut self, element: &ElementNode) -> Self {
        self.element = Some(element_key(element).0);
        self
    }

    pub fn with_locale(mut self, locale: &Locale) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_source(mut self, source: impl ToString) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_found(mut self, found: bool) -> Self {
        self.found = found;
        self
    }

    pub fn with_cache_cleared(mut self, previous: &Locale) -> Self {
        self.cache_cleared = true;
        self.previous_locale = Some(previous.to_string());
        self
    }
}
