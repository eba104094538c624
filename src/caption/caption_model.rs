use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::contents::locale::Locale;
use crate::element::element_model::ElementNode;

/// Cached result of automated captioning for one element.
///
/// Field names are camelCase on disk, like the element snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRecord {
    /// Text recognized in the element's image
    #[serde(default)]
    pub ocr_text: Option<String>,

    /// Label of the detected icon, in whatever language it was last resolved
    #[serde(default)]
    pub detected_icon_label: Option<String>,

    /// Icon labels keyed by the locale they were produced for
    #[serde(default)]
    pub localized_icon_labels: HashMap<Locale, String>,
}

impl CaptionRecord {
    pub fn with_ocr_text(mut self, text: impl Into<String>) -> Self {
        self.ocr_text = Some(text.into());
        self
    }

    pub fn with_icon_label(mut self, label: impl Into<String>) -> Self {
        self.detected_icon_label = Some(label.into());
        self
    }

    pub fn with_localized_icon_label(mut self, locale: Locale, label: impl Into<String>) -> Self {
        self.localized_icon_labels.insert(locale, label.into());
        self
    }
}

/// One entry of a caption seed file: the element plus its cached record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSeed {
    pub element: ElementNode,
    #[serde(flatten)]
    pub record: CaptionRecord,
}
