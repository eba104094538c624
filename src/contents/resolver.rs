use serde::{Deserialize, Serialize};

use crate::caption::storage::CaptionCache;
use crate::contents::locale::Locale;
use crate::element::element_model::ElementNode;
use crate::label::store::LabelStore;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

// ============================================================================
// Description model
// ============================================================================

/// Where a description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionSource {
    UserLabel,
    IconLabel,
    CaptionText,
}

impl std::fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DescriptionSource::UserLabel => "user_label",
            DescriptionSource::IconLabel => "icon_label",
            DescriptionSource::CaptionText => "caption_text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    pub source: DescriptionSource,
}

// ============================================================================
// ImageContents: merges custom labels with cached caption results
// ============================================================================

/// Answers "what text describes this element" from a label store and a
/// caption cache. Either collaborator may be absent, in which case the
/// operations that depend on it report nothing.
///
/// The resolver remembers the locale of the last icon-label query. When
/// a query arrives for a different locale the whole caption cache is
/// cleared, so icon labels resolved under the previous language are never
/// served.
pub struct ImageContents {
    label_store: Option<Box<dyn LabelStore>>,
    caption_cache: Option<Box<dyn CaptionCache>>,
    current_locale: Option<Locale>,
    tracer: TraceLogger,
}

impl ImageContents {
    pub fn new(
        label_store: Option<Box<dyn LabelStore>>,
        caption_cache: Option<Box<dyn CaptionCache>>,
    ) -> Self {
        Self {
            label_store,
            caption_cache,
            current_locale: None,
            tracer: TraceLogger::disabled(),
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn tracer(&self) -> &TraceLogger {
        &self.tracer
    }

    /// Locale of the most recent `icon_label` query.
    pub fn current_locale(&self) -> Option<&Locale> {
        self.current_locale.as_ref()
    }

    pub fn caption_cache(&self) -> Option<&dyn CaptionCache> {
        self.caption_cache.as_deref()
    }

    /// Custom label for the element's view id, if one with text exists.
    pub fn label(&self, element: &ElementNode) -> Option<String> {
        let store = self.label_store.as_ref()?;
        let view_id = element.view_id.as_deref()?;

        store
            .find_label_by_element_id(view_id)
            .and_then(|label| label.non_empty_text().map(str::to_string))
    }

    /// OCR text of the cached caption for the element.
    pub fn caption_text(&self, element: &ElementNode) -> Option<String> {
        self.caption_cache
            .as_ref()?
            .lookup_caption(element)
            .and_then(|record| record.ocr_text)
    }

    /// Localized label of the icon detected in the element.
    ///
    /// A label found for `locale` is written back to the cache; the
    /// fallback taken from the element's general caption record is not.
    pub fn icon_label(&mut self, locale: &Locale, element: &ElementNode) -> Option<String> {
        let cache = self.caption_cache.as_mut()?;
        let mut event = TraceEvent::now("icon_label")
            .with_element(element)
            .with_locale(locale);

        if self.current_locale.as_ref() != Some(locale) {
            if let Some(previous) = &self.current_locale {
                cache.clear_all();
                event = event.with_cache_cleared(previous);
            }
            self.current_locale = Some(locale.clone());
        }

        let localized = cache.lookup_icon_label_for_locale(locale, element);
        let label = match localized {
            Some(text) => {
                cache.refresh_icon_label(element, &text);
                event = event.with_source("localized");
                Some(text)
            }
            None => {
                let fallback = cache
                    .lookup_caption(element)
                    .and_then(|record| record.detected_icon_label);
                if fallback.is_some() {
                    event = event.with_source("caption_record");
                }
                fallback
            }
        };

        self.tracer.log(&event.with_found(label.is_some()));
        label
    }

    /// Whether the label store considers the element unlabeled.
    pub fn needs_label(&self, element: &ElementNode) -> bool {
        self.label_store
            .as_ref()
            .is_some_and(|store| store.element_needs_label(element))
    }

    /// Best available description: user label, then icon label, then OCR text.
    ///
    /// Stops at the first source that answers, so later sources are not queried.
    pub fn describe(&mut self, locale: &Locale, element: &ElementNode) -> Option<Description> {
        let found = if let Some(text) = self.label(element) {
            Some(Description { text, source: DescriptionSource::UserLabel })
        } else if let Some(text) = self.icon_label(locale, element) {
            Some(Description { text, source: DescriptionSource::IconLabel })
        } else {
            self.caption_text(element)
                .map(|text| Description { text, source: DescriptionSource::CaptionText })
        };

        self.log_description(locale, element, &found);
        found
    }

    /// Query every source exactly once and pick the description from the
    /// results, in the same order as `describe`.
    pub fn resolve(&mut self, locale: &Locale, element: &ElementNode) -> Resolution {
        let label = self.label(element);
        let icon_label = self.icon_label(locale, element);
        let caption_text = self.caption_text(element);

        let description = pick_description(label.as_deref(), icon_label.as_deref(), caption_text.as_deref());
        self.log_description(locale, element, &description);

        Resolution {
            label,
            icon_label,
            caption_text,
            description,
        }
    }

    fn log_description(&self, locale: &Locale, element: &ElementNode, found: &Option<Description>) {
        let mut event = TraceEvent::now("describe")
            .with_element(element)
            .with_locale(locale)
            .with_found(found.is_some());
        if let Some(description) = found {
            event = event.with_source(description.source);
        }
        self.tracer.log(&event);
    }
}

/// Results of every source for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: Option<String>,
    pub icon_label: Option<String>,
    pub caption_text: Option<String>,
    pub description: Option<Description>,
}

fn pick_description(
    label: Option<&str>,
    icon_label: Option<&str>,
    caption_text: Option<&str>,
) -> Option<Description> {
    [
        (label, DescriptionSource::UserLabel),
        (icon_label, DescriptionSource::IconLabel),
        (caption_text, DescriptionSource::CaptionText),
    ]
    .into_iter()
    .find_map(|(text, source)| {
        text.map(|t| Description {
            text: t.to_string(),
            source,
        })
    })
}
