use std::num::NonZeroUsize;

use lru::LruCache;

use crate::caption::caption_model::CaptionRecord;
use crate::contents::locale::Locale;
use crate::element::element_model::ElementNode;
use crate::element::identity::{ElementKey, element_key};

pub const DEFAULT_CACHE_CAPACITY: usize = 500;

// ============================================================================
// Caption cache contract
// ============================================================================

/// Cache of caption results, keyed by element.
pub trait CaptionCache {
    fn lookup_caption(&self, element: &ElementNode) -> Option<CaptionRecord>;

    fn lookup_icon_label_for_locale(&self, locale: &Locale, element: &ElementNode) -> Option<String>;

    /// Re-assert the icon label for an element, creating its record if needed.
    fn refresh_icon_label(&mut self, element: &ElementNode, text: &str);

    /// Drop every cached record, for every element and locale.
    fn clear_all(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Bounded LRU implementation
// ============================================================================

/// Caption cache holding at most `capacity` records, evicting the least
/// recently written one. Lookups do not change recency.
#[derive(Debug)]
pub struct LruCaptionCache {
    lru: LruCache<ElementKey, CaptionRecord>,
}

impl LruCaptionCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            lru: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.lru.cap().get()
    }

    pub fn insert(&mut self, element: &ElementNode, record: CaptionRecord) {
        self.lru.put(element_key(element), record);
    }

    pub fn put_ocr_text(&mut self, element: &ElementNode, text: &str) {
        self.entry(element).ocr_text = Some(text.to_string());
    }

    pub fn put_localized_icon_label(&mut self, element: &ElementNode, locale: Locale, label: &str) {
        self.entry(element)
            .localized_icon_labels
            .insert(locale, label.to_string());
    }

    pub fn contains(&self, element: &ElementNode) -> bool {
        self.lru.contains(&element_key(element))
    }

    fn entry(&mut self, element: &ElementNode) -> &mut CaptionRecord {
        self.lru.get_or_insert_mut(element_key(element), CaptionRecord::default)
    }
}

impl Default for LruCaptionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl CaptionCache for LruCaptionCache {
    fn lookup_caption(&self, element: &ElementNode) -> Option<CaptionRecord> {
        self.lru.peek(&element_key(element)).cloned()
    }

    fn lookup_icon_label_for_locale(&self, locale: &Locale, element: &ElementNode) -> Option<String> {
        self.lru
            .peek(&element_key(element))
            .and_then(|record| record.localized_icon_labels.get(locale))
            .cloned()
    }

    fn refresh_icon_label(&mut self, element: &ElementNode, text: &str) {
        self.entry(element).detected_icon_label = Some(text.to_string());
    }

    fn clear_all(&mut self) {
        self.lru.clear();
    }

    fn len(&self) -> usize {
        self.lru.len()
    }
}
