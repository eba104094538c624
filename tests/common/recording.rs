use std::cell::RefCell;
use std::rc::Rc;

use image_contents::caption::caption_model::CaptionRecord;
use image_contents::caption::storage::{CaptionCache, LruCaptionCache};
use image_contents::element::element_model::ElementNode;
use image_contents::element::identity::display_name;
use image_contents::Locale;

/// Caption cache that records every call made to it.
pub struct RecordingCache {
    pub inner: LruCaptionCache,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingCache {
    pub fn new(inner: LruCaptionCache) -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                inner,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl CaptionCache for RecordingCache {
    fn lookup_caption(&self, element: &ElementNode) -> Option<CaptionRecord> {
        self.calls
            .borrow_mut()
            .push(format!("lookup_caption:{}", display_name(element)));
        self.inner.lookup_caption(element)
    }

    fn lookup_icon_label_for_locale(&self, locale: &Locale, element: &ElementNode) -> Option<String> {
        self.calls
            .borrow_mut()
            .push(format!("lookup_localized:{}:{}", locale, display_name(element)));
        self.inner.lookup_icon_label_for_locale(locale, element)
    }

    fn refresh_icon_label(&mut self, element: &ElementNode, text: &str) {
        self.calls
            .borrow_mut()
            .push(format!("refresh:{}:{}", display_name(element), text));
        self.inner.refresh_icon_label(element, text)
    }

    fn clear_all(&mut self) {
        self.calls.borrow_mut().push("clear_all".to_string());
        self.inner.clear_all()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

pub fn count(calls: &Rc<RefCell<Vec<String>>>, prefix: &str) -> usize {
    calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
}
