//! Text descriptions for screen elements.
//!
//! [`contents::resolver::ImageContents`] merges user-authored labels
//! ([`label`]) with cached image-caption results ([`caption`]) and keeps the
//! caption cache consistent with the current speech locale.

pub mod caption;
pub mod cli;
pub mod contents;
pub mod element;
pub mod label;
pub mod report;
pub mod trace;

pub use caption::storage::{CaptionCache, LruCaptionCache};
pub use contents::locale::Locale;
pub use contents::resolver::{Description, DescriptionSource, ImageContents, Resolution};
pub use element::element_model::ElementNode;
pub use label::store::{InMemoryLabelStore, LabelStore};
