pub mod caption_model;
pub mod loader;
pub mod storage;
