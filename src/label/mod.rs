pub mod label_model;
pub mod loader;
pub mod store;
