pub mod element_model;
pub mod identity;
pub mod snapshot;
