pub mod error;
pub mod locale;
pub mod resolver;
