pub mod dict;
pub mod error;
