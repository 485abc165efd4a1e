pub mod conformance;
pub mod translation;

pub use crate::domain::ports::ConfigProvider;
