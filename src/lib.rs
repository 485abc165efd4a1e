pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{proxy::ProxyRule, toml_config::TomlConfig};
pub use core::{conformance::ConformanceReport, translation::plan_translation};
pub use domain::language::{Language, LANGUAGES};
pub use domain::model::{Message, Room, User};
pub use utils::error::{ChatError, Result};
pub use utils::validation::Validate;
