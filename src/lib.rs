pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod formatting;
pub mod schema;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::ViaCepResolver, web::router};
pub use config::toml_config::TomlConfig;
pub use core::lookup::LookupService;
pub use domain::model::{AddressRecord, NormalizedPostalCode};
pub use utils::error::{CepError, LookupError, Result};
