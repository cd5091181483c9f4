pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::http::DEFAULT_DIRECTORY_URL;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cep-lookup")]
#[command(about = "Brazilian postal code (CEP) lookup service")]
pub struct CliConfig {
    #[arg(long, env = "CEP_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    #[arg(long, env = "CEP_DIRECTORY_URL", default_value = DEFAULT_DIRECTORY_URL)]
    pub directory_url: String,

    /// TOML configuration file; replaces the address and directory options when given
    #[arg(short, long, env = "CEP_CONFIG")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "CEP_JSON_LOGS", help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn directory_url(&self) -> &str {
        &self.directory_url
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind_addr", &self.bind_addr)?;
        validate_url("directory_url", &self.directory_url)?;
        Ok(())
    }
}
