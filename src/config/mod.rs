use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bind_addr, validate_non_empty_string, validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "qiesi-convert")]
#[command(about = "JSON → Excel conversion service")]
pub struct ServerConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = "QIESI", help = "Prefix for generated filenames")]
    pub filename_prefix: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("bind", &self.bind)?;
        validate_positive_number("port", self.port as usize, 1)?;
        validate_non_empty_string("filename_prefix", &self.filename_prefix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::parse_from(["qiesi-convert"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 8000);
        assert_eq!(config.filename_prefix, "QIESI");
    }

    #[test]
    fn test_bad_bind_addr_rejected() {
        let config = ServerConfig::parse_from(["qiesi-convert", "--bind", "not-an-ip"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let config = ServerConfig::parse_from(["qiesi-convert", "--filename-prefix", "  "]);
        assert!(config.validate().is_err());
    }
}
