//! Configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults for the detected environment
//! 2. A TOML file (`--config`, or `config/default.toml` if present)
//! 3. `TP__`-prefixed environment variables, `__` between sections
//!    (e.g. `TP__SERVER__PORT=8080`). A `.env` file is loaded into the
//!    environment beforehand by the binary.

use std::path::{Path, PathBuf};

use tp_shared::{AppConfig, Environment};
use validator::Validate;

/// File read when no `--config` flag is given
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TP";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Load the application configuration
///
/// An explicitly given file must exist; the default file is optional. Key and
/// token settings are range-checked after merging.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();
    let defaults = AppConfig::for_environment(environment);

    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    let settings = config::Config::builder()
        .add_source(config::Config::try_from(&defaults)?)
        .add_source(config::File::from(file.as_path()).required(required))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            [server]
            port = 9100

            [keys]
            private_key_path = "/etc/tokenpair/private.pem"
            bits = 3072

            [token]
            access_token_ttl_seconds = 120
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(
            config.keys.private_key_path,
            PathBuf::from("/etc/tokenpair/private.pem")
        );
        assert_eq!(config.keys.bits, 3072);
        assert_eq!(config.token.access_token_ttl_seconds, 120);
        // untouched sections keep their defaults
        assert_eq!(config.database.query_timeout_ms, 3000);
        assert_eq!(config.token.refresh_hash_cost, 10);
    }

    #[test]
    fn test_out_of_range_hash_cost_rejected() {
        let file = toml_file("[token]\nrefresh_hash_cost = 3\n");
        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        for ttl in ["0", "-60"] {
            let file = toml_file(&format!("[token]\naccess_token_ttl_seconds = {ttl}\n"));
            let result = load_config(Some(file.path()));
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "ttl {ttl}");
        }
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/tokenpair.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file("[logging]\nlevel = \"warn\"\n");
        std::env::set_var("TP__LOGGING__LEVEL", "trace");

        let config = load_config(Some(file.path())).unwrap();
        std::env::remove_var("TP__LOGGING__LEVEL");

        assert_eq!(config.logging.level, "trace");
    }
}
