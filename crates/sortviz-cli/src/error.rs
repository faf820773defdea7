use std::path::PathBuf;

use sortviz_core::CustomInputError;
use sortviz_runtime::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(ConfigError),

    #[error("invalid values: {0}")]
    Input(#[from] CustomInputError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("failed to install log subscriber: {message}")]
    Logging { message: String },
}

impl CliError {
    /// Process exit code.
    ///
    /// - `2`: bad values or arguments
    /// - `3`: config file could not be loaded
    /// - `1`: anything else
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::InvalidArgument { .. } | Self::InvalidConfig(_) => 2,
            Self::Config { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use sortviz_core::CustomInputError;
    use sortviz_runtime::ConfigError;

    #[test]
    fn input_errors_exit_with_usage_code() {
        let error = CliError::from(CustomInputError::Empty);
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "invalid values: Please enter at least one number"
        );
    }

    #[test]
    fn config_file_errors_name_the_path() {
        let error = CliError::Config {
            path: "sortviz.toml".into(),
            source: ConfigError::Read(std::io::Error::other("denied")),
        };
        assert_eq!(error.exit_code(), 3);
        assert_eq!(
            error.to_string(),
            "config error in sortviz.toml: could not read config file: denied"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn io_errors_are_generic_failures() {
        let error = CliError::from(std::io::Error::other("boom"));
        assert_eq!(error.exit_code(), 1);
    }
}
