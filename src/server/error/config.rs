use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into its expected type.
    ///
    /// Carries the variable name; the raw value is intentionally omitted in case
    /// it is sensitive.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
