use crate::error::config::ConfigError;

const BACKEND_URL_VAR: &str = "VEHICLE_BACKEND_URL";
const ANON_KEY_VAR: &str = "VEHICLE_BACKEND_ANON_KEY";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the project, without the `/rest/v1` suffix
    pub backend_url: String,
    /// Public anonymous API key sent with every request
    pub anon_key: String,
}

impl Config {
    /// Reads configuration from the process environment at runtime.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()))?;
        let anon_key = std::env::var(ANON_KEY_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(ANON_KEY_VAR.to_string()))?;

        Self::new(backend_url, anon_key)
    }

    /// Reads configuration baked in at compile time by the build script.
    ///
    /// This is the only option in the browser where no process environment exists.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let backend_url = option_env!("VEHICLE_BACKEND_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar(BACKEND_URL_VAR.to_string()))?;
        let anon_key = option_env!("VEHICLE_BACKEND_ANON_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar(ANON_KEY_VAR.to_string()))?;

        Self::new(backend_url, anon_key)
    }

    /// Build-time values when present, otherwise the process environment.
    ///
    /// The build error is returned when neither source is complete.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::from_build_env() {
            Ok(config) => Ok(config),
            Err(ConfigError::MissingEnvVar(var)) => match Self::from_env() {
                Err(ConfigError::MissingEnvVar(_)) => Err(ConfigError::MissingEnvVar(var)),
                runtime => runtime,
            },
            Err(err) => Err(err),
        }
    }

    /// Validates and normalizes the provided values.
    pub fn new(
        backend_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let backend_url = backend_url.into().trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();

        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: BACKEND_URL_VAR.to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        if anon_key.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: ANON_KEY_VAR.to_string(),
                reason: "must not be blank".to_string(),
            });
        }

        Ok(Self {
            backend_url,
            anon_key,
        })
    }
}

/// Allows test utilities to hand out configuration without depending on this crate.
impl TryFrom<(String, String)> for Config {
    type Error = ConfigError;

    fn try_from((backend_url, anon_key): (String, String)) -> Result<Self, Self::Error> {
        Self::new(backend_url, anon_key)
    }
}
