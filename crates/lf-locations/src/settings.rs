use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{API_URL_ENV, HEADER_NAME_ENV, HEADER_VALUE_ENV},
    error::SettingsError,
};

/// Where to send lookups and which credential header to attach.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_url: String,
    /// Name of the credential header. Older settings files call this `api_key`.
    #[serde(alias = "api_key")]
    pub header_name: String,
    #[serde(alias = "api_value")]
    pub header_value: String,
}

impl Settings {
    /// From raw values, without checking them.
    pub fn new(api_url: &str, header_name: &str, header_value: &str) -> Self {
        Self {
            api_url: api_url.to_owned(),
            header_name: header_name.to_owned(),
            header_value: header_value.to_owned(),
        }
    }

    /// From raw values, requiring every one of them to be non-empty.
    pub fn try_new(
        api_url: &str,
        header_name: &str,
        header_value: &str,
    ) -> Result<Self, SettingsError> {
        let settings = Self::new(api_url, header_name, header_value);
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("api_url", &self.api_url),
            ("header_name", &self.header_name),
            ("header_value", &self.header_value),
        ] {
            if value.trim().is_empty() {
                return Err(SettingsError::Missing(name));
            }
        }
        Ok(())
    }

    /// Read settings from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, so tests don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| lookup(var).ok_or(SettingsError::Missing(var));
        Self::try_new(
            &require(API_URL_ENV)?,
            &require(HEADER_NAME_ENV)?,
            &require(HEADER_VALUE_ENV)?,
        )
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let file_contents = tokio::fs::read_to_string(path)
            .await
            .map_err(SettingsError::ReadError)?;
        let settings: Self =
            serde_yaml::from_str(&file_contents).map_err(SettingsError::ParseError)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path` when given, otherwise fall back to the environment.
    pub async fn load_or_env(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::from_env(),
        }
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        self.validate()?;
        let serialized = serde_yaml::to_string(self).map_err(SettingsError::SerializeError)?;
        tokio::fs::write(path, serialized)
            .await
            .map_err(SettingsError::WriteError)?;
        Ok(())
    }

    /// The header value with all but its last four characters hidden.
    pub fn masked_header_value(&self) -> String {
        let chars: Vec<char> = self.header_value.chars().collect();
        let hidden = if chars.len() <= 4 {
            chars.len()
        } else {
            chars.len() - 4
        };
        let visible: String = chars[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), visible)
    }
}

// The header value is a credential, keep it out of logs and panics.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("header_name", &self.header_name)
            .field("header_value", &"<redacted>")
            .finish()
    }
}
