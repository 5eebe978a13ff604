use std::str::FromStr;

use crate::{
    constants::{NO_MATCHES_MESSAGE, UPSTREAM_ERROR_MESSAGE},
    error::RenderError,
    locations::FilterResult,
};

/// How matched locations are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}` (expected yaml or json)")),
        }
    }
}

impl FilterResult {
    /// Text to show for this outcome: the serialized matches, or one of the
    /// two fixed messages.
    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match self {
            FilterResult::Matches(locations) => match format {
                OutputFormat::Yaml => Ok(serde_yaml::to_string(locations)?),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(locations)?),
            },
            FilterResult::NoMatches => Ok(NO_MATCHES_MESSAGE.to_string()),
            FilterResult::UpstreamError(_) => Ok(UPSTREAM_ERROR_MESSAGE.to_string()),
        }
    }
}
