use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the request failed with status code: {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("the setting `{0}` is required")]
    Missing(&'static str),
    #[error("unable to read the settings file: {0}")]
    ReadError(#[source] std::io::Error),
    #[error("unable to write the settings file: {0}")]
    WriteError(#[source] std::io::Error),
    #[error("unable to parse the settings file: {0}")]
    ParseError(#[source] serde_yaml::Error),
    #[error("unable to serialize the settings: {0}")]
    SerializeError(#[source] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unable to render locations as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unable to render locations as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
