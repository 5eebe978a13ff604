use reqwest::Client;

use crate::{
    criteria::{SearchCriteria, ValidationErrors},
    locations::{self, FilterResult},
    settings::Settings,
};

/// Validates a search and runs it against the configured lookup service.
#[derive(Clone, Debug)]
pub struct LocationFinder {
    http_client: Client,
    settings: Settings,
}

impl LocationFinder {
    pub fn new(http_client: Client, settings: Settings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    /// Invalid input is returned with every failing field and never reaches
    /// the network.
    pub async fn find(&self, criteria: &SearchCriteria) -> Result<FilterResult, ValidationErrors> {
        criteria.validate().into_result()?;
        Ok(locations::find(&self.http_client, &self.settings, criteria).await)
    }
}
