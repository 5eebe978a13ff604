use crate::{
    api_interfaces::locations,
    constants::{CITY_PARAM, COUNTRY_CODE_PARAM, POSTAL_CODE_PARAM},
    criteria::SearchCriteria,
    error::GetError,
    filter,
    settings::Settings,
};

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

pub use crate::api_interfaces::locations::{
    Address, Location as LocationRecord, OpeningHours, Place,
};

/// Locations in the order the lookup service returned them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Locations(Vec<LocationRecord>);

impl Locations {
    /// Look up locations for `criteria` with one GET request.
    ///
    /// Anything other than a 200 response is an error, as is a body without a
    /// `locations` array.
    pub async fn fetch(
        client: &Client,
        settings: &Settings,
        criteria: &SearchCriteria,
    ) -> Result<Self, GetError> {
        debug!(
            url = %settings.api_url,
            country_code = %criteria.country_code,
            city = %criteria.city,
            postal_code = %criteria.postal_code,
            "requesting locations"
        );
        let response = client
            .get(&settings.api_url)
            .header(&settings.header_name, &settings.header_value)
            .query(&[
                (COUNTRY_CODE_PARAM, criteria.country_code.as_str()),
                (CITY_PARAM, criteria.city.as_str()),
                (POSTAL_CODE_PARAM, criteria.postal_code.as_str()),
            ])
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Err(GetError::ResponseError(response.status()));
        }
        let response_body = response.text().await.map_err(GetError::ResponseBodyError)?;
        let parsed_body: locations::Response = serde_json::from_str(response_body.as_str())?;
        debug!(count = parsed_body.locations.len(), "received locations");
        Ok(Self(parsed_body.locations))
    }

    /// Keep only the locations that pass both business rules.
    pub fn filter(self) -> Self {
        Self(self.0.into_iter().filter(filter::is_match).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[LocationRecord] {
        &self.0
    }
}

impl From<Vec<LocationRecord>> for Locations {
    fn from(locations: Vec<LocationRecord>) -> Self {
        Self(locations)
    }
}

impl IntoIterator for Locations {
    type Item = LocationRecord;
    type IntoIter = std::vec::IntoIter<LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Outcome of a lookup. Exactly one of these holds after every run.
#[derive(Debug)]
pub enum FilterResult {
    /// At least one location passed the filters.
    Matches(Locations),
    /// The service answered but nothing passed the filters.
    NoMatches,
    /// The service could not be reached or gave an unusable answer.
    UpstreamError(GetError),
}

impl FilterResult {
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, FilterResult::UpstreamError(_))
    }

    pub fn matches(&self) -> Option<&Locations> {
        match self {
            FilterResult::Matches(locations) => Some(locations),
            _ => None,
        }
    }
}

impl From<Result<Locations, GetError>> for FilterResult {
    fn from(fetched: Result<Locations, GetError>) -> Self {
        match fetched.map(Locations::filter) {
            Ok(kept) if kept.is_empty() => FilterResult::NoMatches,
            Ok(kept) => FilterResult::Matches(kept),
            Err(e) => FilterResult::UpstreamError(e),
        }
    }
}

/// Fetch and filter locations. Never fails: errors become
/// [`FilterResult::UpstreamError`].
pub async fn find(client: &Client, settings: &Settings, criteria: &SearchCriteria) -> FilterResult {
    let result = FilterResult::from(Locations::fetch(client, settings, criteria).await);
    match &result {
        FilterResult::Matches(kept) => debug!(kept = kept.len(), "locations matched"),
        FilterResult::NoMatches => debug!("no locations matched"),
        FilterResult::UpstreamError(e) => warn!(error = %e, "location lookup failed"),
    }
    result
}
