use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Only the fields the filters read are named. Everything else the service sends
// is kept in `extra` so rendered output shows records as they came in. The two
// leaves the filters inspect stay as raw values so one odd record can't fail
// the whole response.

/// Raw response from API.
#[derive(Deserialize)]
pub struct Response {
    pub locations: Vec<Location>,
}

/// Raw location data from API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<Vec<OpeningHours>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw opening hours entry from API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw place data from API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw address data from API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// The street address as text. Numbers are written out, other shapes are
    /// treated as absent.
    pub fn street_address(&self) -> Option<Cow<'_, str>> {
        let address = self
            .place
            .as_ref()
            .and_then(|place| place.address.as_ref())
            .and_then(|address| address.street_address.as_ref())?;
        match address {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Every day token listed, whether `dayOfWeek` is a single string or a list.
    pub fn days_open(&self) -> impl Iterator<Item = &str> {
        self.opening_hours
            .iter()
            .flatten()
            .filter_map(|hours| hours.day_of_week.as_ref())
            .flat_map(|day| match day {
                Value::Array(days) => days.as_slice(),
                other => std::slice::from_ref(other),
            })
            .filter_map(Value::as_str)
    }
}
