use std::time::Duration;

/// Canonical day tokens that count as weekend opening hours.
pub const SATURDAY: &str = "http://schema.org/Saturday";
pub const SUNDAY: &str = "http://schema.org/Sunday";

/// Query parameter names sent to the location lookup service
pub const COUNTRY_CODE_PARAM: &str = "countryCode";
pub const CITY_PARAM: &str = "addressLocality";
pub const POSTAL_CODE_PARAM: &str = "postalCode";

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variables consulted by `Settings::from_env`
pub const API_URL_ENV: &str = "LOCATION_FINDER_API_URL";
pub const HEADER_NAME_ENV: &str = "LOCATION_FINDER_HEADER_NAME";
pub const HEADER_VALUE_ENV: &str = "LOCATION_FINDER_HEADER_VALUE";

// Read by the binaries through clap
pub const SETTINGS_PATH_ENV: &str = "LOCATION_FINDER_SETTINGS";
pub const TIMEOUT_SECS_ENV: &str = "LOCATION_FINDER_TIMEOUT_SECS";

/// Settings file written by `lf-settings` when no path is given
pub const DEFAULT_SETTINGS_PATH: &str = "location_finder.settings.yaml";

pub const NO_MATCHES_MESSAGE: &str = "No locations found that meet the criteria.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";
