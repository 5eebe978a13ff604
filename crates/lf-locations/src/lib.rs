mod api_interfaces;
pub mod constants;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod finder;
pub mod locations;
pub mod render;
pub mod settings;
pub mod util;

pub use criteria::{Field, SearchCriteria, ValidationErrors};
pub use finder::LocationFinder;
pub use locations::{FilterResult, Locations};
pub use render::OutputFormat;
pub use settings::Settings;
