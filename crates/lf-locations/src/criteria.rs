use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

const CITY_PATTERN: &str = r"^[A-Za-z ]+$";
static CITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CITY_PATTERN).expect("Invalid regex pattern"));

const COUNTRY_CODE_LENGTH: usize = 2;
const POSTAL_CODE_LENGTH: std::ops::RangeInclusive<usize> = 5..=9;

/// What the user is searching for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub country_code: String,
    pub city: String,
    pub postal_code: String,
}

/// Input fields that can fail validation, in the order they are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CountryCode,
    City,
    PostalCode,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::CountryCode => "country_code",
            Field::City => "city",
            Field::PostalCode => "postal_code",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Field::CountryCode => "Please enter a valid country code!",
            Field::City => "Please enter a valid city name!",
            Field::PostalCode => "Please enter a valid postal code!",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation failures. Empty means the input is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    fn add(&mut self, field: Field) {
        self.0.insert(field, field.message().to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl SearchCriteria {
    pub fn new(country_code: &str, city: &str, postal_code: &str) -> Self {
        Self {
            country_code: country_code.to_owned(),
            city: city.to_owned(),
            postal_code: postal_code.to_owned(),
        }
    }

    /// Check every field and report all failures at once.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.country_code.chars().count() != COUNTRY_CODE_LENGTH {
            errors.add(Field::CountryCode);
        }
        if !POSTAL_CODE_LENGTH.contains(&self.postal_code.chars().count()) {
            errors.add(Field::PostalCode);
        }
        if !CITY_REGEX.is_match(&self.city) {
            errors.add(Field::City);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_has_no_errors() {
        // Arrange
        let criteria = SearchCriteria::new("DE", "Bonn", "53313");

        // Act
        let errors = criteria.validate();

        // Assert
        assert!(errors.is_empty(), "unexpected errors: {errors}");
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn long_country_code_fails_only_country_code() {
        let errors = SearchCriteria::new("GER", "Bonn", "53313").validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::CountryCode),
            Some("Please enter a valid country code!")
        );
    }

    #[test]
    fn country_code_checks_length_only() {
        assert!(SearchCriteria::new("12", "Bonn", "53313")
            .validate()
            .is_empty());
        assert!(SearchCriteria::new("d!", "Bonn", "53313")
            .validate()
            .is_empty());
        assert!(SearchCriteria::new("D", "Bonn", "53313")
            .validate()
            .contains(Field::CountryCode));
        assert!(SearchCriteria::new("", "Bonn", "53313")
            .validate()
            .contains(Field::CountryCode));
    }

    #[test]
    fn postal_code_length_bounds() {
        for (postal_code, valid) in [
            ("533", false),
            ("5331", false),
            ("53313", true),
            ("533131234", true),
            ("5331312345", false),
            ("", false),
        ] {
            let errors = SearchCriteria::new("DE", "Bonn", postal_code).validate();
            assert_eq!(
                !errors.contains(Field::PostalCode),
                valid,
                "postal code {postal_code:?}"
            );
        }
    }

    #[test]
    fn city_accepts_letters_and_spaces_only() {
        for (city, valid) in [
            ("Bonn", true),
            ("New York", true),
            (" ", true),
            ("Bonn123", false),
            ("Saint-Denis", false),
            ("", false),
            ("Köln", false),
            ("Bonn\t", false),
        ] {
            let errors = SearchCriteria::new("DE", city, "53313").validate();
            assert_eq!(!errors.contains(Field::City), valid, "city {city:?}");
        }
    }

    #[test]
    fn reports_every_invalid_field() {
        // Arrange
        let criteria = SearchCriteria::new("GER", "Bonn123", "533");

        // Act
        let errors = criteria.validate();

        // Assert
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![Field::CountryCode, Field::City, Field::PostalCode]
        );
        assert_eq!(
            errors.to_string(),
            "country_code: Please enter a valid country code!\n\
             city: Please enter a valid city name!\n\
             postal_code: Please enter a valid postal code!"
        );
    }

    #[test]
    fn validation_does_not_touch_input() {
        let criteria = SearchCriteria::new("GER", "Bonn", "53313");
        let before = criteria.clone();

        let _ = criteria.validate();

        assert_eq!(criteria, before);
    }
}
