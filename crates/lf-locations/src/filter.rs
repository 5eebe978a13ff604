//! Business rules deciding which locations are worth showing.
//!
//! A location is kept only when it opens on a weekend *and* its street
//! address carries an even number.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    constants::{SATURDAY, SUNDAY},
    locations::LocationRecord,
};

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("Invalid regex pattern"));

/// True when any opening hours entry falls on Saturday or Sunday.
pub fn works_on_weekends(location: &LocationRecord) -> bool {
    location
        .days_open()
        .any(|day| day == SATURDAY || day == SUNDAY)
}

/// True when the first run of digits in `street_address` is an even number.
///
/// The first run wins even if it is not the building number
/// ("2nd Avenue 13" counts as 2).
pub fn has_even_number(street_address: &str) -> bool {
    DIGIT_RUN_REGEX
        .find(street_address)
        .and_then(|run| run.as_str().bytes().last())
        .is_some_and(|last_digit| (last_digit - b'0') % 2 == 0)
}

pub fn has_even_street_number(location: &LocationRecord) -> bool {
    location
        .street_address()
        .is_some_and(|address| has_even_number(&address))
}

pub fn is_match(location: &LocationRecord) -> bool {
    works_on_weekends(location) && has_even_street_number(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location(value: serde_json::Value) -> LocationRecord {
        serde_json::from_value(value).unwrap()
    }

    fn open_on(days: &[&str], street_address: &str) -> LocationRecord {
        let hours: Vec<_> = days
            .iter()
            .map(|day| json!({ "dayOfWeek": day, "opens": "08:00", "closes": "18:00" }))
            .collect();
        location(json!({
            "openingHours": hours,
            "place": { "address": { "streetAddress": street_address } }
        }))
    }

    #[test]
    fn weekend_days_are_recognised() {
        assert!(works_on_weekends(&open_on(&[SATURDAY], "1")));
        assert!(works_on_weekends(&open_on(&[SUNDAY], "1")));
        assert!(works_on_weekends(&open_on(
            &["http://schema.org/Monday", SUNDAY],
            "1"
        )));
    }

    #[test]
    fn weekdays_only_is_not_weekend() {
        let location = open_on(
            &["http://schema.org/Monday", "http://schema.org/Friday"],
            "12",
        );
        assert!(!works_on_weekends(&location));
    }

    #[test]
    fn weekend_match_is_exact() {
        assert!(!works_on_weekends(&open_on(&["Saturday"], "12")));
        assert!(!works_on_weekends(&open_on(&["https://schema.org/Sunday"], "12")));
        assert!(!works_on_weekends(&open_on(&["http://schema.org/saturday"], "12")));
    }

    #[test]
    fn missing_or_empty_opening_hours_is_not_weekend() {
        let absent = location(json!({ "place": { "address": { "streetAddress": "12" } } }));
        let empty = location(json!({ "openingHours": [] }));
        let null = location(json!({ "openingHours": null }));
        let no_day = location(json!({ "openingHours": [{ "opens": "08:00" }] }));

        assert!(!works_on_weekends(&absent));
        assert!(!works_on_weekends(&empty));
        assert!(!works_on_weekends(&null));
        assert!(!works_on_weekends(&no_day));
    }

    #[test]
    fn even_number_uses_first_digit_run() {
        assert!(has_even_number("12 Main St"));
        assert!(!has_even_number("13 Main St"));
        assert!(has_even_number("Main St 4"));
        assert!(has_even_number("Apt 2, 13 Main St"));
        assert!(!has_even_number("Apt 3, 12 Main St"));
        assert!(has_even_number("Charles-de-Gaulle-Str. 20"));
        assert!(has_even_number("0"));
    }

    #[test]
    fn no_digits_is_not_even() {
        assert!(!has_even_number("Main Street"));
        assert!(!has_even_number(""));
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        assert!(has_even_number("123456789012345678901234567890 Long Road"));
        assert!(!has_even_number("123456789012345678901234567891 Long Road"));
    }

    #[test]
    fn missing_address_is_not_even() {
        assert!(!has_even_street_number(&location(json!({}))));
        assert!(!has_even_street_number(&location(json!({ "place": {} }))));
        assert!(!has_even_street_number(&location(
            json!({ "place": { "address": {} } })
        )));
    }

    #[test]
    fn day_of_week_list_is_searched() {
        let listed = location(json!({
            "openingHours": [{ "dayOfWeek": ["http://schema.org/Friday", SATURDAY] }]
        }));
        let weekdays = location(json!({
            "openingHours": [{ "dayOfWeek": ["http://schema.org/Friday"] }]
        }));

        assert!(works_on_weekends(&listed));
        assert!(!works_on_weekends(&weekdays));
    }

    #[test]
    fn non_text_day_of_week_is_not_weekend() {
        let odd = location(json!({
            "openingHours": [{ "dayOfWeek": 6 }, { "dayOfWeek": { "name": "Saturday" } }]
        }));

        assert!(!works_on_weekends(&odd));
    }

    #[test]
    fn numeric_street_address_is_read_as_text() {
        let even = location(json!({ "place": { "address": { "streetAddress": 14 } } }));
        let odd = location(json!({ "place": { "address": { "streetAddress": 15 } } }));
        let list = location(json!({ "place": { "address": { "streetAddress": ["12 Main St"] } } }));

        assert!(has_even_street_number(&even));
        assert!(!has_even_street_number(&odd));
        assert!(!has_even_street_number(&list));
    }

    #[test]
    fn match_requires_both_rules() {
        assert!(is_match(&open_on(&[SATURDAY], "12 Main St")));
        assert!(!is_match(&open_on(&[SATURDAY], "13 Main St")));
        assert!(!is_match(&open_on(&["http://schema.org/Monday"], "12 Main St")));
    }
}
