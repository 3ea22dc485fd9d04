// 📝 Form Reader - Raw text fields into a Person
// No validation: anything unparseable becomes NaN and flows into the comparisons

use crate::being::Person;
use serde::{Deserialize, Serialize};

/// The five form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub feet: String,
    #[serde(default)]
    pub inches: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub diet: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        feet: impl Into<String>,
        inches: impl Into<String>,
        weight: impl Into<String>,
        diet: impl Into<String>,
    ) -> Self {
        FormInput {
            name: name.into(),
            feet: feet.into(),
            inches: inches.into(),
            weight: weight.into(),
            diet: diet.into(),
        }
    }

    /// Height in inches from the two height fields
    pub fn height_inches(&self) -> f64 {
        total_height(parse_int_lenient(&self.feet), parse_int_lenient(&self.inches))
    }

    pub fn to_person(&self) -> Person {
        Person::new(
            self.name.clone(),
            parse_number(&self.weight),
            self.height_inches(),
            self.diet.clone(),
        )
    }
}

/// feet * 12 + inches
pub fn total_height(feet: f64, inches: f64) -> f64 {
    feet * 12.0 + inches
}

/// Leading integer of the text: optional whitespace and sign, then digits.
/// Stops at the first non-digit ("5ft" -> 5). No digits -> NaN.
pub fn parse_int_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return f64::NAN;
    }

    match digits.parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Whole-field number parse. Blank or malformed -> NaN.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
