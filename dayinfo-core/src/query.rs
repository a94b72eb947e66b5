use chrono::NaiveDate;

use crate::{error::ValidationError, model::DayInfoQuery};

/// Cities the day-info service knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum City {
    #[default]
    Kyiv,
    Kharkiv,
    Odesa,
    Dnipro,
    Lviv,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Kyiv => "Kyiv",
            City::Kharkiv => "Kharkiv",
            City::Odesa => "Odesa",
            City::Dnipro => "Dnipro",
            City::Lviv => "Lviv",
        }
    }

    pub const fn all() -> &'static [City] {
        &[City::Kyiv, City::Kharkiv, City::Odesa, City::Dnipro, City::Lviv]
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for City {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "kyiv" => Ok(City::Kyiv),
            "kharkiv" => Ok(City::Kharkiv),
            "odesa" => Ok(City::Odesa),
            "dnipro" => Ok(City::Dnipro),
            "lviv" => Ok(City::Lviv),
            _ => Err(ValidationError::UnknownCity(value.trim().to_string())),
        }
    }
}

/// Validate and encode the raw form inputs into a request descriptor.
///
/// The date is mandatory and must be a calendar date in `YYYY-MM-DD` form.
/// An empty city falls back to the default; anything else must name one of
/// the supported cities. No side effects.
pub fn build(raw_date: &str, raw_city: &str) -> Result<DayInfoQuery, ValidationError> {
    let raw_date = raw_date.trim();
    if raw_date.is_empty() {
        return Err(ValidationError::EmptyDate);
    }

    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw_date.to_string()))?;

    let raw_city = raw_city.trim();
    let city = if raw_city.is_empty() {
        City::default()
    } else {
        City::try_from(raw_city)?
    };

    Ok(DayInfoQuery { date, city })
}
