use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::query::City;

/// Presence of an optional JSON field, decided once at the parsing boundary.
///
/// `Absent` means the key was missing from the document, `Null` means it was
/// present as JSON null. Downstream deciders consume this tag instead of
/// re-deriving presence from truthiness, so a present zero can never collapse
/// into "missing".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Maybe<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Maybe<T> {
    /// Usable value, if any. `Absent` and `Null` both collapse to `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent | Maybe::Null => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// True when no usable value is carried, absent or null.
    pub fn is_missing(&self) -> bool {
        self.value().is_none()
    }
}

// A missing key never reaches deserialization; `#[serde(default)]` on the
// field yields `Absent` for that case.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Maybe::Present(value),
            None => Maybe::Null,
        })
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Present(value) => value.serialize(serializer),
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
        }
    }
}

/// Canonical request descriptor, created fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfoQuery {
    pub date: NaiveDate,
    pub city: City,
}

impl DayInfoQuery {
    /// Transport query pairs in their fixed order: `date`, then `city`.
    /// URL escaping happens when the pairs are attached to the request.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("city", self.city.to_string()),
        ]
    }
}

/// Aggregated day-info record. Every top-level field is independently
/// optional; unknown fields in the body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayInfoResponse {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub weather: Maybe<Weather>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub astro: Maybe<Astro>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub world_events: Maybe<Vec<String>>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub fun_score: Maybe<f64>,
}

/// Historical weather for the requested day. The anomaly comment may stand
/// alone when no numeric data exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub t_min: Maybe<f64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub t_max: Maybe<f64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub precipitation: Maybe<f64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub anomaly_comment: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub moon_phase: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub events: Maybe<Vec<String>>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub sunrise: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub sunset: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub day_length: Maybe<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_fields_get_distinct_tags() {
        let parsed: Weather =
            serde_json::from_str(r#"{ "t_min": null, "t_max": 5.0 }"#).unwrap();

        assert_eq!(parsed.t_min, Maybe::Null);
        assert_eq!(parsed.t_max, Maybe::Present(5.0));
        assert_eq!(parsed.precipitation, Maybe::Absent);
        assert!(parsed.t_min.is_missing());
        assert!(!parsed.t_min.is_absent());
    }

    #[test]
    fn zero_fun_score_is_present_not_missing() {
        let parsed: DayInfoResponse = serde_json::from_str(r#"{ "fun_score": 0 }"#).unwrap();

        assert_eq!(parsed.fun_score, Maybe::Present(0.0));
        assert!(!parsed.fun_score.is_missing());
    }

    #[test]
    fn empty_weather_object_is_distinct_from_absent_weather() {
        let empty: DayInfoResponse = serde_json::from_str(r#"{ "weather": {} }"#).unwrap();
        let absent: DayInfoResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(empty.weather, Maybe::Present(Weather::default()));
        assert_eq!(absent.weather, Maybe::Absent);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{ "date": "1991-08-24", "location": "Kyiv", "fun_score": 7.8 }"#;
        let parsed: DayInfoResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.fun_score, Maybe::Present(7.8));
    }

    #[test]
    fn serialization_keeps_null_and_skips_absent() {
        let weather = Weather {
            t_min: Maybe::Null,
            t_max: Maybe::Present(29.1),
            ..Weather::default()
        };

        let value = serde_json::to_value(&weather).unwrap();
        let object = value.as_object().unwrap();

        assert!(object["t_min"].is_null());
        assert_eq!(object["t_max"], serde_json::json!(29.1));
        assert!(!object.contains_key("precipitation"));
    }

    #[test]
    fn query_pairs_keep_date_before_city() {
        let query = DayInfoQuery {
            date: NaiveDate::from_ymd_opt(1991, 8, 24).unwrap(),
            city: City::Kyiv,
        };

        let pairs = query.query_pairs();
        assert_eq!(pairs[0], ("date", "1991-08-24".to_string()));
        assert_eq!(pairs[1], ("city", "Kyiv".to_string()));
    }
}
