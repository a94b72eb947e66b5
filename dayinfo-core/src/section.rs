//! Section deciders: pure functions from one domain's slice of the response
//! to a closed presentation state carrying the literal display strings.
//!
//! All branching over missing/partial data lives here, testable in isolation
//! from any rendering surface. The locale strings are opaque display data.

use crate::model::{Astro, Maybe, Weather};

pub const DASH: &str = "—";

/// Shown for a section whose domain object is missing entirely.
pub const MSG_NO_DATA: &str = "Поки немає даних.";

/// Shown instead of the world-events list when it is empty or absent.
pub const MSG_EVENTS_EMPTY: &str = "Поки порожньо, але ми це заповнимо.";

/// Placeholder while the novelty score is not computed yet.
pub const MSG_SCORE_PENDING: &str = "скоро з'явиться";

/// Single override line when none of the sun-timing fields arrived.
pub const MSG_SUN_UNAVAILABLE: &str = "Дані про схід і захід сонця недоступні.";

/// Precipitation wording when the field is missing. Deliberately distinct
/// from the dash and from a literal zero value.
pub const MSG_PRECIP_MISSING: &str = "даних немає";

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherSection {
    NoData,
    /// Both temperatures are missing: the comment stands alone and the
    /// numeric line is suppressed entirely, dashes included.
    AnomalyOnly { comment: Option<String> },
    Full {
        t_max: String,
        t_min: String,
        precipitation: String,
        anomaly: Option<String>,
    },
}

pub fn decide_weather(weather: &Maybe<Weather>) -> WeatherSection {
    let Some(w) = weather.value() else {
        return WeatherSection::NoData;
    };

    if w.t_min.is_missing() && w.t_max.is_missing() {
        return WeatherSection::AnomalyOnly {
            comment: w.anomaly_comment.value().cloned(),
        };
    }

    let precipitation = match w.precipitation.value() {
        Some(mm) => format!("{mm} мм за добу"),
        None => MSG_PRECIP_MISSING.to_string(),
    };

    WeatherSection::Full {
        t_max: temp_or_dash(&w.t_max),
        t_min: temp_or_dash(&w.t_min),
        precipitation,
        anomaly: w.anomaly_comment.value().cloned(),
    }
}

fn temp_or_dash(temp: &Maybe<f64>) -> String {
    match temp.value() {
        Some(t) => format!("{t} °C"),
        None => DASH.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SunTiming {
    /// All three timing fields are missing; one override message replaces
    /// the per-field lines.
    Unavailable,
    Times {
        sunrise: String,
        sunset: String,
        day_length: String,
    },
}

/// Sun timing and the moon facet are decided independently: the override
/// collapse of the timing fields never hides a present moon phase or the
/// astro events list.
#[derive(Debug, Clone, PartialEq)]
pub enum AstroSection {
    NoData,
    Facts {
        sun: SunTiming,
        moon_phase: Option<String>,
        events: Vec<String>,
    },
}

pub fn decide_astro(astro: &Maybe<Astro>) -> AstroSection {
    let Some(a) = astro.value() else {
        return AstroSection::NoData;
    };

    let sunrise = non_empty(&a.sunrise);
    let sunset = non_empty(&a.sunset);
    let day_length = non_empty(&a.day_length);

    let sun = if sunrise.is_none() && sunset.is_none() && day_length.is_none() {
        SunTiming::Unavailable
    } else {
        SunTiming::Times {
            sunrise: text_or_dash(sunrise),
            sunset: text_or_dash(sunset),
            day_length: text_or_dash(day_length),
        }
    };

    AstroSection::Facts {
        sun,
        moon_phase: non_empty(&a.moon_phase).map(str::to_owned),
        events: a.events.value().cloned().unwrap_or_default(),
    }
}

/// Empty strings count as missing, same as absent and null.
fn non_empty(field: &Maybe<String>) -> Option<&str> {
    field
        .value()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn text_or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| DASH.to_string(), str::to_owned)
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventsSection {
    /// Server order preserved, no de-duplication, no sorting.
    List(Vec<String>),
    Empty,
}

pub fn decide_events(world_events: &Maybe<Vec<String>>) -> EventsSection {
    // Absent normalizes to empty; both render the same fallback.
    match world_events.value() {
        Some(events) if !events.is_empty() => EventsSection::List(events.clone()),
        _ => EventsSection::Empty,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreSection {
    Value(String),
    ComingSoon,
}

pub fn decide_score(fun_score: &Maybe<f64>) -> ScoreSection {
    // A present zero is a value; only Absent/Null fall back to the placeholder.
    match fun_score.value() {
        Some(score) => ScoreSection::Value(format!("{score}")),
        None => ScoreSection::ComingSoon,
    }
}

impl WeatherSection {
    pub fn lines(&self) -> Vec<String> {
        match self {
            WeatherSection::NoData => vec![MSG_NO_DATA.to_string()],
            WeatherSection::AnomalyOnly { comment } => comment.iter().cloned().collect(),
            WeatherSection::Full {
                t_max,
                t_min,
                precipitation,
                anomaly,
            } => {
                let mut lines = vec![
                    format!("Максимум: {t_max}, мінімум: {t_min}"),
                    format!("Опади: {precipitation}"),
                ];
                lines.extend(anomaly.iter().cloned());
                lines
            }
        }
    }
}

impl AstroSection {
    pub fn lines(&self) -> Vec<String> {
        match self {
            AstroSection::NoData => vec![MSG_NO_DATA.to_string()],
            AstroSection::Facts {
                sun,
                moon_phase,
                events,
            } => {
                let mut lines = match sun {
                    SunTiming::Unavailable => vec![MSG_SUN_UNAVAILABLE.to_string()],
                    SunTiming::Times {
                        sunrise,
                        sunset,
                        day_length,
                    } => vec![
                        format!("Схід: {sunrise}, захід: {sunset}"),
                        format!("Тривалість дня: {day_length}"),
                    ],
                };
                if let Some(phase) = moon_phase {
                    lines.push(format!("Фаза Місяця: {phase}"));
                }
                lines.extend(events.iter().map(|event| format!("• {event}")));
                lines
            }
        }
    }
}

impl EventsSection {
    pub fn lines(&self) -> Vec<String> {
        match self {
            EventsSection::List(events) => {
                events.iter().map(|event| format!("• {event}")).collect()
            }
            EventsSection::Empty => vec![MSG_EVENTS_EMPTY.to_string()],
        }
    }
}

impl ScoreSection {
    pub fn lines(&self) -> Vec<String> {
        match self {
            ScoreSection::Value(score) => vec![score.clone()],
            ScoreSection::ComingSoon => vec![MSG_SCORE_PENDING.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(s: &str) -> Maybe<String> {
        Maybe::Present(s.to_string())
    }

    #[test]
    fn missing_weather_has_no_data() {
        assert_eq!(decide_weather(&Maybe::Absent), WeatherSection::NoData);
        assert_eq!(decide_weather(&Maybe::Null), WeatherSection::NoData);
    }

    #[test]
    fn anomaly_comment_stands_alone_when_both_temps_missing() {
        let weather = Maybe::Present(Weather {
            t_min: Maybe::Null,
            t_max: Maybe::Null,
            anomaly_comment: present("X"),
            ..Weather::default()
        });

        let section = decide_weather(&weather);
        assert_eq!(
            section,
            WeatherSection::AnomalyOnly {
                comment: Some("X".to_string())
            }
        );

        // Only the comment, no numeric line, no dash placeholders.
        let lines = section.lines();
        assert_eq!(lines, vec!["X".to_string()]);
        assert!(!lines.iter().any(|line| line.contains(DASH)));
    }

    #[test]
    fn empty_weather_object_is_anomaly_only_without_comment() {
        let section = decide_weather(&Maybe::Present(Weather::default()));

        assert_eq!(section, WeatherSection::AnomalyOnly { comment: None });
        assert!(section.lines().is_empty());
    }

    #[test]
    fn partial_temperature_renders_value_dash_and_comment() {
        let weather = Maybe::Present(Weather {
            t_max: Maybe::Present(5.0),
            anomaly_comment: present("X"),
            ..Weather::default()
        });

        match decide_weather(&weather) {
            WeatherSection::Full {
                t_max,
                t_min,
                precipitation,
                anomaly,
            } => {
                assert_eq!(t_max, "5 °C");
                assert_eq!(t_min, DASH);
                assert_eq!(precipitation, MSG_PRECIP_MISSING);
                assert_eq!(anomaly.as_deref(), Some("X"));
            }
            other => panic!("expected full weather, got {other:?}"),
        }
    }

    #[test]
    fn zero_precipitation_is_not_the_missing_phrase() {
        let weather = Maybe::Present(Weather {
            t_max: Maybe::Present(5.0),
            precipitation: Maybe::Present(0.0),
            ..Weather::default()
        });

        match decide_weather(&weather) {
            WeatherSection::Full { precipitation, .. } => {
                assert_eq!(precipitation, "0 мм за добу");
            }
            other => panic!("expected full weather, got {other:?}"),
        }
    }

    #[test]
    fn negative_temperature_keeps_its_sign() {
        let weather = Maybe::Present(Weather {
            t_min: Maybe::Present(-3.4),
            t_max: Maybe::Present(29.1),
            ..Weather::default()
        });

        match decide_weather(&weather) {
            WeatherSection::Full { t_min, t_max, .. } => {
                assert_eq!(t_min, "-3.4 °C");
                assert_eq!(t_max, "29.1 °C");
            }
            other => panic!("expected full weather, got {other:?}"),
        }
    }

    #[test]
    fn missing_astro_has_no_data() {
        assert_eq!(decide_astro(&Maybe::Absent), AstroSection::NoData);
    }

    #[test]
    fn sun_override_keeps_moon_phase() {
        let astro = Maybe::Present(Astro {
            sunrise: Maybe::Null,
            sunset: Maybe::Null,
            day_length: Maybe::Null,
            moon_phase: present("повня"),
            ..Astro::default()
        });

        match decide_astro(&astro) {
            AstroSection::Facts {
                sun, moon_phase, ..
            } => {
                assert_eq!(sun, SunTiming::Unavailable);
                assert_eq!(moon_phase.as_deref(), Some("повня"));
            }
            other => panic!("expected astro facts, got {other:?}"),
        }

        let lines = decide_astro(&astro).lines();
        assert!(lines.contains(&MSG_SUN_UNAVAILABLE.to_string()));
        assert!(lines.contains(&"Фаза Місяця: повня".to_string()));
    }

    #[test]
    fn empty_strings_count_as_missing_sun_data() {
        let astro = Maybe::Present(Astro {
            sunrise: present(""),
            sunset: Maybe::Absent,
            day_length: present("  "),
            ..Astro::default()
        });

        match decide_astro(&astro) {
            AstroSection::Facts { sun, .. } => assert_eq!(sun, SunTiming::Unavailable),
            other => panic!("expected astro facts, got {other:?}"),
        }
    }

    #[test]
    fn partial_sun_timing_gets_per_field_dashes() {
        let astro = Maybe::Present(Astro {
            sunrise: present("05:42"),
            ..Astro::default()
        });

        match decide_astro(&astro) {
            AstroSection::Facts { sun, .. } => {
                assert_eq!(
                    sun,
                    SunTiming::Times {
                        sunrise: "05:42".to_string(),
                        sunset: DASH.to_string(),
                        day_length: DASH.to_string(),
                    }
                );
            }
            other => panic!("expected astro facts, got {other:?}"),
        }
    }

    #[test]
    fn astro_events_render_only_when_non_empty() {
        let with_events = Maybe::Present(Astro {
            moon_phase: present("повня"),
            events: Maybe::Present(vec!["затемнення".to_string()]),
            ..Astro::default()
        });
        let without_events = Maybe::Present(Astro {
            moon_phase: present("повня"),
            events: Maybe::Present(vec![]),
            ..Astro::default()
        });

        assert!(
            decide_astro(&with_events)
                .lines()
                .contains(&"• затемнення".to_string())
        );
        assert!(
            !decide_astro(&without_events)
                .lines()
                .iter()
                .any(|line| line.starts_with("• "))
        );
    }

    #[test]
    fn empty_and_absent_world_events_render_identically() {
        let empty = decide_events(&Maybe::Present(vec![]));
        let absent = decide_events(&Maybe::Absent);
        let null = decide_events(&Maybe::Null);

        assert_eq!(empty, EventsSection::Empty);
        assert_eq!(empty.lines(), absent.lines());
        assert_eq!(empty.lines(), null.lines());
        assert_eq!(empty.lines(), vec![MSG_EVENTS_EMPTY.to_string()]);
    }

    #[test]
    fn world_events_keep_server_order_and_duplicates() {
        let events = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let section = decide_events(&Maybe::Present(events.clone()));

        assert_eq!(section, EventsSection::List(events));
    }

    #[test]
    fn zero_score_renders_literal_zero() {
        let section = decide_score(&Maybe::Present(0.0));

        assert_eq!(section, ScoreSection::Value("0".to_string()));
        assert_eq!(section.lines(), vec!["0".to_string()]);
    }

    #[test]
    fn missing_score_renders_placeholder() {
        assert_eq!(decide_score(&Maybe::Absent), ScoreSection::ComingSoon);
        assert_eq!(decide_score(&Maybe::Null), ScoreSection::ComingSoon);
        assert_eq!(
            decide_score(&Maybe::Absent).lines(),
            vec![MSG_SCORE_PENDING.to_string()]
        );
    }

    #[test]
    fn fractional_score_renders_literal_text() {
        assert_eq!(
            decide_score(&Maybe::Present(7.8)),
            ScoreSection::Value("7.8".to_string())
        );
    }
}
