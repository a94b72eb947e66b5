//! Core library for the `dayinfo` CLI.
//!
//! This crate defines:
//! - Query validation & encoding for the day-info lookup
//! - The HTTP client and its success/failure classification
//! - The request lifecycle state machine gating resubmission
//! - Per-section deciders that degrade gracefully over partial data
//!
//! It is used by `dayinfo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod section;

pub use client::{DayInfoClient, DayInfoSource};
pub use config::Config;
pub use error::{ErrorKind, SubmitError, ValidationError};
pub use lifecycle::{RequestLifecycleController, RequestOutcome};
pub use model::{Astro, DayInfoQuery, DayInfoResponse, Maybe, Weather};
pub use query::City;
pub use section::{
    AstroSection, EventsSection, ScoreSection, SunTiming, WeatherSection, decide_astro,
    decide_events, decide_score, decide_weather,
};
