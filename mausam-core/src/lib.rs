//! Core library for the `mausam` weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client and the provider seam it sits behind
//! - The normalized weather record and fetch outcome
//! - Mood quote and ambient sound selection
//!
//! It is used by `mausam-cli`, but can also be reused by other front ends.

pub mod ambience;
pub mod config;
pub mod error;
pub mod model;
pub mod mood;
pub mod provider;

pub use ambience::{Ambience, ambient_sound};
pub use config::Config;
pub use error::FetchError;
pub use model::{FailureKind, Outcome, UNAVAILABLE_MESSAGE, WeatherQuery, WeatherRecord};
pub use mood::mood_quote;
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherClient};
