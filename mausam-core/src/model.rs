use serde::{Deserialize, Serialize};

/// Shown to the user for every unavailable outcome, whatever the cause.
pub const UNAVAILABLE_MESSAGE: &str =
    "City not found or error fetching data. Please check the spelling or try another city.";

/// Free-form city text as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }

    /// True for empty or whitespace-only input. Callers gate on this before fetching.
    pub fn is_blank(&self) -> bool {
        self.city.trim().is_empty()
    }
}

/// Current conditions, normalized from the provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Location name as resolved by the provider, which may differ from the query.
    pub city: String,
    pub country: String,
    pub temperature_celsius: f64,
    pub condition_text: String,
    pub condition_icon_url: String,
    pub humidity_percent: u8,
    pub wind_speed_kph: f64,
}

/// Internal diagnostic attached to an unavailable outcome. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Provider answered with something other than 200.
    Status(u16),
    /// No response: DNS, connect, TLS or timeout failure.
    Transport,
    /// Body was not readable or not valid JSON.
    MalformedBody,
    /// Valid JSON, but a required key was absent or had the wrong type.
    MissingField,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Status(code) => write!(f, "status {code}"),
            FailureKind::Transport => f.write_str("transport"),
            FailureKind::MalformedBody => f.write_str("malformed body"),
            FailureKind::MissingField => f.write_str("missing field"),
        }
    }
}

/// Result of a single fetch. There is no partially populated variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(WeatherRecord),
    Unavailable(FailureKind),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            Outcome::Success(record) => Some(record),
            Outcome::Unavailable(_) => None,
        }
    }

    pub fn into_record(self) -> Option<WeatherRecord> {
        match self {
            Outcome::Success(record) => Some(record),
            Outcome::Unavailable(_) => None,
        }
    }
}
