//! Terminal rendering of a fetch outcome.

use std::{fmt::Write as _, path::Path};

use mausam_core::{Outcome, UNAVAILABLE_MESSAGE, WeatherRecord, ambient_sound, mood_quote};

/// Render the weather card, or the generic error when the outcome is unavailable.
pub fn render(outcome: &Outcome, assets_dir: &Path) -> String {
    match outcome {
        Outcome::Success(record) => render_card(record, assets_dir),
        Outcome::Unavailable(_) => format!("{UNAVAILABLE_MESSAGE}\n"),
    }
}

/// Render the record as pretty JSON.
pub fn render_json(outcome: &Outcome) -> anyhow::Result<String> {
    match outcome {
        Outcome::Success(record) => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
        Outcome::Unavailable(_) => Ok(format!("{UNAVAILABLE_MESSAGE}\n")),
    }
}

fn render_card(record: &WeatherRecord, assets_dir: &Path) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📍 Weather in {}, {}", record.city, record.country);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}°C", record.temperature_celsius);
    let _ = writeln!(out);
    let _ = writeln!(out, "  🌤️  Condition: {}", record.condition_text);
    let _ = writeln!(out, "  💧 Humidity:  {}%", record.humidity_percent);
    let _ = writeln!(out, "  🌬️  Wind:      {} kph", record.wind_speed_kph);
    let _ = writeln!(out, "  🖼️  Icon:      {}", icon_url(&record.condition_icon_url));
    let _ = writeln!(out);
    let _ = writeln!(out, "  \"{}\"", mood_quote(&record.condition_text));

    // Missing sound files are skipped without a message.
    if let Some(path) = ambient_sound(&record.condition_text).and_then(|a| a.locate(assets_dir)) {
        let _ = writeln!(out, "  🎵 Ambience:  {}", path.display());
    }

    out
}

/// WeatherAPI returns protocol-relative icon URLs ("//cdn...").
fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") { format!("https:{icon}") } else { icon.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mausam_core::{FailureKind, mood::DEFAULT_QUOTE};
    use std::fs;

    fn record(condition: &str) -> WeatherRecord {
        WeatherRecord {
            city: "Paris".into(),
            country: "France".into(),
            temperature_celsius: 18.5,
            condition_text: condition.into(),
            condition_icon_url: "//x/sunny.png".into(),
            humidity_percent: 40,
            wind_speed_kph: 12.3,
        }
    }

    fn assets_with(files: &[&str], tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("mausam-view-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        for f in files {
            fs::write(dir.join(f), b"ID3").expect("write asset");
        }
        dir
    }

    #[test]
    fn card_shows_all_fields() {
        let out = render(&Outcome::Success(record("Sunny")), Path::new("/nonexistent"));

        assert!(out.contains("Weather in Paris, France"));
        assert!(out.contains("18.5°C"));
        assert!(out.contains("Condition: Sunny"));
        assert!(out.contains("40%"));
        assert!(out.contains("12.3 kph"));
        assert!(out.contains("https://x/sunny.png"));
        assert!(out.contains(DEFAULT_QUOTE));
        assert!(!out.contains("Ambience"));
    }

    #[test]
    fn card_lists_existing_ambient_asset() {
        let dir = assets_with(&["rainy.mp3"], "rain");

        let out = render(&Outcome::Success(record("Light rain and wind")), &dir);

        assert!(out.contains("Perfect weather for chai and pakoras."));
        assert!(out.contains(&dir.join("rainy.mp3").display().to_string()));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_asset_is_silently_skipped() {
        let dir = assets_with(&["rainy.mp3"], "cloud");

        let out = render(&Outcome::Success(record("Overcast")), &dir);

        assert!(out.contains("Overcast skies"));
        assert!(!out.contains("Ambience"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unavailable_renders_only_the_generic_message() {
        let dir = assets_with(&["rainy.mp3", "sunny.mp3", "breezy.mp3", "cloudy.mp3"], "err");

        let out = render(&Outcome::Unavailable(FailureKind::Status(400)), &dir);

        assert_eq!(out, format!("{UNAVAILABLE_MESSAGE}\n"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn json_output_uses_record_field_names() {
        let out = render_json(&Outcome::Success(record("Sunny"))).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(value["city"], "Paris");
        assert_eq!(value["temperature_celsius"], 18.5);
        assert_eq!(value["humidity_percent"], 40);

        let out = render_json(&Outcome::Unavailable(FailureKind::Transport)).expect("message");
        assert!(out.starts_with(UNAVAILABLE_MESSAGE));
    }

    #[test]
    fn icon_urls_get_a_scheme() {
        assert_eq!(icon_url("//cdn.weatherapi.com/a.png"), "https://cdn.weatherapi.com/a.png");
        assert_eq!(icon_url("https://x/a.png"), "https://x/a.png");
    }
}
