//! Mood captions keyed on the provider's condition text.

/// Checked in order against the lowercased condition text; the first keyword
/// contained in it wins.
pub const MOOD_QUOTES: &[(&str, &str)] = &[
    ("rain", "Perfect weather for chai and pakoras. Stay cozy!"),
    ("clear", "The sky is clear, and the day is bright. Enjoy!"),
    ("cloud", "Nice and cozy under the clouds. Perfect for contemplation."),
    ("wind", "Hold onto your hat – it's breezy out there!"),
    ("overcast", "Overcast skies, a gentle light for your day."),
    ("mist", "Mist in the air, a touch of mystery."),
    ("snow", "Winter wonderland! Stay warm and enjoy the view."),
];

pub const DEFAULT_QUOTE: &str = "A unique day ahead!";

pub fn mood_quote(condition_text: &str) -> &'static str {
    let condition = condition_text.to_lowercase();

    MOOD_QUOTES
        .iter()
        .find(|(keyword, _)| condition.contains(keyword))
        .map(|(_, quote)| *quote)
        .unwrap_or(DEFAULT_QUOTE)
}
