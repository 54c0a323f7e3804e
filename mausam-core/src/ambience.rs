//! Ambient sound selection. Playback itself belongs to the front end.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ambience {
    Rainy,
    Sunny,
    Breezy,
    Cloudy,
}

impl Ambience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ambience::Rainy => "rainy",
            Ambience::Sunny => "sunny",
            Ambience::Breezy => "breezy",
            Ambience::Cloudy => "cloudy",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Ambience::Rainy => "rainy.mp3",
            Ambience::Sunny => "sunny.mp3",
            Ambience::Breezy => "breezy.mp3",
            Ambience::Cloudy => "cloudy.mp3",
        }
    }

    /// Path of the sound file under `assets_dir`, or `None` when it is missing.
    pub fn locate(&self, assets_dir: &Path) -> Option<PathBuf> {
        let path = assets_dir.join(self.file_name());
        path.is_file().then_some(path)
    }
}

impl std::fmt::Display for Ambience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered rows; a row matches when any of its keywords occurs in the
/// lowercased condition text.
pub const AMBIENT_SOUNDS: &[(&[&str], Ambience)] = &[
    (&["rain"], Ambience::Rainy),
    (&["clear"], Ambience::Sunny),
    (&["wind"], Ambience::Breezy),
    (&["cloud", "overcast"], Ambience::Cloudy),
];

pub fn ambient_sound(condition_text: &str) -> Option<Ambience> {
    let condition = condition_text.to_lowercase();

    AMBIENT_SOUNDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
        .map(|(_, ambience)| *ambience)
}
