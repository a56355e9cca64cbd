//! High score
//!
//! A single best score, persisted to LocalStorage as a plain integer string.

use serde::{Deserialize, Serialize};

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "snakeGameHighScore";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Decode a stored value. Missing or corrupt data reads as 0.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<u32>(raw) {
            Ok(best) => Self { best },
            Err(e) => {
                log::warn!("Corrupt stored high score {raw:?} ({e}), resetting to 0");
                Self::default()
            }
        }
    }

    /// Value written to storage
    pub fn to_stored(&self) -> String {
        self.best.to_string()
    }

    /// Count a finished round. Returns true if it beat the previous best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, high score starts at 0");
            return Self::default();
        };
        let raw = storage.get_item(Self::STORAGE_KEY).ok().flatten();
        let score = Self::from_stored(raw.as_deref());
        log::info!("Loaded high score {}", score.best);
        score
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match storage.set_item(Self::STORAGE_KEY, &self.to_stored()) {
                Ok(()) => log::info!("High score saved ({})", self.best),
                Err(e) => log::warn!("Failed to save high score: {e:?}"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(HighScore::from_stored(Some("120")).best, 120);
        assert_eq!(HighScore::from_stored(Some(" 40 ")).best, 40);
        assert_eq!(HighScore::from_stored(None).best, 0);
        assert_eq!(HighScore::from_stored(Some("")).best, 0);
        assert_eq!(HighScore::from_stored(Some("garbage")).best, 0);
        assert_eq!(HighScore::from_stored(Some("-10")).best, 0);
        assert_eq!(HighScore::from_stored(Some("12.5")).best, 0);
    }

    #[test]
    fn test_stored_roundtrip() {
        let score = HighScore::new(370);
        assert_eq!(HighScore::from_stored(Some(&score.to_stored())), score);
    }

    #[test]
    fn test_submit_only_raises() {
        let mut high = HighScore::new(50);
        assert!(!high.submit(30));
        assert!(!high.submit(50));
        assert_eq!(high.best, 50);
        assert!(high.submit(60));
        assert_eq!(high.best, 60);
    }
}
