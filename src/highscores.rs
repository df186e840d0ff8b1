//! Best score persistence
//!
//! A single integer kept in the key-value store. Older saves may hold the
//! value as a quoted string or a fractional number; everything is normalised
//! to a `u32` when loaded.

use crate::consts::HIGH_SCORE_KEY;
use crate::platform::KeyValueStore;

/// The best floored score reached on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Record a finished run. Returns true if it beat the previous best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from the store; absent or unreadable means zero
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get_item(HIGH_SCORE_KEY) else {
            log::info!("No high score found, starting fresh");
            return Self::default();
        };

        match parse_stored(&raw) {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            None => {
                log::warn!("Ignoring unreadable high score {:?}", raw);
                Self::default()
            }
        }
    }

    /// Save to the store as a plain integer
    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set_item(HIGH_SCORE_KEY, &self.best.to_string());
        log::info!("High score saved ({})", self.best);
    }
}

/// Accepts `123`, `"123"`, `123.9` and surrounding whitespace
fn parse_stored(raw: &str) -> Option<u32> {
    let value: serde_json::Value = serde_json::from_str(raw.trim()).ok()?;
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number.floor().min(u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_parse_stored_formats() {
        assert_eq!(parse_stored("123"), Some(123));
        assert_eq!(parse_stored(" 42\n"), Some(42));
        assert_eq!(parse_stored("\"77\""), Some(77));
        assert_eq!(parse_stored("123.9"), Some(123));
        assert_eq!(parse_stored("-5"), None);
        assert_eq!(parse_stored("abc"), None);
        assert_eq!(parse_stored("null"), None);
    }

    #[test]
    fn test_submit_only_raises() {
        let mut hs = HighScore::new(100);
        assert!(!hs.submit(100));
        assert!(!hs.submit(50));
        assert!(hs.submit(101));
        assert_eq!(hs.best, 101);
    }

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::default();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::default();
        HighScore::new(321).save(&mut store);
        assert_eq!(store.get_item(HIGH_SCORE_KEY).as_deref(), Some("321"));
        assert_eq!(HighScore::load(&store).best, 321);
    }
}
