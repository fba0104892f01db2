//! Buffer configuration that callers can serialize/deserialize.
//!
//! Only buffering stages read this; streaming stages allocate nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Initial capacity reserved when a stage materializes its input.
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl BufferConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: BufferConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BufferConfig::default());
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = BufferConfig::with_capacity(1024);
        let text = serde_json::to_string(&cfg).unwrap();
        let back: BufferConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.initial_capacity, 1024);
    }
}
