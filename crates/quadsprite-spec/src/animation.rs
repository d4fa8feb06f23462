//! Named collections of framesets.

use serde::{Deserialize, Serialize};

use crate::frameset::Frameset;

/// An ordered set of framesets belonging to one sprite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    /// Framesets in declaration order. The first one is the default clip.
    #[serde(default)]
    pub framesets: Vec<Frameset>,
}

impl SpriteAnimation {
    /// Creates an animation set from framesets.
    pub fn new(framesets: Vec<Frameset>) -> Self {
        Self { framesets }
    }

    /// Parses an animation set from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Looks a frameset up by name, ignoring ASCII case. An empty name never
    /// matches; when several framesets share a name the first one wins.
    pub fn frameset(&self, name: &str) -> Option<&Frameset> {
        if name.is_empty() {
            return None;
        }
        self.framesets
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// The default frameset (the first declared one).
    pub fn first(&self) -> Option<&Frameset> {
        self.framesets.first()
    }

    /// Number of framesets.
    pub fn len(&self) -> usize {
        self.framesets.len()
    }

    /// Returns true if there are no framesets.
    pub fn is_empty(&self) -> bool {
        self.framesets.is_empty()
    }
}
