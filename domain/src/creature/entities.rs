//! Creature entities

use crate::core::error::DomainError;
use crate::core::string::capitalize_first;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a creature in the lookup service (Value Object)
///
/// Always positive; the lookup service numbers creatures from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CreatureId(u32);

impl CreatureId {
    pub fn new(id: u32) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidCreatureId(id));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CreatureId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreatureId> for u32 {
    fn from(id: CreatureId) -> Self {
        id.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A creature record resolved from the lookup service (Entity)
///
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    id: CreatureId,
    name: String,
    image_url: String,
}

impl Creature {
    pub fn new(id: CreatureId, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Build a creature from the raw lookup slug, capitalizing it for display
    pub fn from_slug(id: CreatureId, slug: &str, image_url: impl Into<String>) -> Self {
        Self::new(id, capitalize_first(slug), image_url)
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Display name the player has to guess
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id_rejects_zero() {
        assert_eq!(
            CreatureId::new(0),
            Err(DomainError::InvalidCreatureId(0))
        );
        assert_eq!(CreatureId::new(25).unwrap().get(), 25);
    }

    #[test]
    fn test_creature_id_display() {
        assert_eq!(CreatureId::new(151).unwrap().to_string(), "#151");
    }

    #[test]
    fn test_creature_id_deserialize_validates() {
        let ok: CreatureId = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<CreatureId>("0").is_err());
    }

    #[test]
    fn test_from_slug_capitalizes() {
        let id = CreatureId::new(25).unwrap();
        let creature = Creature::from_slug(id, "pikachu", "https://img/25.png");
        assert_eq!(creature.name(), "Pikachu");
        assert_eq!(creature.image_url(), "https://img/25.png");
        assert_eq!(creature.id(), id);
    }
}
