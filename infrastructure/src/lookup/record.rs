//! Wire format of a PokéAPI `/pokemon/{id}` response
//!
//! Only the fields the quiz needs are modelled; everything else in the
//! (very large) body is ignored by serde.

use quiz_application::LookupError;
use quiz_domain::{Creature, CreatureId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonRecord {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
    #[serde(default)]
    other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

impl PokemonRecord {
    /// Official artwork if present, the small default sprite otherwise
    fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Convert into a domain [`Creature`], checking it answers the id asked for
    pub(crate) fn into_creature(self, requested: CreatureId) -> Result<Creature, LookupError> {
        let malformed = |reason: &str| LookupError::Malformed {
            id: requested,
            reason: reason.to_string(),
        };

        if self.id != requested.get() {
            return Err(malformed(&format!("record has id {}", self.id)));
        }
        if self.name.trim().is_empty() {
            return Err(malformed("empty name"));
        }
        let image_url = self
            .artwork_url()
            .ok_or_else(|| malformed("no artwork"))?
            .to_string();

        Ok(Creature::from_slug(requested, self.name.trim(), image_url))
    }
}
