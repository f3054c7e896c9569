//! PokéAPI HTTP adapter for [`CreatureLookup`]
//!
//! Issues one `GET {base_url}/pokemon/{id}` per call. There is no retry and
//! no caching; a failed call fails the round and the user retries.

use super::record::PokemonRecord;
use async_trait::async_trait;
use quiz_application::{CreatureLookup, LookupError};
use quiz_domain::{Creature, CreatureId};
use std::time::Duration;
use tracing::{debug, trace};

/// Public PokéAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub const DEFAULT_USER_AGENT: &str = concat!("creature-quiz/", env!("CARGO_PKG_VERSION"));

/// Lookup backed by the PokéAPI REST service
pub struct PokeApiLookup {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiLookup {
    /// Build a lookup against `base_url` with a per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| LookupError::Other(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: CreatureId) -> String {
        format!("{}/pokemon/{}", self.base_url, id.get())
    }
}

fn map_send_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Connection(e.to_string())
    }
}

#[async_trait]
impl CreatureLookup for PokeApiLookup {
    async fn get(&self, id: CreatureId) -> Result<Creature, LookupError> {
        let url = self.record_url(id);
        trace!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Lookup of {} returned {}", id, status);
            return Err(LookupError::Status {
                id,
                status: status.as_u16(),
            });
        }

        let record: PokemonRecord = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Malformed {
                    id,
                    reason: e.to_string(),
                }
            }
        })?;

        record.into_creature(id)
    }
}
