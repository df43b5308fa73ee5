//! Snapshot envelope: `{"state": <fields>, "version": 0}`

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Envelope version written by this crate
pub const SNAPSHOT_VERSION: u32 = 0;

/// A store that is saved whole under a fixed namespace
pub trait Snapshot: Serialize + DeserializeOwned + Default {
    /// Storage key for this store
    const NAMESPACE: &'static str;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

/// Serialize `state` inside the envelope
pub fn encode<T: Snapshot>(state: &T) -> Result<String> {
    let envelope = EnvelopeRef {
        state,
        version: SNAPSHOT_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse an envelope produced by [`encode`]
pub fn decode<T: Snapshot>(contents: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(contents)?;
    if envelope.version != SNAPSHOT_VERSION {
        tracing::warn!(
            namespace = T::NAMESPACE,
            version = envelope.version,
            expected = SNAPSHOT_VERSION,
            "unexpected snapshot version; reading as-is"
        );
    }
    Ok(envelope.state)
}
