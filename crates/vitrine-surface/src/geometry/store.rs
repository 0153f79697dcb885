//! Key-value storage seam for surface geometry

use std::collections::HashMap;
use std::fmt;

use super::{Geometry, GeometrySnapshot};

/// Specific kinds of storage failures for better error context
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Storage backend unavailable (e.g. localStorage disabled)
    Unavailable,
    /// Storage quota exceeded
    QuotaExceeded,
    /// Persisted value could not be decoded
    Corrupt(String),
    /// Backend-specific failure
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage backend unavailable"),
            StoreError::QuotaExceeded => write!(f, "storage quota exceeded"),
            StoreError::Corrupt(detail) => write!(f, "corrupt stored value: {}", detail),
            StoreError::Backend(detail) => write!(f, "storage backend error: {}", detail),
        }
    }
}

/// Key-value store for surface geometry
///
/// Implementations provide raw string get/set/remove; the provided
/// `load`/`save`/`clear` methods add the JSON codec and the fail-soft
/// policy: any failure is logged at `warn` and collapsed to "value absent"
/// (load) or silently dropped (save/clear). Geometry persistence is a
/// convenience, not a guarantee, so no error ever reaches the caller.
pub trait GeometryStore {
    /// Read the raw stored string for a key
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw string for a key
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the stored value for a key
    fn remove_raw(&mut self, key: &str) -> Result<(), StoreError>;

    /// Load persisted geometry; `None` if absent, corrupt, or unreadable
    fn load(&self, key: &str) -> Option<Geometry> {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("geometry load failed for '{}': {}", key, err);
                return None;
            }
        };

        match decode(&raw) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                log::warn!("geometry load failed for '{}': {}", key, err);
                None
            }
        }
    }

    /// Persist geometry, best-effort
    fn save(&mut self, key: &str, geometry: &Geometry) {
        let raw = match encode(geometry) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("geometry save failed for '{}': {}", key, err);
                return;
            }
        };

        if let Err(err) = self.set_raw(key, &raw) {
            log::warn!("geometry save failed for '{}': {}", key, err);
        }
    }

    /// Remove persisted geometry; subsequent `load` returns `None`
    fn clear(&mut self, key: &str) {
        if let Err(err) = self.remove_raw(key) {
            log::warn!("geometry clear failed for '{}': {}", key, err);
        }
    }
}

/// Encode geometry into its versioned JSON form
fn encode(geometry: &Geometry) -> Result<String, StoreError> {
    serde_json::to_string(&GeometrySnapshot::new(*geometry))
        .map_err(|err| StoreError::Backend(err.to_string()))
}

/// Decode a versioned JSON value back into geometry
fn decode(raw: &str) -> Result<Geometry, StoreError> {
    let mut snapshot: GeometrySnapshot =
        serde_json::from_str(raw).map_err(|err| StoreError::Corrupt(err.to_string()))?;

    if snapshot.version > GeometrySnapshot::CURRENT_VERSION {
        return Err(StoreError::Corrupt(format!(
            "unknown snapshot version {}",
            snapshot.version
        )));
    }
    if snapshot.needs_migration() {
        snapshot.migrate();
    }

    Ok(snapshot.geometry)
}

/// In-memory geometry store
///
/// Values go through the same JSON codec as real backends, so tests that
/// corrupt a stored value exercise the same recovery path the browser does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometryStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
