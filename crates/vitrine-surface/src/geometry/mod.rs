//! Persisted surface geometry and the storage seam
//!
//! Geometry persistence is advisory UI state: every failure mode collapses
//! to "use the fallback", never to an error the caller has to handle.

mod snapshot;
mod store;

pub use snapshot::{Geometry, GeometrySnapshot};
pub use store::{GeometryStore, MemoryStore, StoreError};
