//! Persistence boundary for the stores.
//!
//! Stores stay pure state machines; after each transition they hand their
//! full serialized state to a [`KeyValueStore`] under a fixed namespace.
//! Loads tolerate missing, malformed or wrong-version payloads by falling
//! back to the default state.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use mockall::automock;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

/// Storage namespace for the cart store.
pub const CART_NAMESPACE: &str = "marketplace-cart";

/// Storage namespace for the reviews store.
pub const REVIEWS_NAMESPACE: &str = "marketplace-reviews";

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a namespace failed.
    #[error("failed to read `{namespace}`")]
    Read {
        /// The namespace that could not be read.
        namespace: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a namespace failed.
    #[error("failed to write `{namespace}`")]
    Write {
        /// The namespace that could not be written.
        namespace: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Namespaced durable key-value persistence.
#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Loads the payload stored under `namespace`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the payload stored under `namespace`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn save(&self, namespace: &str, payload: &str) -> Result<(), StorageError>;
}

/// Versioned envelope wrapped around every persisted state object.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Persisted<T> {
    pub state: T,
    pub version: u32,
}

pub(crate) const PERSIST_VERSION: u32 = 1;

/// Restores a store's state from its namespace.
///
/// Any failure degrades to the default state: a fresh device, a corrupt
/// payload or an unreadable backend must never prevent a store from
/// initializing.
pub(crate) fn restore_or_default<T>(storage: &dyn KeyValueStore, namespace: &str) -> T
where
    T: Default + DeserializeOwned,
{
    let payload = match storage.load(namespace) {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(error) => {
            warn!(namespace, %error, "failed to load persisted state, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str::<Persisted<T>>(&payload) {
        Ok(persisted) if persisted.version == PERSIST_VERSION => persisted.state,
        Ok(persisted) => {
            warn!(
                namespace,
                version = persisted.version,
                "discarding persisted state with unsupported version"
            );
            T::default()
        }
        Err(error) => {
            warn!(namespace, %error, "discarding malformed persisted state");
            T::default()
        }
    }
}

/// Persists a store's state under its namespace, best effort.
///
/// Failures are logged, never propagated: persistence is a side effect of a
/// state transition that has already happened.
pub(crate) fn persist_best_effort<T>(storage: &dyn KeyValueStore, namespace: &str, state: &T)
where
    T: Serialize,
{
    let envelope = Persisted {
        state,
        version: PERSIST_VERSION,
    };

    let payload = match serde_json::to_string(&envelope) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(namespace, %error, "failed to serialize state");
            return;
        }
    };

    if let Err(error) = storage.save(namespace, &payload) {
        warn!(namespace, %error, "failed to persist state");
    }
}
