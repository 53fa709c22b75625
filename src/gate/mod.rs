//! Payment verification gate.
//!
//! Flow overview: the incoming location is parsed into a [`Location`], the
//! order id is pulled from its query string, the [`VerificationRepository`]
//! classifies the persisted record, and the [`NavigationGuard`] turns that
//! into a [`Decision`]. A [`GuardSession`] owns one evaluation for the life of
//! a mount: admitted sessions arm a [`HistoryTrap`], denied sessions replace
//! the current history entry with the payment entry path.
//!
//! Nothing in here is thread safe; the host event loop serializes mounts and
//! history pops.

pub mod config;
pub mod guard;
pub mod history;
pub mod location;
pub mod session;
pub mod store;

pub use config::{ConfigError, GateConfig};
pub use guard::{Decision, Denial, GuardState, NavigationGuard};
pub use history::{History, HistoryTrap, ListenerId, MemoryHistory, PopListener};
pub use location::{Location, OrderId};
pub use session::GuardSession;
pub use store::{
    KeyValueStorage, MemoryStorage, StorageVerificationRepository, StoreError,
    VerificationRepository, VerificationStatus, VerificationWriter, storage_key,
};
