//! Verification records.
//!
//! A record is a flat key/value entry `"<prefix><order_id>" -> "true"` in
//! durable client storage. Only the payment-confirmation flow writes records
//! (through [`VerificationWriter`]); the guard only reads them. Reads never
//! fail: an unreadable backend is the same as a missing record.

use crate::gate::config::GateConfig;
use crate::gate::location::OrderId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

const VERIFIED_VALUE: &str = "true";
const REJECTED_VALUE: &str = "false";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid order id: {0:?}")]
    InvalidOrderId(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Raw string storage, shaped after the browser `Storage` interface.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error if the backend refuses the write (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage. Clones share the same entries, like handles to one
/// `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_item(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Classification of a stored record. Only [`VerificationStatus::Verified`]
/// admits; the other variants exist so logs can tell an explicit `"false"`
/// apart from a missing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    Rejected,
    Malformed,
    Absent,
}

impl VerificationStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Self::Absent,
            Some(VERIFIED_VALUE) => Self::Verified,
            Some(REJECTED_VALUE) => Self::Rejected,
            Some(_) => Self::Malformed,
        }
    }

    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Malformed => "malformed",
            Self::Absent => "absent",
        }
    }
}

/// Read side of the store, injected into the guard.
pub trait VerificationRepository {
    fn status(&self, order_id: &OrderId) -> VerificationStatus;

    fn is_verified(&self, order_id: &OrderId) -> bool {
        self.status(order_id).is_verified()
    }
}

/// Write side, owned by the payment-confirmation flow.
pub trait VerificationWriter {
    /// Durably marks `order_id` as paid.
    ///
    /// # Errors
    /// Returns an error if the backend refuses the write.
    fn record_verified(&self, order_id: &OrderId) -> Result<(), StoreError>;
}

pub fn storage_key(prefix: &str, order_id: &OrderId) -> String {
    format!("{prefix}{order_id}")
}

/// Verification records on top of any [`KeyValueStorage`].
#[derive(Clone, Debug)]
pub struct StorageVerificationRepository<S> {
    storage: S,
    prefix: String,
}

impl<S: KeyValueStorage> StorageVerificationRepository<S> {
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    pub fn with_config(storage: S, config: &GateConfig) -> Self {
        Self::new(storage, config.storage_prefix.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Validates a raw order id from the payment callback and records it.
    ///
    /// # Errors
    /// Returns an error if `raw` is not a usable order id or the write fails.
    pub fn confirm_payment(&self, raw: &str) -> Result<OrderId, StoreError> {
        let order_id =
            OrderId::parse(raw).ok_or_else(|| StoreError::InvalidOrderId(raw.to_string()))?;
        self.record_verified(&order_id)?;
        Ok(order_id)
    }
}

impl<S: KeyValueStorage> VerificationRepository for StorageVerificationRepository<S> {
    fn status(&self, order_id: &OrderId) -> VerificationStatus {
        let key = storage_key(&self.prefix, order_id);
        let status = VerificationStatus::from_raw(self.storage.get_item(&key).as_deref());
        if status == VerificationStatus::Malformed {
            warn!(%order_id, "malformed verification record");
        } else {
            debug!(%order_id, status = status.as_str(), "verification lookup");
        }
        status
    }
}

impl<S: KeyValueStorage> VerificationWriter for StorageVerificationRepository<S> {
    fn record_verified(&self, order_id: &OrderId) -> Result<(), StoreError> {
        let key = storage_key(&self.prefix, order_id);
        self.storage.set_item(&key, VERIFIED_VALUE)?;
        info!(%order_id, "payment verification recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(raw: &str) -> OrderId {
        OrderId::parse(raw).expect("valid order id")
    }

    #[test]
    fn storage_key_uses_prefix() {
        assert_eq!(
            storage_key("verifiedPayment_", &order("ORD123")),
            "verifiedPayment_ORD123"
        );
    }

    #[test]
    fn status_classifies_raw_values() {
        assert_eq!(VerificationStatus::from_raw(None), VerificationStatus::Absent);
        assert_eq!(
            VerificationStatus::from_raw(Some("true")),
            VerificationStatus::Verified
        );
        assert_eq!(
            VerificationStatus::from_raw(Some(" true\n")),
            VerificationStatus::Verified
        );
        assert_eq!(
            VerificationStatus::from_raw(Some("false")),
            VerificationStatus::Rejected
        );
        assert_eq!(
            VerificationStatus::from_raw(Some("TRUE")),
            VerificationStatus::Malformed
        );
        assert_eq!(
            VerificationStatus::from_raw(Some("")),
            VerificationStatus::Malformed
        );
    }

    #[test]
    fn only_verified_records_admit() {
        let storage = MemoryStorage::new();
        storage.set_item("verifiedPayment_A", "true").ok();
        storage.set_item("verifiedPayment_B", "false").ok();
        storage.set_item("verifiedPayment_C", "yes").ok();
        let repository = StorageVerificationRepository::new(storage, "verifiedPayment_");

        assert!(repository.is_verified(&order("A")));
        assert!(!repository.is_verified(&order("B")));
        assert!(!repository.is_verified(&order("C")));
        assert!(!repository.is_verified(&order("D")));
        assert_eq!(repository.status(&order("D")), VerificationStatus::Absent);
    }

    #[test]
    fn prefix_namespaces_records() {
        let storage = MemoryStorage::new();
        storage.set_item("ORD1", "true").ok();
        let repository = StorageVerificationRepository::new(storage, "verifiedPayment_");
        assert!(!repository.is_verified(&order("ORD1")));
    }

    #[test]
    fn confirm_payment_writes_single_record() {
        let storage = MemoryStorage::new();
        let repository =
            StorageVerificationRepository::with_config(storage.clone(), &GateConfig::default());

        let order_id = repository.confirm_payment("  ORD123 ");
        assert_eq!(order_id, Ok(order("ORD123")));
        assert_eq!(storage.len(), 1);
        assert_eq!(
            storage.get_item("verifiedPayment_ORD123"),
            Some("true".to_string())
        );
        assert!(repository.is_verified(&order("ORD123")));
    }

    #[test]
    fn confirm_payment_rejects_blank_ids() {
        let storage = MemoryStorage::new();
        let repository = StorageVerificationRepository::new(storage.clone(), "verifiedPayment_");
        assert_eq!(
            repository.confirm_payment("   "),
            Err(StoreError::InvalidOrderId("   ".to_string()))
        );
        assert!(storage.is_empty());
    }

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn write_failures_surface_to_the_payment_flow() {
        let repository = StorageVerificationRepository::new(ReadOnlyStorage, "verifiedPayment_");
        assert_eq!(
            repository.record_verified(&order("ORD1")),
            Err(StoreError::Storage("quota exceeded".to_string()))
        );
        assert!(!repository.is_verified(&order("ORD1")));
    }
}
