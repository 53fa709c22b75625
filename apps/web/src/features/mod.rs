//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while the gating logic stays in one place.

pub(crate) mod payment;
