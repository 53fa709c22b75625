//! Payment gate bindings for the browser. The decision logic lives in the
//! `paygate` core; this module only supplies `localStorage` as the record
//! store, `window.history` plus `popstate` as the session history, and the
//! `RequirePayment` wrapper that drives a guard session per location.
//!
//! Records are visible to and editable by the visitor. Treat everything here
//! as UX gating only.

mod guards;
pub(crate) mod history;
pub(crate) mod storage;

pub(crate) use guards::RequirePayment;
