//! Shared frontend utilities: configuration, errors, build metadata and
//! browser logging.
//!
//! ## Purchase flow
//!
//! 1. **Pay:** the visitor completes checkout starting at the payment entry path.
//! 2. **Confirm:** the provider callback lands on the confirm route with
//!    `order_id`; the page records `verifiedPayment_<order_id>` in
//!    `localStorage` and replaces itself with the access route.
//! 3. **Access:** the access route is wrapped in `RequirePayment`, which admits
//!    the visitor only while that record exists and traps back navigation.
//!
//! The record lives in the visitor's browser. None of this is a security
//! control; anything paid for must also be protected by whatever serves it.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;

pub(crate) use errors::AppError;
