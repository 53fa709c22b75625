//! # Paygate (Payment Verification Access Gate)
//!
//! `paygate` decides whether a visitor may view a post-purchase page. The
//! payment-confirmation flow writes a verification record keyed by order id;
//! guarded routes read it back on every navigation and either admit the
//! visitor or silently redirect to the payment entry point.
//!
//! ## Pieces
//!
//! - [`gate::store`]: the persisted `verifiedPayment_<order_id>` records and
//!   the write path used by the payment callback.
//! - [`gate::guard`]: the `Evaluating -> {Admitted, Denied}` decision machine.
//! - [`gate::history`]: the back/forward trap installed while a guarded route
//!   is mounted.
//! - [`gate::session`]: per-mount acquisition tying the three together.
//!
//! The core is platform independent and single threaded. The browser bindings
//! live in `apps/web`; the native binary only serves the compiled bundle.
//!
//! ## Limitations
//!
//! The gate runs on the client. It is a UX deterrent, not a security
//! boundary: it does not stop direct URL entry, storage tampering or a
//! disabled listener. Anything that must stay private after purchase has to be
//! enforced by the backend that serves it.

pub mod gate;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
