//! Build metadata stamped in by `build.rs`.

pub fn git_commit_hash() -> &'static str {
    match option_env!("PAYGATE_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn is_dirty() -> bool {
    option_env!("PAYGATE_WEB_GIT_DIRTY") == Some("true")
}

/// Commit hash with a `-dirty` marker for builds from a modified tree.
pub fn version_label() -> String {
    let commit = git_commit_hash();
    if is_dirty() {
        format!("{commit}-dirty")
    } else {
        commit.to_string()
    }
}

pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
