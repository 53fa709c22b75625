use crate::server;
use anyhow::{Result, ensure};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub index: String,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the bundle directory is missing or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    ensure!(
        args.dist_dir.is_dir(),
        "web bundle directory not found: {}",
        args.dist_dir.display()
    );
    log_startup_args(&args);

    server::new(args.port, server::Bundle::new(args.dist_dir, &args.index)).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("dist_dir", args.dist_dir.display().to_string()),
        ("index", args.index.clone()),
    ];
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!(
        "paygate {} - {}\n\nStartup configuration:",
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    );
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit(" abc "), "abc");
        assert_eq!(short_commit("unknown"), "unknown");
    }

    #[tokio::test]
    async fn test_execute_rejects_missing_bundle() {
        let args = Args {
            port: 0,
            dist_dir: PathBuf::from("/nonexistent/paygate/dist"),
            index: "index.html".to_string(),
        };
        let result = execute(args).await;
        assert!(result.is_err());
    }
}
