use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_DIST_DIR, ARG_INDEX, ARG_PORT};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dist_dir = matches
        .get_one::<String>(ARG_DIST_DIR)
        .map(PathBuf::from)
        .context("missing required argument: --dist-dir")?;
    let index = matches
        .get_one::<String>(ARG_INDEX)
        .cloned()
        .unwrap_or_else(|| "index.html".to_string());

    Ok(Action::Server(Args {
        port,
        dist_dir,
        index,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler_builds_server_action() -> Result<()> {
        let matches = commands::new().try_get_matches_from([
            "paygate",
            "--port",
            "9000",
            "--dist-dir",
            "/srv/dist",
        ])?;

        let Action::Server(args) = handler(&matches)?;
        assert_eq!(args.port, 9000);
        assert_eq!(args.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(args.index, "index.html");
        Ok(())
    }
}
