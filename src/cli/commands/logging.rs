use clap::{Arg, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts either a count (`0..=5`) or a level name, as given through
/// `PAYGATE_LOG_LEVEL`.
fn parse_log_level(level: &str) -> Result<u8, String> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        return if parsed <= 5 {
            Ok(parsed)
        } else {
            Err(format!("log level out of range: {parsed}"))
        };
    }

    LEVELS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level: {level}"))
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_log_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("PAYGATE_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_names() {
        assert_eq!(parse_log_level("error"), Ok(0));
        assert_eq!(parse_log_level("WARN"), Ok(1));
        assert_eq!(parse_log_level(" info "), Ok(2));
        assert_eq!(parse_log_level("debug"), Ok(3));
        assert_eq!(parse_log_level("trace"), Ok(4));
    }

    #[test]
    fn test_parse_log_level_numbers() {
        assert_eq!(parse_log_level("0"), Ok(0));
        assert_eq!(parse_log_level("5"), Ok(5));
        assert!(parse_log_level("6").is_err());
        assert!(parse_log_level("loud").is_err());
    }
}
