pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";
pub const ARG_DIST_DIR: &str = "dist-dir";
pub const ARG_INDEX: &str = "index";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("paygate")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PAYGATE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DIST_DIR)
                .short('d')
                .long("dist-dir")
                .help("Directory holding the compiled web bundle")
                .long_help(
                    "Directory holding the compiled web bundle. Unknown paths fall back to the index file so guarded routes can be deep linked.",
                )
                .env("PAYGATE_DIST_DIR")
                .required(true),
        )
        .arg(
            Arg::new(ARG_INDEX)
                .long("index")
                .help("Fallback document served for client-side routes")
                .default_value("index.html")
                .env("PAYGATE_INDEX"),
        );

    logging::with_args(command)
}
