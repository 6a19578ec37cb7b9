//! Command-line argument definitions for the umli CLI.
//!
//! [`Args`] is parsed from the command line with [`clap`]. The arguments
//! select the input script, the output SVG path, an optional configuration
//! file and the logging verbosity.

use clap::Parser;

/// Command-line arguments for the umli sequence diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input umli script
    #[arg(help = "Path to the input script")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["umli", "diagram.umli"]).unwrap();
        assert_eq!(args.input, "diagram.umli");
        assert_eq!(args.output, "out.svg");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "umli",
            "in.umli",
            "-o",
            "diagram.svg",
            "--config",
            "umli.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output, "diagram.svg");
        assert_eq!(args.config.as_deref(), Some("umli.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["umli"]).is_err());
    }
}
