//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};

use crate::exit::AppExit;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "kinetica",
    version,
    about = "Kinetica - Low-poly 3D modeling, reimagined",
    disable_version_flag = true
)]
pub struct AppArgs {
    /// Show version info
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    _version: Option<bool>,

    /// Run without UI (for batch processing)
    #[arg(long)]
    pub headless: bool,

    /// Set log level (overrides RUST_LOG)
    #[arg(long = "log-level", value_name = "L")]
    pub log_level: Option<LogLevel>,

    /// Load plugins from directory P
    #[arg(long = "plugin-dir", value_name = "P")]
    pub plugin_dir: Option<PathBuf>,

    /// Documents to open
    #[arg(value_name = "file.kin")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Debug => log::LevelFilter::Debug,
            Self::Info => log::LevelFilter::Info,
            Self::Warn => log::LevelFilter::Warn,
            Self::Error => log::LevelFilter::Error,
        }
    }
}

impl AppArgs {
    /// Parse `args` (including the program name).
    ///
    /// Help and version requests are printed and reported as
    /// `Err(AppExit::Success)`; usage errors are printed and reported as
    /// `Err(AppExit::InvalidArguments)`.
    pub fn parse_or_exit<I, T>(args: I) -> Result<Self, AppExit>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| {
            let exit = exit_for(err.kind());
            // Nothing sensible to do if stdout/stderr is gone.
            let _ = err.print();
            exit
        })
    }
}

fn exit_for(kind: ErrorKind) -> AppExit {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => AppExit::Success,
        _ => AppExit::InvalidArguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppArgs, clap::Error> {
        AppArgs::try_parse_from(std::iter::once("kinetica").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments() {
        let args = parse(&[]).unwrap();
        assert!(!args.headless);
        assert!(args.log_level.is_none());
        assert!(args.plugin_dir.is_none());
        assert!(args.files.is_empty());
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--headless",
            "--log-level=debug",
            "--plugin-dir=plugins",
            "a.kin",
            "b.kin",
        ])
        .unwrap();
        assert!(args.headless);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.plugin_dir, Some(PathBuf::from("plugins")));
        assert_eq!(args.files, [PathBuf::from("a.kin"), PathBuf::from("b.kin")]);
    }

    #[test]
    fn help_and_version_exit_successfully() {
        for flag in ["-h", "--help", "-v", "--version"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(exit_for(err.kind()), AppExit::Success, "{flag}");
        }
    }

    #[test]
    fn unknown_option_is_invalid() {
        let err = parse(&["--frobnicate"]).unwrap_err();
        assert_eq!(exit_for(err.kind()), AppExit::InvalidArguments);
    }

    #[test]
    fn bad_log_level_is_invalid() {
        let err = parse(&["--log-level=loud"]).unwrap_err();
        assert_eq!(exit_for(err.kind()), AppExit::InvalidArguments);
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        AppArgs::command().debug_assert();
    }
}
