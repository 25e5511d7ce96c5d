//! Full-screen terminal presenter for plain-text slide outlines.

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use ptext_core::{load_deck, Error, OutlineParser, Presenter, ScopedTerminal, Settings};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::CrosstermTerminal;

const PROG: &str = "ptext";

/// Exit status for command line errors, matching clap's usage errors.
const EXIT_USAGE: u8 = 2;

const EXIT_FAILURE: u8 = 1;

/// Present a plain-text outline as slides.
///
/// Keys: n next, b/p back, q/Esc quit.
#[derive(Parser, Debug)]
#[command(name = "ptext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Outline file (`+ title` and `- point` lines)
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Load the outline and present it until the user quits.
fn run(args: &Args) -> Result<()> {
    let settings = Settings::default();
    let parser = OutlineParser::with_markers(settings.markers);

    let deck = load_deck(&args.file, &parser)?;
    log::info!("Presenting {} slides from {}", deck.len(), args.file.display());

    let mut presenter = Presenter::new(deck, &settings);
    let mut terminal = ScopedTerminal::acquire(CrosstermTerminal::new(settings.theme))
        .context("Failed to set up terminal")?;

    presenter
        .run(&mut *terminal)
        .context("Presentation aborted")?;

    Ok(())
}

/// Print a diagnostic for a failed run. The terminal is already restored.
fn report(err: &anyhow::Error) -> ExitCode {
    let (status, message) = diagnose(err);
    eprintln!("{}", message);
    ExitCode::from(status)
}

/// Exit status and stderr line for a failed run.
///
/// Problems with the outline file exit like command line errors; anything
/// that goes wrong while presenting exits with 1.
fn diagnose(err: &anyhow::Error) -> (u8, String) {
    match err.downcast_ref::<Error>() {
        Some(Error::FileOpen { path, source }) => {
            let reason = match source.kind() {
                ErrorKind::NotFound => "No such file or directory".to_string(),
                _ => source.to_string(),
            };
            (EXIT_USAGE, format!("{}: {}: {}", PROG, path.display(), reason))
        }
        Some(Error::IoError(_)) => (EXIT_USAGE, format!("{}: {:#}", PROG, err)),
        _ => (EXIT_FAILURE, format!("{}: {:#}", PROG, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::io;

    fn open_error(kind: ErrorKind) -> anyhow::Error {
        anyhow::Error::new(Error::FileOpen {
            path: PathBuf::from("talk.txt"),
            source: io::Error::new(kind, "os says no"),
        })
    }

    #[test]
    fn test_missing_file_exits_with_usage_status() {
        let (status, message) = diagnose(&open_error(ErrorKind::NotFound));

        assert_eq!(status, 2);
        assert_eq!(message, "ptext: talk.txt: No such file or directory");
    }

    #[test]
    fn test_unopenable_file_reports_os_reason() {
        let (status, message) = diagnose(&open_error(ErrorKind::PermissionDenied));

        assert_eq!(status, 2);
        assert_eq!(message, "ptext: talk.txt: os says no");
    }

    #[test]
    fn test_unreadable_outline_exits_with_usage_status() {
        let err = anyhow::Error::new(Error::IoError(io::Error::new(
            ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        )));
        let (status, message) = diagnose(&err);

        assert_eq!(status, 2);
        assert_eq!(
            message,
            "ptext: Failed to read outline: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_terminal_failure_exits_with_failure_status() {
        let err = Err::<(), _>(Error::Terminal("read failed".to_string()))
            .context("Presentation aborted")
            .unwrap_err();
        let (status, message) = diagnose(&err);

        assert_eq!(status, 1);
        assert_eq!(
            message,
            "ptext: Presentation aborted: Terminal error: read failed"
        );
    }

    #[test]
    fn test_args_require_a_file() {
        let err = Args::try_parse_from(["ptext"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_args_take_one_positional_file() {
        let args = Args::try_parse_from(["ptext", "talk.txt"]).unwrap();

        assert_eq!(args.file, PathBuf::from("talk.txt"));
        assert!(Args::try_parse_from(["ptext", "a.txt", "b.txt"]).is_err());
    }
}
