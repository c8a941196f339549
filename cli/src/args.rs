use std::ffi::OsString;

use clap::{Parser, Subcommand};
use stornext_core::Action;

pub const USAGE: &str = "
Usage: stornext [action] [filename]

Actions:

  info                     Retrieve the latest status of system components.
  fsmedinfo                Report on media based on their current status.
  fsfileinfo <filename>    Report on a file known to the Tertiary Storage Manager.
  fsstore <filename>       Expedite storing a file that resides on disk to media.
  fsretrieve <filename>    Retrieve a truncated file from media and place it on disk.
  fsrmdiskcopy <filename>  Remove the disk copy of a file already stored to a medium.
";

/// Top-level command line. There are no flags: the first word picks the
/// action and file actions take exactly one more word.
#[derive(Debug, Parser)]
#[command(name = "stornext")]
#[command(disable_help_flag = true, disable_version_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Retrieve the latest status of system components.
    #[command(name = "info", disable_help_flag = true)]
    Info,

    /// Report on media based on their current status.
    #[command(name = "fsmedinfo", disable_help_flag = true)]
    MediaInfo,

    /// Report on a file known to the Tertiary Storage Manager.
    #[command(name = "fsfileinfo", disable_help_flag = true)]
    FileInfo {
        filename: String,
    },

    /// Expedite storing a file that resides on disk to media.
    #[command(name = "fsstore", disable_help_flag = true)]
    Store {
        filename: String,
    },

    /// Retrieve a truncated file from media and place it on disk.
    #[command(name = "fsretrieve", disable_help_flag = true)]
    Retrieve {
        filename: String,
    },

    /// Remove the disk copy of a file already stored to a medium.
    #[command(name = "fsrmdiskcopy", disable_help_flag = true)]
    RemoveDiskCopy {
        filename: String,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Info => Action::SystemInfo,
            Command::MediaInfo => Action::MediaInfo,
            Command::FileInfo { filename } => Action::FileInfo(filename),
            Command::Store { filename } => Action::Store(filename),
            Command::Retrieve { filename } => Action::Retrieve(filename),
            Command::RemoveDiskCopy { filename } => Action::RemoveDiskCopy(filename),
        }
    }
}

/// Number of words (program name included) each action is invoked with.
fn expected_words(action: &str) -> Option<usize> {
    match action {
        "info" | "fsmedinfo" => Some(2),
        "fsfileinfo" | "fsstore" | "fsretrieve" | "fsrmdiskcopy" => Some(3),
        _ => None,
    }
}

/// Parse a full argv (program name first) into an action.
///
/// `None` covers every shape that should only print usage: no action, an
/// unknown action, or the wrong number of words for a known one. The shape
/// is decided by word count alone; clap only maps the words, and the filename
/// is handed over after `--` so that no filename is read as a flag or escape.
pub fn parse_action<I, T>(args: I) -> Option<Action>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut words: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let expected = words.get(1).and_then(|w| w.to_str()).and_then(expected_words)?;
    if words.len() != expected {
        tracing::debug!(words = words.len(), expected, "wrong number of arguments");
        return None;
    }
    if expected == 3 {
        words.insert(2, OsString::from("--"));
    }

    match Cli::try_parse_from(words) {
        Ok(cli) => cli.command.map(Action::from),
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "arguments do not match any action");
            None
        }
    }
}
