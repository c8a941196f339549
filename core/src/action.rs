//! The six StorNext Web Services calls this client knows how to make.
//!
//! # Design
//! Each variant carries exactly the input its endpoint needs, so "a file
//! action without a filename" cannot be represented. Filenames are kept as
//! given and embedded into the query string without escaping.

use std::fmt;

/// One API call against the StorNext Web Services v2 endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Latest status of system components.
    SystemInfo,
    /// Verbose report on media, grouped by current status.
    MediaInfo,
    /// Report about a file known to the Tertiary Storage Manager.
    FileInfo(String),
    /// Expedite storing a file that currently resides on disk to media.
    Store(String),
    /// Retrieve a truncated file from media back onto disk.
    Retrieve(String),
    /// Remove the disk copy of a file already stored to a medium.
    RemoveDiskCopy(String),
}

impl Action {
    /// Command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SystemInfo => "info",
            Action::MediaInfo => "fsmedinfo",
            Action::FileInfo(_) => "fsfileinfo",
            Action::Store(_) => "fsstore",
            Action::Retrieve(_) => "fsretrieve",
            Action::RemoveDiskCopy(_) => "fsrmdiskcopy",
        }
    }

    /// Endpoint path relative to the API prefix, e.g. `/file/fsstore`.
    pub fn path(&self) -> &'static str {
        match self {
            Action::SystemInfo => "/system/info",
            Action::MediaInfo => "/fsmedinfo",
            Action::FileInfo(_) => "/file/fsfileinfo",
            Action::Store(_) => "/file/fsstore",
            Action::Retrieve(_) => "/file/fsretrieve",
            Action::RemoveDiskCopy(_) => "/file/fsrmdiskcopy",
        }
    }

    /// The filename this action operates on, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Action::SystemInfo | Action::MediaInfo => None,
            Action::FileInfo(f) | Action::Store(f) | Action::Retrieve(f) | Action::RemoveDiskCopy(f) => {
                Some(f.as_str())
            }
        }
    }

    /// Action-specific query parameters, in wire order. Values are not escaped.
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Action::SystemInfo => Vec::new(),
            Action::MediaInfo => vec![("verbose", "true")],
            _ => self.filename().map(|f| vec![("file", f)]).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filename() {
            Some(file) => write!(f, "{} {file}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_actions_expose_their_filename() {
        for action in [
            Action::FileInfo("/stornext/snfs1/a.dat".to_string()),
            Action::Store("/stornext/snfs1/a.dat".to_string()),
            Action::Retrieve("/stornext/snfs1/a.dat".to_string()),
            Action::RemoveDiskCopy("/stornext/snfs1/a.dat".to_string()),
        ] {
            assert_eq!(action.filename(), Some("/stornext/snfs1/a.dat"), "{action}");
            assert_eq!(action.query_params(), vec![("file", "/stornext/snfs1/a.dat")]);
        }
    }

    #[test]
    fn system_actions_have_no_filename() {
        assert_eq!(Action::SystemInfo.filename(), None);
        assert_eq!(Action::MediaInfo.filename(), None);
        assert!(Action::SystemInfo.query_params().is_empty());
        assert_eq!(Action::MediaInfo.query_params(), vec![("verbose", "true")]);
    }

    #[test]
    fn display_includes_filename() {
        assert_eq!(Action::Store("x y".to_string()).to_string(), "fsstore x y");
        assert_eq!(Action::MediaInfo.to_string(), "fsmedinfo");
    }
}
