use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop a menu description from being built.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No arguments")]
    NoArguments,

    #[error("First argument must be 'qt' or 'gtk' (got '{0}')")]
    UnknownToolkit(String),

    #[error("{what} missing")]
    MissingArgument {
        flag: &'static str,
        what: &'static str,
    },

    #[error("Bad command-line item '{0}'")]
    BadItem(String),

    #[error("Menu entry '{0}' needs a ':' between label and command")]
    MissingCommandSeparator(String),

    #[error("No menu items given")]
    NoMenuItems,

    #[error("Bad menu item '{directive}' from stdin (line {line})")]
    MalformedDirective { directive: String, line: usize },

    #[error("reading menu items: {0}")]
    Read(#[source] io::Error),

    #[error("settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used by the binary to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    NoMenuItems,
    MalformedDirective,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoArguments
            | Error::UnknownToolkit(_)
            | Error::MissingArgument { .. }
            | Error::BadItem(_)
            | Error::MissingCommandSeparator(_)
            | Error::Settings { .. } => ErrorKind::Configuration,
            Error::NoMenuItems => ErrorKind::NoMenuItems,
            Error::MalformedDirective { .. } => ErrorKind::MalformedDirective,
            Error::Read(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(Error::NoArguments.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::BadItem("--nope".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(Error::NoMenuItems.kind(), ErrorKind::NoMenuItems);
        assert_eq!(
            Error::MalformedDirective {
                directive: "--nope".into(),
                line: 3
            }
            .kind(),
            ErrorKind::MalformedDirective
        );
    }

    #[test]
    fn missing_argument_message() {
        let err = Error::MissingArgument {
            flag: "--icon",
            what: "Filename for icon",
        };
        insta::assert_snapshot!(err.to_string(), @"Filename for icon missing");
    }
}
