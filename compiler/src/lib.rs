//! Configuration surface of the compiler front-end driver.
//!
//! [`load`] turns the process argument vector into a [`Configuration`]. It
//! touches nothing but its input, so calling it twice with the same arguments
//! gives equal results.
use std::ffi::OsString;

mod cli_args;
pub mod config;
pub mod phase;
pub mod target;

use clap::error::ErrorKind;
use thiserror::Error;

use cli_args::Arguments;
pub use config::Configuration;
pub use phase::{Phase, PhaseControl};
pub use target::TargetArch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageErrorKind {
    MissingRequired,
    UnknownFlag,
    /// Missing or invalid value, repeated flag, stray positional argument.
    Malformed,
    HelpRequested,
    VersionRequested,
}

/// The argument vector did not match the flag schema, or asked for help.
///
/// `message` is ready to print as is. Failures carry the error followed by the
/// full flag help.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UsageError {
    kind: UsageErrorKind,
    message: String,
}

impl UsageError {
    pub fn kind(&self) -> UsageErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Help and version output are successful runs, everything else fails with 1.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            UsageErrorKind::HelpRequested | UsageErrorKind::VersionRequested => 0,
            _ => 1,
        }
    }
}

impl From<clap::Error> for UsageError {
    fn from(err: clap::Error) -> Self {
        let kind = match err.kind() {
            ErrorKind::MissingRequiredArgument => UsageErrorKind::MissingRequired,
            ErrorKind::UnknownArgument => UsageErrorKind::UnknownFlag,
            ErrorKind::DisplayHelp => UsageErrorKind::HelpRequested,
            ErrorKind::DisplayVersion => UsageErrorKind::VersionRequested,
            _ => UsageErrorKind::Malformed,
        };
        let mut message = err.render().to_string();
        if !matches!(
            kind,
            UsageErrorKind::HelpRequested | UsageErrorKind::VersionRequested
        ) {
            message.push('\n');
            message.push_str(&Arguments::help_text());
        }
        Self { kind, message }
    }
}

/// Parses the full argument vector, program name first.
pub fn load<I, T>(args: I) -> Result<Configuration, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Arguments::parse_args(args)?;
    Ok(Configuration::from(args))
}
