use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::config::{DEFAULT_ARCH, DEFAULT_STDLIB};
use crate::phase::Phase;

/// Raw command line surface. Absence of the optional phase requests only
/// exists here; [`crate::Configuration`] is built from it once parsing succeeds.
#[derive(Parser, Debug)]
#[command(version, about = "compiler front-end driver", long_about = None)]
pub(crate) struct Arguments {
    /// remove unreachable functions
    #[arg(long = "shake_tree")]
    pub shake_tree: bool,

    /// path to stdlib directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STDLIB)]
    pub stdlib: String,

    /// architecture to generated IR for
    #[arg(long, default_value = DEFAULT_ARCH)]
    pub arch: String,

    /// stop at the given stage and emit ir
    #[arg(long = "emit_ir")]
    pub emit_ir: bool,

    /// an input source file
    #[arg(short = 'F', long = "files", value_name = "FILE")]
    pub files: String,

    /// stop at the given stage
    #[arg(long, value_enum, value_name = "PHASE")]
    pub stop: Option<Phase>,

    /// stop at the given stage and dump ast
    #[arg(long = "dump_ast", value_enum, value_name = "PHASE")]
    pub dump_ast: Option<Phase>,

    /// stop at the given stage and dump ast in html format
    #[arg(long = "dump_ast_html", value_enum, value_name = "PHASE")]
    pub dump_ast_html: Option<Phase>,

    /// stop at the given stage and dump types
    #[arg(long = "dump_types", value_enum, value_name = "PHASE")]
    pub dump_types: Option<Phase>,

    /// stop at the given stage and emit stats
    #[arg(long = "emit_stats", value_enum, value_name = "PHASE")]
    pub emit_stats: Option<Phase>,
}

impl Arguments {
    pub(crate) fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Full `--help` text, appended to usage errors.
    pub(crate) fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
