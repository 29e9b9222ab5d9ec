use std::path::{Path, PathBuf};

use crate::cli_args::Arguments;
use crate::phase::PhaseControl;
use crate::target::TargetArch;

pub const DEFAULT_STDLIB: &str = "./Lib";
pub const DEFAULT_ARCH: &str = "x64";

/// Resolved driver configuration.
///
/// Built once per invocation by [`crate::load`] and handed to later stages by
/// value or reference. Every field holds either what the user passed or its
/// default, so there is nothing left to validate downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    shake_tree: bool,
    stdlib_path: PathBuf,
    arch: String,
    emit_ir: bool,
    source_files: PathBuf,
    phases: PhaseControl,
}

impl Configuration {
    /// Remove unreachable functions. Stored only.
    pub fn shake_tree(&self) -> bool {
        self.shake_tree
    }

    /// Not checked for existence.
    pub fn stdlib_path(&self) -> &Path {
        &self.stdlib_path
    }

    /// Target architecture exactly as given, known or not.
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// `None` when `arch` is not one of [`TargetArch::ALL`].
    pub fn target_arch(&self) -> Option<TargetArch> {
        TargetArch::from_name(&self.arch)
    }

    /// Halt after IR generation. Stored only.
    pub fn emit_ir(&self) -> bool {
        self.emit_ir
    }

    /// The input source. A single path even though the flag is plural.
    pub fn source_files(&self) -> &Path {
        &self.source_files
    }

    pub fn phases(&self) -> &PhaseControl {
        &self.phases
    }
}

impl From<Arguments> for Configuration {
    fn from(args: Arguments) -> Self {
        let Arguments {
            shake_tree,
            stdlib,
            arch,
            emit_ir,
            files,
            stop,
            dump_ast,
            dump_ast_html,
            dump_types,
            emit_stats,
        } = args;
        Self {
            shake_tree,
            stdlib_path: PathBuf::from(stdlib),
            arch,
            emit_ir,
            source_files: PathBuf::from(files),
            phases: PhaseControl {
                stop,
                dump_ast,
                dump_ast_html,
                dump_types,
                emit_stats,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;

    fn args(files: &str) -> Arguments {
        Arguments {
            shake_tree: false,
            stdlib: DEFAULT_STDLIB.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            emit_ir: false,
            files: files.to_string(),
            stop: None,
            dump_ast: None,
            dump_ast_html: None,
            dump_types: None,
            emit_stats: None,
        }
    }

    #[test]
    fn from_arguments() {
        let config = Configuration::from(args("main.cw"));
        assert!(!config.shake_tree());
        assert!(!config.emit_ir());
        assert_eq!(config.stdlib_path(), Path::new("./Lib"));
        assert_eq!(config.arch(), "x64");
        assert_eq!(config.target_arch(), Some(TargetArch::X64));
        assert_eq!(config.source_files(), Path::new("main.cw"));
        assert!(config.phases().is_empty());
    }

    #[test]
    fn phase_requests_are_carried() {
        let config = Configuration::from(Arguments {
            dump_ast: Some(Phase::AfterParsing),
            emit_stats: Some(Phase::AfterNameCleanup),
            ..args("main.cw")
        });
        assert_eq!(config.phases().dump_ast, Some(Phase::AfterParsing));
        assert_eq!(config.phases().emit_stats, Some(Phase::AfterNameCleanup));
        assert_eq!(config.phases().first_halt(), Some(Phase::AfterParsing));
    }

    #[test]
    fn unknown_arch_is_kept_verbatim() {
        let config = Configuration::from(Arguments {
            arch: "riscv".to_string(),
            ..args("main.cw")
        });
        assert_eq!(config.arch(), "riscv");
        assert_eq!(config.target_arch(), None);
    }
}
