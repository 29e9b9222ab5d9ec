use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;
use lazy_static::lazy_static;

/// Architectures the front-end knows how to size types for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetArch {
    X64,
    A64,
    A32,
}

lazy_static! {
    static ref ARCH_MAP: HashMap<&'static str, TargetArch> = TargetArch::ALL
        .iter()
        .map(|arch| (arch.name(), *arch))
        .collect();
}

impl TargetArch {
    pub const ALL: [TargetArch; 3] = [TargetArch::X64, TargetArch::A64, TargetArch::A32];

    pub fn name(self) -> &'static str {
        match self {
            TargetArch::X64 => "x64",
            TargetArch::A64 => "a64",
            TargetArch::A32 => "a32",
        }
    }

    /// Looks up an architecture by its command line name. Case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ARCH_MAP.get(name).copied()
    }

    /// `"x64, a64, a32"`, for diagnostics.
    pub fn known_names() -> String {
        Self::ALL.iter().map(|arch| arch.name()).join(", ")
    }

    pub fn pointer_width(self) -> u32 {
        match self {
            TargetArch::X64 | TargetArch::A64 => 64,
            TargetArch::A32 => 32,
        }
    }
}

impl Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
