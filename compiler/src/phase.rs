use std::fmt::Display;

use clap::ValueEnum;

/// Checkpoints of the front-end pipeline, in the order they are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Phase {
    AfterParsing,
    AfterSymbolizing,
    AfterTyping,
    AfterPartialEval,
    AfterInitialLowering,
    AfterOptimization,
    AfterEliminateSpanAndUnion,
    AfterLargeArgConversion,
    AfterLegalize,
    AfterNameCleanup,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Requests to halt (and optionally dump something) at a given phase.
///
/// Nothing consumes these yet, they are only carried to later stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseControl {
    pub stop: Option<Phase>,
    pub dump_ast: Option<Phase>,
    pub dump_ast_html: Option<Phase>,
    pub dump_types: Option<Phase>,
    pub emit_stats: Option<Phase>,
}

impl PhaseControl {
    /// Every request that is set, labelled with the flag that made it.
    pub fn requests(&self) -> impl Iterator<Item = (&'static str, Phase)> + '_ {
        [
            ("stop", self.stop),
            ("dump_ast", self.dump_ast),
            ("dump_ast_html", self.dump_ast_html),
            ("dump_types", self.dump_types),
            ("emit_stats", self.emit_stats),
        ]
        .into_iter()
        .filter_map(|(flag, phase)| phase.map(|phase| (flag, phase)))
    }

    /// The earliest phase at which any request halts the pipeline.
    pub fn first_halt(&self) -> Option<Phase> {
        self.requests().map(|(_, phase)| phase).min()
    }

    pub fn is_empty(&self) -> bool {
        self.requests().next().is_none()
    }
}
