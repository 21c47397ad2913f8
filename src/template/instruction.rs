//! Node id instructions.
//!
//! Figma exports layer names as SVG `id` attributes. A layer named
//! `$fill(topMenuIconColor, backgroundColor)` asks for its `fill` to be bound
//! to `color('topMenuIconColor', 'backgroundColor')` in the generated template.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fmt;

/// Attribute an instruction rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Fill,
    Stroke,
}

impl Target {
    /// Targets accepted when nothing else is configured.
    pub const DEFAULT: &'static [Target] = &[Target::Fill];

    /// Token used both in node ids and as the attribute name.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    fn from_token(token: &str, accepted: &[Target]) -> Option<Self> {
        accepted.iter().copied().find(|t| t.token() == token)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed `$target(args...)` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub target: Target,
    pub args: Vec<String>,
}

/// Matches node ids against the accepted targets.
///
/// The pattern is generated from the same target list the parser reports,
/// so a token can only match if it maps back to a [`Target`].
#[derive(Debug, Clone)]
pub struct InstructionParser {
    targets: Vec<Target>,
    pattern: Regex,
}

impl InstructionParser {
    pub fn new(targets: &[Target]) -> Self {
        let mut seen = FxHashSet::default();
        let mut targets = targets.to_vec();
        targets.retain(|t| seen.insert(*t));
        if targets.is_empty() {
            targets = Target::DEFAULT.to_vec();
        }

        let alternatives = targets
            .iter()
            .map(|t| regex::escape(t.token()))
            .collect::<Vec<_>>()
            .join("|");

        // Anchored at the start only: trailing text after `)` is ignored.
        let pattern = Regex::new(&format!(
            r"^\$({alternatives})\(([a-zA-Z0-9\s,]+)\)"
        ))
        .expect("instruction pattern is built from fixed tokens");

        Self { targets, pattern }
    }

    /// Targets this parser accepts.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Parse a node id, returning `None` for ordinary ids.
    pub fn parse(&self, id: &str) -> Option<Instruction> {
        let caps = self.pattern.captures(id)?;
        let target = Target::from_token(&caps[1], &self.targets)?;
        let args = caps[2]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .split(',')
            .map(str::to_owned)
            .collect();

        Some(Instruction { target, args })
    }
}

impl Default for InstructionParser {
    fn default() -> Self {
        Self::new(Target::DEFAULT)
    }
}
