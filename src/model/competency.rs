use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::geometry::SectorSpan;

pub const COMPETENCY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Competency {
    Research,
    Concepts,
    FailFix,
    Communicate,
    Evaluate,
}

#[derive(Debug, Clone, Copy)]
pub struct CompetencyDef {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub color_name: &'static str,
    pub span: SectorSpan,
}

const COMPETENCY_DEFS: [CompetencyDef; COMPETENCY_COUNT] = [
    CompetencyDef {
        key: "research",
        label: "Research",
        color: "#58D55E",
        color_name: "Green",
        span: SectorSpan::new(-36.0, 36.0),
    },
    CompetencyDef {
        key: "concepts",
        label: "Concepts",
        color: "#FFDC35",
        color_name: "Yellow",
        span: SectorSpan::new(36.0, 108.0),
    },
    CompetencyDef {
        key: "failFix",
        label: "Fail & Fix",
        color: "#FF8E25",
        color_name: "Orange",
        span: SectorSpan::new(108.0, 180.0),
    },
    CompetencyDef {
        key: "communicate",
        label: "Communicate",
        color: "#44B2FF",
        color_name: "Blue",
        span: SectorSpan::new(180.0, 252.0),
    },
    CompetencyDef {
        key: "evaluate",
        label: "Evaluate",
        color: "#8B63FF",
        color_name: "Purple",
        span: SectorSpan::new(252.0, 324.0),
    },
];

impl Competency {
    pub const ALL: [Competency; COMPETENCY_COUNT] = [
        Competency::Research,
        Competency::Concepts,
        Competency::FailFix,
        Competency::Communicate,
        Competency::Evaluate,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn def(self) -> &'static CompetencyDef {
        &COMPETENCY_DEFS[self.index()]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    pub fn color(self) -> &'static str {
        self.def().color
    }

    pub fn color_name(self) -> &'static str {
        self.def().color_name
    }

    pub fn span(self) -> SectorSpan {
        self.def().span
    }

    /// Accepts the camelCase key, case-insensitively, with `-`/`_` separators
    /// ignored, so `failFix`, `fail-fix` and `FAIL_FIX` all resolve.
    pub fn from_key(key: &str) -> Option<Self> {
        let folded: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|c| c.key().to_ascii_lowercase() == folded)
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown competency '{0}' (use research|concepts|failFix|communicate|evaluate)")]
pub struct UnknownCompetency(pub String);

impl FromStr for Competency {
    type Err = UnknownCompetency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| UnknownCompetency(s.to_string()))
    }
}
