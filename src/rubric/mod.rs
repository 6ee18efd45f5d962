mod level5;
mod level6;

use std::fmt;
use std::str::FromStr;

use crate::model::competency::{COMPETENCY_COUNT, Competency};
use crate::model::grade::{GRADE_COUNT, GradeRank};

pub const NOT_ASSESSED: &str = "Not assessed";

pub const LEVEL_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualificationLevel {
    #[default]
    Level5,
    Level6,
}

impl QualificationLevel {
    pub const ALL: [QualificationLevel; LEVEL_COUNT] =
        [QualificationLevel::Level5, QualificationLevel::Level6];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            QualificationLevel::Level5 => "Creative Thinking Qualification Level 5",
            QualificationLevel::Level6 => "Creative Thinking Qualification Level 6",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            QualificationLevel::Level5 => "Level 5",
            QualificationLevel::Level6 => "Level 6",
        }
    }
}

impl fmt::Display for QualificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown qualification level '{0}' (use 5|6)")]
pub struct UnknownLevel(pub String);

impl FromStr for QualificationLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "5" | "level5" | "l5" => Ok(QualificationLevel::Level5),
            "6" | "level6" | "l6" => Ok(QualificationLevel::Level6),
            _ => Self::ALL
                .into_iter()
                .find(|l| l.title().eq_ignore_ascii_case(s.trim()))
                .ok_or_else(|| UnknownLevel(s.to_string())),
        }
    }
}

type RubricTable = [[[&'static str; GRADE_COUNT]; COMPETENCY_COUNT]; LEVEL_COUNT];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rubric has no text for {level:?} / {competency} / {rank}")]
pub struct RubricGap {
    pub level: QualificationLevel,
    pub competency: Competency,
    pub rank: GradeRank,
}

/// Descriptive text for every (level, competency, grade) cell.
///
/// The array shape makes the table total over the key space; `validate` checks
/// that no cell is blank.
#[derive(Debug, Clone)]
pub struct Rubric {
    table: RubricTable,
}

impl Rubric {
    pub fn builtin() -> Self {
        Self {
            table: [level5::LEVEL5, level6::LEVEL6],
        }
    }

    pub fn from_table(table: RubricTable) -> Result<Self, RubricGap> {
        let rubric = Self { table };
        rubric.validate()?;
        Ok(rubric)
    }

    pub fn validate(&self) -> Result<(), RubricGap> {
        for level in QualificationLevel::ALL {
            for competency in Competency::ALL {
                for rank in GradeRank::ALL {
                    if self.entry(level, competency, rank).trim().is_empty() {
                        return Err(RubricGap {
                            level,
                            competency,
                            rank,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn entry(
        &self,
        level: QualificationLevel,
        competency: Competency,
        rank: GradeRank,
    ) -> &'static str {
        self.table[level.index()][competency.index()][rank.index()]
    }

    pub fn lookup(
        &self,
        level: QualificationLevel,
        competency: Competency,
        rank: Option<GradeRank>,
    ) -> &'static str {
        match rank {
            Some(rank) => self.entry(level, competency, rank),
            None => NOT_ASSESSED,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rubric/tests.rs"]
mod tests;
