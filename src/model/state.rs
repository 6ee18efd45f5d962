use std::str::FromStr;

use crate::model::competency::{COMPETENCY_COUNT, Competency, UnknownCompetency};
use crate::model::grade::{GradeRank, InvalidGrade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverPointer {
    pub competency: Competency,
    pub rank: GradeRank,
}

impl HoverPointer {
    pub fn new(competency: Competency, rank: GradeRank) -> Self {
        Self { competency, rank }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoverParseError {
    #[error("hover must be <competency>:<grade>, got '{0}'")]
    Shape(String),
    #[error(transparent)]
    Competency(#[from] UnknownCompetency),
    #[error(transparent)]
    Grade(#[from] InvalidGrade),
}

impl FromStr for HoverPointer {
    type Err = HoverParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (c, r) = s
            .split_once(':')
            .ok_or_else(|| HoverParseError::Shape(s.to_string()))?;
        Ok(Self::new(c.parse()?, r.parse()?))
    }
}

/// Per-competency selection plus the transient hover preview.
///
/// Selections only change through `set_grade` and `clear_all`. Hover is a
/// separate slot and never touches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentState {
    selections: [Option<GradeRank>; COMPETENCY_COUNT],
    hover: Option<HoverPointer>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self, competency: Competency) -> Option<GradeRank> {
        self.selections[competency.index()]
    }

    pub fn selections(&self) -> impl Iterator<Item = (Competency, Option<GradeRank>)> + '_ {
        Competency::ALL
            .into_iter()
            .map(|c| (c, self.selections[c.index()]))
    }

    pub fn hover(&self) -> Option<HoverPointer> {
        self.hover
    }

    pub fn set_grade(&mut self, competency: Competency, rank: GradeRank) {
        self.selections[competency.index()] = Some(rank);
    }

    pub fn set_hover(&mut self, hover: Option<HoverPointer>) {
        self.hover = hover;
    }

    pub fn clear_all(&mut self) {
        self.selections = [None; COMPETENCY_COUNT];
        self.hover = None;
    }

    pub fn assessed_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_fully_assessed(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    pub fn unassessed(&self) -> Vec<Competency> {
        self.selections()
            .filter(|(_, s)| s.is_none())
            .map(|(c, _)| c)
            .collect()
    }

    /// A hover preview only makes sense on a ring that is not already filled.
    pub fn should_show_hover(&self, competency: Competency, rank: GradeRank) -> bool {
        match self.selection(competency) {
            None => true,
            Some(selected) => rank > selected,
        }
    }

    /// Fill opacity of one segment. Every ring up to and including the
    /// selected rank is filled at its own grade opacity. Rings above it, and
    /// all rings of an unassessed competency, light up only under the hover.
    pub fn opacity_for(&self, competency: Competency, rank: GradeRank) -> f64 {
        if let Some(selected) = self.selection(competency) {
            if rank <= selected {
                return rank.opacity();
            }
        }
        if self.hover == Some(HoverPointer::new(competency, rank)) {
            rank.opacity()
        } else {
            0.0
        }
    }

    /// Same state with the hover preview dropped, for snapshots that must not
    /// carry pointer position.
    pub fn without_hover(&self) -> Self {
        Self {
            selections: self.selections,
            hover: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/state.rs"]
mod tests;
