use crate::model::competency::Competency;
use crate::model::grade::GradeRank;
use crate::model::state::{AssessmentState, HoverPointer};
use crate::rubric::QualificationLevel;

pub const NAME_MAX_CHARS: usize = 50;
pub const FEEDBACK_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    pub student_name: String,
    pub project_name: String,
    pub feedback: String,
}

impl IdentityFields {
    pub fn is_empty(&self) -> bool {
        self.student_name.is_empty() && self.project_name.is_empty() && self.feedback.is_empty()
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// One evaluator's assessment session: the wheel state plus the free-text
/// fields and level selection that travel with it into reports.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AssessmentState,
    identity: IdentityFields,
    level: QualificationLevel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn identity(&self) -> &IdentityFields {
        &self.identity
    }

    pub fn level(&self) -> QualificationLevel {
        self.level
    }

    pub fn set_level(&mut self, level: QualificationLevel) {
        self.level = level;
    }

    pub fn set_student_name(&mut self, name: &str) {
        self.identity.student_name = truncate_chars(name, NAME_MAX_CHARS);
    }

    pub fn set_project_name(&mut self, name: &str) {
        self.identity.project_name = truncate_chars(name, NAME_MAX_CHARS);
    }

    pub fn set_feedback(&mut self, feedback: &str) {
        self.identity.feedback = truncate_chars(feedback, FEEDBACK_MAX_CHARS);
    }

    pub fn activate_segment(&mut self, competency: Competency, rank: GradeRank) {
        self.state.set_grade(competency, rank);
    }

    /// Returns false when the segment is already filled. The pointer has still
    /// moved, so any earlier preview is cleared.
    pub fn hover_enter(&mut self, competency: Competency, rank: GradeRank) -> bool {
        if !self.state.should_show_hover(competency, rank) {
            self.state.set_hover(None);
            return false;
        }
        self.state.set_hover(Some(HoverPointer::new(competency, rank)));
        true
    }

    pub fn hover_leave(&mut self) {
        self.state.set_hover(None);
    }

    pub fn clear_all(&mut self) {
        self.state.clear_all();
        self.identity = IdentityFields::default();
        self.level = QualificationLevel::default();
    }

    pub fn is_fully_assessed(&self) -> bool {
        self.state.is_fully_assessed()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/session.rs"]
mod tests;
