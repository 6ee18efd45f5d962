use serde::Serialize;

use crate::model::{Competency, GradeRank, Session};
use crate::rubric::Rubric;

#[derive(Debug, Clone, Serialize)]
pub struct CompetencySummary {
    pub key: Competency,
    pub label: &'static str,
    pub color: &'static str,
    pub grade: Option<GradeRank>,
    pub rank: Option<usize>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub student_name: String,
    pub project_name: String,
    pub feedback: String,
    pub qualification_level: &'static str,
    pub fully_assessed: bool,
    pub assessed_count: usize,
    pub competencies: Vec<CompetencySummary>,
}

pub fn build_summary(session: &Session, rubric: &Rubric) -> AssessmentSummary {
    let identity = session.identity();
    let level = session.level();
    let competencies = session
        .state()
        .selections()
        .map(|(c, grade)| CompetencySummary {
            key: c,
            label: c.label(),
            color: c.color(),
            grade,
            rank: grade.map(GradeRank::index),
            description: rubric.lookup(level, c, grade),
        })
        .collect();

    AssessmentSummary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        student_name: identity.student_name.clone(),
        project_name: identity.project_name.clone(),
        feedback: identity.feedback.clone(),
        qualification_level: level.title(),
        fully_assessed: session.is_fully_assessed(),
        assessed_count: session.state().assessed_count(),
        competencies,
    }
}

pub fn render_summary_json(summary: &AssessmentSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
