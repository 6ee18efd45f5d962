pub mod svg;

use crate::geometry::{Point, SegmentPath, polar_to_cartesian, segment_path};
use crate::model::competency::{COMPETENCY_COUNT, Competency};
use crate::model::grade::{GRADE_COUNT, GradeRank};
use crate::model::{AssessmentState, IdentityFields, Session};
use crate::rubric::QualificationLevel;

pub const WHEEL_VIEWBOX: f64 = 1130.0;
pub const WHEEL_CENTER: Point = Point::new(WHEEL_VIEWBOX / 2.0, WHEEL_VIEWBOX / 2.0);
pub const SEGMENT_STROKE: &str = "#e5e7eb";
pub const SEGMENT_STROKE_WIDTH: f64 = 1.0;

/// Draw instruction for one (competency, grade) segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDraw {
    pub competency: Competency,
    pub rank: GradeRank,
    pub path: SegmentPath,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLabel {
    pub rank: GradeRank,
    pub anchor: Point,
}

/// Segment outlines for a wheel at a fixed center. Built once per layout and
/// combined with state on every redraw.
#[derive(Debug, Clone)]
pub struct WheelGeometry {
    center: Point,
    paths: [[SegmentPath; GRADE_COUNT]; COMPETENCY_COUNT],
}

impl WheelGeometry {
    pub fn new(center: Point) -> Self {
        let paths = Competency::ALL
            .map(|c| GradeRank::ALL.map(|g| segment_path(center, c.span(), g.ring())));
        Self { center, paths }
    }

    pub fn path(&self, competency: Competency, rank: GradeRank) -> &SegmentPath {
        &self.paths[competency.index()][rank.index()]
    }

    pub fn draws(&self, state: &AssessmentState) -> Vec<SegmentDraw> {
        self.draws_with(|c, g| state.opacity_for(c, g))
    }

    /// Every segment at its own grade opacity, as shown in the legend.
    pub fn legend_draws(&self) -> Vec<SegmentDraw> {
        self.draws_with(|_, g| g.opacity())
    }

    fn draws_with(&self, opacity: impl Fn(Competency, GradeRank) -> f64) -> Vec<SegmentDraw> {
        let mut out = Vec::with_capacity(COMPETENCY_COUNT * GRADE_COUNT);
        for c in Competency::ALL {
            for g in GradeRank::ALL {
                out.push(SegmentDraw {
                    competency: c,
                    rank: g,
                    path: self.path(c, g).clone(),
                    fill_color: c.color(),
                    fill_opacity: opacity(c, g),
                    stroke_color: SEGMENT_STROKE,
                    stroke_width: SEGMENT_STROKE_WIDTH,
                });
            }
        }
        out
    }

    /// Grade letters sit at each ring's mid radius straight above the center,
    /// outermost (A) first.
    pub fn ring_labels(&self) -> Vec<RingLabel> {
        GradeRank::ALL
            .iter()
            .rev()
            .map(|&g| RingLabel {
                rank: g,
                anchor: polar_to_cartesian(self.center, g.ring().mid(), 0.0),
            })
            .collect()
    }
}

/// Immutable view of a session handed to exporters. Pointer hover is dropped.
#[derive(Debug, Clone)]
pub struct VisualSnapshot {
    pub level: QualificationLevel,
    pub selections: Vec<(Competency, Option<GradeRank>)>,
    pub segments: Vec<SegmentDraw>,
    pub ring_labels: Vec<RingLabel>,
}

impl VisualSnapshot {
    pub fn capture(session: &Session, geometry: &WheelGeometry) -> Self {
        let state = session.state().without_hover();
        Self {
            level: session.level(),
            selections: state.selections().collect(),
            segments: geometry.draws(&state),
            ring_labels: geometry.ring_labels(),
        }
    }
}

pub fn identity_or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn student_heading(identity: &IdentityFields) -> &str {
    identity_or_placeholder(&identity.student_name, "Student Name")
}

pub fn project_heading(identity: &IdentityFields) -> &str {
    identity_or_placeholder(&identity.project_name, "Project Name")
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/tests.rs"]
mod tests;
