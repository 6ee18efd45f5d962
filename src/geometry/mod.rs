//! Annular-sector geometry for the assessment wheel.
//!
//! Angles are configured in degrees with 0 at the visual top of the wheel and
//! increasing clockwise. The fixed rotation offset maps that convention onto
//! SVG's trigonometric frame, where 0 points right and y grows downward.

use std::fmt::Write;

pub const ROTATION_OFFSET_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angular span `[start_deg, end_deg)` of one sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpan {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl SectorSpan {
    pub const fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn is_large_arc(&self) -> bool {
        self.sweep_deg() > 180.0
    }
}

/// Radial extent of one ring. An inner radius of zero makes the ring a disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    pub inner: f64,
    pub outer: f64,
}

impl RingBounds {
    pub const fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    pub fn is_disk(&self) -> bool {
        self.inner == 0.0
    }

    pub fn mid(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPath {
    commands: Vec<PathCommand>,
}

impl SegmentPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Pen position after every command has run. `Close` returns the pen to
    /// the start of the current subpath.
    pub fn end_point(&self) -> Option<Point> {
        let mut subpath_start = None;
        let mut pen = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(p);
                    pen = Some(p);
                }
                PathCommand::LineTo(p) => pen = Some(p),
                PathCommand::ArcTo { to, .. } => pen = Some(to),
                PathCommand::Close => pen = subpath_start,
            }
        }
        pen
    }

    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    pub fn to_svg_d(&self) -> String {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M {} {}", format_coord(p.x), format_coord(p.y));
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L {} {}", format_coord(p.x), format_coord(p.y));
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let r = format_coord(radius);
                    let _ = write!(
                        out,
                        "A {r} {r} 0 {} {} {} {}",
                        u8::from(large_arc),
                        u8::from(sweep),
                        format_coord(to.x),
                        format_coord(to.y)
                    );
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

pub fn format_coord(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg + ROTATION_OFFSET_DEG).to_radians();
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

/// Builds the closed outline of one (sector, ring) segment.
///
/// Works the same for an origin-centered frame and a translated wheel. Corner
/// points go through `polar_to_cartesian`, so rings that share a boundary
/// radius produce bit-identical endpoints.
pub fn segment_path(center: Point, span: SectorSpan, ring: RingBounds) -> SegmentPath {
    let outer_start = polar_to_cartesian(center, ring.outer, span.start_deg);
    let outer_end = polar_to_cartesian(center, ring.outer, span.end_deg);
    let large_arc = span.is_large_arc();

    let outer_arc = PathCommand::ArcTo {
        radius: ring.outer,
        large_arc,
        sweep: true,
        to: outer_end,
    };

    if ring.is_disk() {
        return SegmentPath {
            commands: vec![
                PathCommand::MoveTo(center),
                PathCommand::LineTo(outer_start),
                outer_arc,
                PathCommand::Close,
            ],
        };
    }

    let inner_start = polar_to_cartesian(center, ring.inner, span.start_deg);
    let inner_end = polar_to_cartesian(center, ring.inner, span.end_deg);

    SegmentPath {
        commands: vec![
            PathCommand::MoveTo(inner_start),
            PathCommand::LineTo(outer_start),
            outer_arc,
            PathCommand::LineTo(inner_end),
            PathCommand::ArcTo {
                radius: ring.inner,
                large_arc,
                sweep: false,
                to: inner_start,
            },
            PathCommand::Close,
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/geometry/tests.rs"]
mod tests;
