use std::fmt::Write;

use crate::geometry::{Point, format_coord};
use crate::model::{Competency, GradeRank, IdentityFields};
use crate::render::{
    RingLabel, SegmentDraw, VisualSnapshot, WHEEL_VIEWBOX, WheelGeometry, project_heading,
    student_heading,
};

pub const LABEL_FILL: &str = "#171729";
pub const EXPORT_PAGE_SIZE: f64 = 1000.0;
const EXPORT_WHEEL_SIZE: f64 = 750.0;

pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_segments(out: &mut String, segments: &[SegmentDraw]) {
    for seg in segments {
        let _ = writeln!(
            out,
            r#"<path data-competency="{}" data-grade="{}" d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
            seg.competency.key(),
            seg.rank.letter(),
            seg.path.to_svg_d(),
            seg.fill_color,
            format_coord(seg.fill_opacity),
            seg.stroke_color,
            format_coord(seg.stroke_width),
        );
    }
}

fn push_ring_labels(out: &mut String, labels: &[RingLabel]) {
    out.push_str("<g class=\"ring-labels\" pointer-events=\"none\">\n");
    for label in labels {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16" font-weight="bold" fill="{}">{}</text>"#,
            format_coord(label.anchor.x),
            format_coord(label.anchor.y),
            LABEL_FILL,
            label.rank.letter(),
        );
    }
    out.push_str("</g>\n");
}

fn push_text(out: &mut String, at: Point, size: u32, bold: bool, fill: &str, text: &str) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="Arial, sans-serif" font-size="{size}"{weight} fill="{fill}">{}</text>"#,
        format_coord(at.x),
        format_coord(at.y),
        escape_xml(text),
    );
}

/// The interactive wheel: 25 segments and the grade letters.
pub fn render_wheel_svg(segments: &[SegmentDraw], labels: &[RingLabel]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#,
        size = format_coord(WHEEL_VIEWBOX),
    );
    push_segments(&mut out, segments);
    push_ring_labels(&mut out, labels);
    out.push_str("</svg>\n");
    out
}

pub fn legend_line() -> String {
    Competency::ALL
        .iter()
        .map(|c| format!("{}: {}", c.color_name(), c.label()))
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// Printable page: identity header, scaled wheel, color legend and a date line.
pub fn render_export_page(snapshot: &VisualSnapshot, identity: &IdentityFields) -> String {
    let page = format_coord(EXPORT_PAGE_SIZE);
    let center_x = EXPORT_PAGE_SIZE / 2.0;
    let scale = EXPORT_WHEEL_SIZE / WHEEL_VIEWBOX;
    let wheel_left = (EXPORT_PAGE_SIZE - EXPORT_WHEEL_SIZE) / 2.0;
    let wheel_top = 160.0;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {page} {page}" width="{page}" height="{page}">"#,
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{page}" height="{page}" fill="white"/>"#
    );

    push_text(
        &mut out,
        Point::new(center_x, 68.0),
        28,
        true,
        LABEL_FILL,
        student_heading(identity),
    );
    push_text(
        &mut out,
        Point::new(center_x, 108.0),
        20,
        false,
        LABEL_FILL,
        project_heading(identity),
    );
    push_text(
        &mut out,
        Point::new(center_x, 138.0),
        14,
        false,
        "#666",
        snapshot.level.title(),
    );

    let _ = writeln!(
        out,
        r#"<g transform="translate({} {}) scale({})">"#,
        format_coord(wheel_left),
        format_coord(wheel_top),
        format_coord(scale),
    );
    push_segments(&mut out, &snapshot.segments);
    push_ring_labels(&mut out, &snapshot.ring_labels);
    out.push_str("</g>\n");

    let legend_y = wheel_top + EXPORT_WHEEL_SIZE + 30.0;
    push_text(
        &mut out,
        Point::new(center_x, legend_y),
        14,
        false,
        LABEL_FILL,
        &legend_line(),
    );
    push_text(
        &mut out,
        Point::new(center_x, legend_y + 40.0),
        18,
        false,
        LABEL_FILL,
        "Date: ________________________",
    );

    out.push_str("</svg>\n");
    out
}

/// Stand-alone key drawn around the origin with every ring at its own opacity.
pub fn render_legend_svg() -> String {
    let geometry = WheelGeometry::new(Point::ORIGIN);
    let extent = GradeRank::max_radius() + 10.0;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min} {min} {size} {size}">"#,
        min = format_coord(-extent),
        size = format_coord(extent * 2.0),
    );
    push_segments(&mut out, &geometry.legend_draws());
    push_ring_labels(&mut out, &geometry.ring_labels());
    out.push_str("</svg>\n");
    out
}
