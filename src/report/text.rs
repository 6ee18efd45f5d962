use crate::report::json::AssessmentSummary;
use crate::rubric::NOT_ASSESSED;

pub fn render_status_text(summary: &AssessmentSummary) -> String {
    let mut out = String::new();

    out.push_str("Assessment Status\n");
    out.push_str("=================\n\n");

    out.push_str(&format!("Student: {}\n", or_dash(&summary.student_name)));
    out.push_str(&format!("Project: {}\n", or_dash(&summary.project_name)));
    out.push_str(&format!("Qualification: {}\n", summary.qualification_level));
    out.push_str(&format!(
        "Assessed: {}/{}{}\n\n",
        summary.assessed_count,
        summary.competencies.len(),
        if summary.fully_assessed {
            " (complete)"
        } else {
            ""
        }
    ));

    for (i, c) in summary.competencies.iter().enumerate() {
        let grade = c
            .grade
            .map(|g| g.letter().to_string())
            .unwrap_or_else(|| NOT_ASSESSED.to_string());
        out.push_str(&format!("{}. {} [{}]: {}\n", i + 1, c.label, c.color, grade));
        for line in wrap(c.description, 76) {
            out.push_str(&format!("   {}\n", line));
        }
        out.push('\n');
    }

    if !summary.feedback.trim().is_empty() {
        out.push_str("Feedback\n");
        out.push_str("--------\n");
        out.push_str(summary.feedback.trim());
        out.push('\n');
    }

    out
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
