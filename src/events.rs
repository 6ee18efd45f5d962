//! Line-oriented evaluator events, replayed against a `Session`.
//!
//! Each line mirrors one pointer or form action at the presentation boundary:
//!
//! ```text
//! # comment
//! student Jane Doe
//! level 6
//! hover research B
//! set research B
//! leave
//! export
//! ```

use crate::model::competency::UnknownCompetency;
use crate::model::grade::InvalidGrade;
use crate::model::{Competency, GradeRank, Session};
use crate::rubric::{QualificationLevel, UnknownLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Activate(Competency, GradeRank),
    HoverEnter(Competency, GradeRank),
    HoverLeave,
    ClearAll,
    Level(QualificationLevel),
    Student(String),
    Project(String),
    Feedback(String),
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Competency(#[from] UnknownCompetency),
    #[error(transparent)]
    Grade(#[from] InvalidGrade),
    #[error(transparent)]
    Level(#[from] UnknownLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    HoverIgnored,
    ExportRequested,
}

fn segment_args(
    command: &'static str,
    rest: &str,
) -> Result<(Competency, GradeRank), EventParseError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(c), Some(g)) => Ok((c.parse()?, g.parse()?)),
        _ => Err(EventParseError::MissingArgument {
            command,
            expected: "<competency> <grade>",
        }),
    }
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_event(line: &str) -> Result<Option<SessionEvent>, EventParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "set" => {
            let (c, g) = segment_args("set", rest)?;
            SessionEvent::Activate(c, g)
        }
        "hover" => {
            let (c, g) = segment_args("hover", rest)?;
            SessionEvent::HoverEnter(c, g)
        }
        "leave" => SessionEvent::HoverLeave,
        "clear" => SessionEvent::ClearAll,
        "export" => SessionEvent::Export,
        "level" => {
            if rest.is_empty() {
                return Err(EventParseError::MissingArgument {
                    command: "level",
                    expected: "5|6",
                });
            }
            SessionEvent::Level(rest.parse()?)
        }
        "student" => SessionEvent::Student(rest.to_string()),
        "project" => SessionEvent::Project(rest.to_string()),
        "feedback" => SessionEvent::Feedback(rest.to_string()),
        _ => return Err(EventParseError::UnknownCommand(command.to_string())),
    };
    Ok(Some(event))
}

pub fn apply_event(session: &mut Session, event: &SessionEvent) -> EventOutcome {
    match event {
        SessionEvent::Activate(c, g) => session.activate_segment(*c, *g),
        SessionEvent::HoverEnter(c, g) => {
            if !session.hover_enter(*c, *g) {
                return EventOutcome::HoverIgnored;
            }
        }
        SessionEvent::HoverLeave => session.hover_leave(),
        SessionEvent::ClearAll => session.clear_all(),
        SessionEvent::Level(level) => session.set_level(*level),
        SessionEvent::Student(name) => session.set_student_name(name),
        SessionEvent::Project(name) => session.set_project_name(name),
        SessionEvent::Feedback(text) => session.set_feedback(text),
        SessionEvent::Export => return EventOutcome::ExportRequested,
    }
    EventOutcome::Applied
}

#[cfg(test)]
#[path = "../tests/src_inline/events.rs"]
mod tests;
