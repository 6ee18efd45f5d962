use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::geometry::RingBounds;

pub const GRADE_COUNT: usize = 5;

/// Ordinal grade, lowest first. The discriminant is the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GradeRank {
    F = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
}

#[derive(Debug, Clone, Copy)]
pub struct GradeDef {
    pub letter: char,
    pub opacity: f64,
    pub ring: RingBounds,
}

const GRADE_DEFS: [GradeDef; GRADE_COUNT] = [
    GradeDef {
        letter: 'F',
        opacity: 0.15,
        ring: RingBounds::new(0.0, 100.0),
    },
    GradeDef {
        letter: 'D',
        opacity: 0.35,
        ring: RingBounds::new(100.0, 200.0),
    },
    GradeDef {
        letter: 'C',
        opacity: 0.50,
        ring: RingBounds::new(200.0, 300.0),
    },
    GradeDef {
        letter: 'B',
        opacity: 0.70,
        ring: RingBounds::new(300.0, 400.0),
    },
    GradeDef {
        letter: 'A',
        opacity: 1.0,
        ring: RingBounds::new(400.0, 500.0),
    },
];

impl GradeRank {
    pub const ALL: [GradeRank; GRADE_COUNT] = [
        GradeRank::F,
        GradeRank::D,
        GradeRank::C,
        GradeRank::B,
        GradeRank::A,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|g| g.letter() == upper)
    }

    pub fn def(self) -> &'static GradeDef {
        &GRADE_DEFS[self.index()]
    }

    pub fn letter(self) -> char {
        self.def().letter
    }

    pub fn opacity(self) -> f64 {
        self.def().opacity
    }

    pub fn ring(self) -> RingBounds {
        self.def().ring
    }

    /// Outermost ring radius of the wheel.
    pub fn max_radius() -> f64 {
        GradeRank::A.ring().outer
    }
}

impl fmt::Display for GradeRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid grade '{0}' (use F|D|C|B|A or 0-4)")]
pub struct InvalidGrade(pub String);

impl FromStr for GradeRank {
    type Err = InvalidGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => {
                c.to_digit(10).and_then(|d| Self::from_index(d as usize))
            }
            (Some(c), None) => Self::from_letter(c),
            _ => None,
        };
        parsed.ok_or_else(|| InvalidGrade(s.to_string()))
    }
}
