pub mod competency;
pub mod grade;
pub mod session;
pub mod state;

pub use competency::Competency;
pub use grade::GradeRank;
pub use session::{IdentityFields, Session};
pub use state::{AssessmentState, HoverPointer};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
