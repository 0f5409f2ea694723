pub mod assessments;
pub mod challenges;
