pub mod evaluation;
pub mod form;
pub mod submission;
