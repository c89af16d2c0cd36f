// Profile import
// Mock LinkedIn source only; the widget fills the form from the returned submission.

pub mod handlers;
pub mod linkedin;
