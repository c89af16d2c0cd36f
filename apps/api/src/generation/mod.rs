// Résumé generation
// Simulated backend call (latency + in-flight guard), plus export and cover letters.
// Evaluation itself lives in crate::evaluation; rendering in crate::render.

pub mod generator;
pub mod handlers;
