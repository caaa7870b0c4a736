/// Plain-text rendering of configs and timetables
pub mod render;
/// Input validation helpers
pub mod validation;
