pub mod filters;
pub mod gesture;
pub mod queue;
