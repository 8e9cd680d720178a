pub mod analyze;
pub mod template;
