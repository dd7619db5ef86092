// ============================================================================
// Render Module
// English check words for validated amounts
// ============================================================================

mod renderer;
pub mod words;

pub use renderer::{render, render_group};
