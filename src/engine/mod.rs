// ============================================================================
// Engine Module
// Public conversion surface built on the parser and renderer
// ============================================================================

mod check_writer;

pub use check_writer::{CheckWriter, CheckWriterBuilder};
