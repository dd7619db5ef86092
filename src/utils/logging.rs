// ============================================================================
// Logging Setup
// Formatted tracing output for demos and manual runs
// ============================================================================

use tracing::Level;

/// Install a global formatted subscriber printing events up to `level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_once() {
        init(Level::TRACE);
        // A second installation always fails
        assert!(!init(Level::DEBUG));
    }
}
