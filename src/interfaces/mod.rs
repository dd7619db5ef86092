// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod amount_input;

pub use amount_input::AmountInput;
