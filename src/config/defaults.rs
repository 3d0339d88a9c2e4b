//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Aggregate Defaults
// =============================================================================

pub fn default_order() -> String {
    "unsorted".to_string()
}

// =============================================================================
// Output Defaults
// =============================================================================

pub fn default_presentation() -> String {
    "string".to_string()
}

// =============================================================================
// Bench Defaults
// =============================================================================

pub fn default_iterations() -> u32 {
    1
}

// =============================================================================
// Log Defaults
// =============================================================================

pub fn default_log_level() -> String {
    "info".to_string()
}
