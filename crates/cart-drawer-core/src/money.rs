//! Money Formatting
//!
//! Prices arrive in minor units. Locale-aware formatting is the host's job
//! (Intl.NumberFormat in the browser); this module only fixes the contract.

/// Converts minor units (cents) to the major-unit value handed to formatters
pub fn minor_to_major(minor: i64) -> f64 {
    minor as f64 / 100.0
}

/// Formats an amount in the drawer's configured currency
pub trait MoneyFormat {
    /// `major` is already divided by 100
    fn format_major(&self, major: f64) -> String;

    fn format_minor(&self, minor: i64) -> String {
        self.format_major(minor_to_major(minor))
    }
}
