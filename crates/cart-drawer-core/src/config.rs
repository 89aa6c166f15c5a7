//! Drawer Configuration
//!
//! Built once at startup. Only the currency code comes from the markup;
//! everything else is fixed by the storefront contract.

use std::fmt;
use std::time::Duration;

/// Currency used when the panel does not carry a usable code
pub const FALLBACK_CURRENCY: &str = "USD";

/// Delay after which a close finalizes even without a transition-end signal
pub const CLOSE_FALLBACK: Duration = Duration::from_millis(220);

/// Rendered rows are capped at this many lines
pub const MAX_RENDERED_LINES: usize = 10;

/// Full-page fallback target
pub const CART_PAGE: &str = "/cart";

/// ISO 4217 style code: three ASCII letters, upper-cased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(raw.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(FALLBACK_CURRENCY.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    pub currency: CurrencyCode,
    pub close_fallback: Duration,
    pub max_rendered_lines: usize,
    pub cart_page: &'static str,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            close_fallback: CLOSE_FALLBACK,
            max_rendered_lines: MAX_RENDERED_LINES,
            cart_page: CART_PAGE,
        }
    }
}

impl DrawerConfig {
    /// Build from the panel's currency attribute (absent panel or attribute = fallback)
    pub fn from_currency_attr(attr: Option<&str>) -> Self {
        let currency = match attr {
            Some(raw) => CurrencyCode::parse(raw).unwrap_or_else(|| {
                log::warn!("ignoring invalid shop currency {:?}, using {}", raw, FALLBACK_CURRENCY);
                CurrencyCode::default()
            }),
            None => CurrencyCode::default(),
        };
        Self { currency, ..Self::default() }
    }
}
