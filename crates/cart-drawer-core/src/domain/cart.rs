//! Cart Entities
//!
//! The cart is owned by the server. The drawer only ever reads it.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::error::{CartOperation, DrawerError, DrawerResult};

/// Server-side cart at the time of the last successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<LineItem>,
    /// Minor currency units
    pub total_price: i64,
}

/// One product/variant entry of the cart
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub key: String,
    pub quantity: u32,
    pub title: Option<String>,
    pub product_title: Option<String>,
    pub variant_title: Option<String>,
    pub image: Option<String>,
    pub line_price: i64,
    /// Present only when a discount applies
    pub original_line_price: Option<i64>,
    /// Present only when a discount applies
    pub final_line_price: Option<i64>,
}

impl LineItem {
    /// Product title, falling back to the line title
    pub fn display_title(&self) -> &str {
        non_empty(self.product_title.as_deref())
            .or_else(|| non_empty(self.title.as_deref()))
            .unwrap_or("")
    }

    pub fn on_sale(&self) -> bool {
        matches!(
            (self.original_line_price, self.final_line_price),
            (Some(original), Some(final_price)) if original > final_price
        )
    }

    /// Final price when on sale, otherwise the line price
    pub fn effective_price(&self) -> i64 {
        match self.final_line_price {
            Some(final_price) if self.on_sale() => final_price,
            _ => self.line_price,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Raw JSON body returned by a cart endpoint.
///
/// Any well-formed JSON is a payload; it only becomes a [`Cart`] when its
/// `items` field is an array of line objects.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPayload(Value);

impl CartPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse the response body of `operation`
    pub fn parse(operation: CartOperation, body: &str) -> DrawerResult<Self> {
        serde_json::from_str(body)
            .map(Self)
            .map_err(|e| DrawerError::InvalidJson { operation, message: e.to_string() })
    }

    /// Lines that do not deserialize are skipped so the rest still render
    pub fn cart(&self) -> DrawerResult<Cart> {
        let lines = match self.0.get("items") {
            Some(Value::Array(lines)) => lines,
            Some(_) => {
                return Err(DrawerError::MalformedCartPayload(
                    "`items` is not an array".to_string(),
                ))
            }
            None => {
                return Err(DrawerError::MalformedCartPayload(
                    "missing `items`".to_string(),
                ))
            }
        };

        let items = lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| match LineItem::deserialize(line) {
                Ok(item) => Some(item),
                Err(err) => {
                    debug!("skipping cart line {}: {}", index, err);
                    None
                }
            })
            .collect();

        let total_price = match self.0.get("total_price") {
            None | Some(Value::Null) => 0,
            Some(total) => i64::deserialize(total).map_err(|e| DrawerError::MalformedCartPayload(e.to_string()))?,
        };

        Ok(Cart { items, total_price })
    }
}
