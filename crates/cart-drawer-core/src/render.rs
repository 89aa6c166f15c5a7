//! Render Planning
//!
//! Turns a [`Cart`] into the exact text and visibility decisions the drawer
//! markup needs. Painting the plan is left to the [`DrawerView`](crate::DrawerView).

use crate::domain::{Cart, LineItem};
use crate::money::MoneyFormat;

/// Variant label the storefront uses for products without variants
pub const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// What the items area should show
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsPlan {
    /// Show the empty-state placeholder, clear and hide the list
    Empty,
    /// Hide the placeholder and replace the list with these rows
    Lines(Vec<LineView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub items: ItemsPlan,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineImage {
    pub src: String,
    pub alt: String,
}

/// Fully formatted line row
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub key: String,
    /// `None` hides the image element
    pub image: Option<LineImage>,
    pub title: String,
    /// `None` hides the variant label
    pub variant: Option<String>,
    pub quantity: u32,
    pub price: String,
    /// Strikethrough price, only when on sale
    pub original_price: Option<String>,
}

impl RenderPlan {
    pub fn for_cart(cart: &Cart, money: &dyn MoneyFormat, max_lines: usize) -> Self {
        let items = if cart.items.is_empty() {
            ItemsPlan::Empty
        } else {
            ItemsPlan::Lines(
                cart.items
                    .iter()
                    .take(max_lines)
                    .map(|item| LineView::for_item(item, money))
                    .collect(),
            )
        };

        Self {
            items,
            subtotal: money.format_minor(cart.total_price),
        }
    }

    pub fn line_count(&self) -> usize {
        match &self.items {
            ItemsPlan::Empty => 0,
            ItemsPlan::Lines(lines) => lines.len(),
        }
    }
}

impl LineView {
    pub fn for_item(item: &LineItem, money: &dyn MoneyFormat) -> Self {
        let title = item.display_title().to_string();

        let image = item
            .image
            .as_deref()
            .filter(|src| !src.is_empty())
            .map(|src| LineImage { src: src.to_string(), alt: title.clone() });

        let variant = item
            .variant_title
            .as_deref()
            .filter(|v| !v.is_empty() && *v != DEFAULT_VARIANT_TITLE)
            .map(str::to_string);

        let original_price = match item.original_line_price {
            Some(original) if item.on_sale() => Some(money.format_minor(original)),
            _ => None,
        };

        Self {
            key: item.key.clone(),
            image,
            title,
            variant,
            quantity: item.quantity,
            price: money.format_minor(item.effective_price()),
            original_price,
        }
    }
}
