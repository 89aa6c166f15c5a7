//! Interaction Routing
//!
//! Pure classification of delegated clicks and submits. The host walks the
//! DOM once to fill a [`ClickTarget`]; everything after that is plain data.

/// Substring a form action must contain to be intercepted
pub const CART_ADD_ACTION: &str = "/cart/add";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Anything but `increment` steps down
    pub fn parse(raw: &str) -> Self {
        match raw {
            "increment" => Direction::Increment,
            _ => Direction::Decrement,
        }
    }
}

/// Raw data attributes of the nearest quantity control
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityControl {
    pub line_key: Option<String>,
    pub direction: Option<String>,
    pub current_qty: Option<String>,
}

/// What the clicked element sits inside of
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickTarget {
    pub within_trigger: bool,
    pub within_close: bool,
    /// The click landed on the backdrop itself, not a descendant
    pub is_overlay: bool,
    pub quantity: Option<QuantityControl>,
}

impl ClickTarget {
    /// Any drawer control swallows the default action, even when its data is unusable
    pub fn claims_default(&self) -> bool {
        self.within_trigger || self.within_close || self.is_overlay || self.quantity.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityChange {
    pub key: String,
    pub direction: Direction,
    pub current: u32,
}

impl QuantityChange {
    /// Quantity to send; decrements floor at zero
    pub fn next_quantity(&self) -> u32 {
        next_quantity(self.direction, self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open,
    Close,
    QuantityChange(QuantityChange),
    None,
}

pub fn next_quantity(direction: Direction, current: u32) -> u32 {
    match direction {
        Direction::Increment => current.saturating_add(1),
        Direction::Decrement => current.saturating_sub(1),
    }
}

/// Trigger beats close, close beats quantity
pub fn classify_click(target: &ClickTarget) -> Action {
    if target.within_trigger {
        return Action::Open;
    }
    if target.within_close || target.is_overlay {
        return Action::Close;
    }
    match &target.quantity {
        Some(control) => parse_quantity_control(control)
            .map(Action::QuantityChange)
            .unwrap_or(Action::None),
        None => Action::None,
    }
}

fn parse_quantity_control(control: &QuantityControl) -> Option<QuantityChange> {
    let key = control.line_key.as_deref().filter(|k| !k.is_empty())?;
    let direction = Direction::parse(control.direction.as_deref().unwrap_or_default());
    let current = parse_leading_int(control.current_qty.as_deref().unwrap_or("0"))?;
    // A zero quantity line is already on its way out
    if current == 0 {
        return None;
    }
    Some(QuantityChange { key: key.to_string(), direction, current })
}

/// Leading decimal digits after optional whitespace and `+`, like `parseInt(s, 10)`.
/// Negative values are rejected.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().ok()
}

/// Whether a submitted form's `action` attribute targets the add endpoint
pub fn is_cart_add_form(action: Option<&str>) -> bool {
    action.is_some_and(|a| a.contains(CART_ADD_ACTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(key: &str, direction: &str, current: &str) -> ClickTarget {
        ClickTarget {
            quantity: Some(QuantityControl {
                line_key: Some(key.to_string()),
                direction: Some(direction.to_string()),
                current_qty: Some(current.to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_priority_order() {
        let all = ClickTarget {
            within_trigger: true,
            within_close: true,
            is_overlay: true,
            quantity: qty("k", "increment", "1").quantity,
        };
        assert_eq!(classify_click(&all), Action::Open);

        let close_and_qty = ClickTarget { within_trigger: false, ..all.clone() };
        assert_eq!(classify_click(&close_and_qty), Action::Close);

        let overlay = ClickTarget { is_overlay: true, ..Default::default() };
        assert_eq!(classify_click(&overlay), Action::Close);
    }

    #[test]
    fn test_plain_click_is_ignored() {
        let target = ClickTarget::default();
        assert_eq!(classify_click(&target), Action::None);
        assert!(!target.claims_default());
    }

    #[test]
    fn test_quantity_change() {
        let action = classify_click(&qty("42:abc", "increment", "2"));
        let Action::QuantityChange(change) = action else { panic!("expected change") };
        assert_eq!(change.key, "42:abc");
        assert_eq!(change.direction, Direction::Increment);
        assert_eq!(change.next_quantity(), 3);
    }

    #[test]
    fn test_decrement_from_one_is_zero() {
        let Action::QuantityChange(change) = classify_click(&qty("k", "decrement", "1")) else {
            panic!("expected change")
        };
        assert_eq!(change.next_quantity(), 0);
        assert_eq!(next_quantity(Direction::Decrement, 0), 0);
    }

    #[test]
    fn test_unusable_quantity_control_is_swallowed() {
        for target in [
            qty("", "increment", "1"),
            qty("k", "decrement", "0"),
            qty("k", "decrement", "-2"),
            qty("k", "decrement", "abc"),
            ClickTarget { quantity: Some(QuantityControl::default()), ..Default::default() },
        ] {
            assert_eq!(classify_click(&target), Action::None, "{:?}", target);
            assert!(target.claims_default());
        }
    }

    #[test]
    fn test_current_qty_parsed_like_parse_int() {
        let Action::QuantityChange(change) = classify_click(&qty("k", "increment", " 7 items")) else {
            panic!("expected change")
        };
        assert_eq!(change.current, 7);

        let Action::QuantityChange(signed) = classify_click(&qty("k", "increment", "+3")) else {
            panic!("expected change")
        };
        assert_eq!(signed.current, 3);
        assert_eq!(signed.next_quantity(), 4);
    }

    #[test]
    fn test_unknown_direction_decrements() {
        let Action::QuantityChange(change) = classify_click(&qty("k", "sideways", "2")) else {
            panic!("expected change")
        };
        assert_eq!(change.direction, Direction::Decrement);
        assert_eq!(change.next_quantity(), 1);
        assert_eq!(Direction::parse(""), Direction::Decrement);
    }

    #[test]
    fn test_cart_add_form_detection() {
        assert!(is_cart_add_form(Some("/cart/add")));
        assert!(is_cart_add_form(Some("/en/cart/add?section=x")));
        assert!(!is_cart_add_form(Some("/search")));
        assert!(!is_cart_add_form(Some("/cart")));
        assert!(!is_cart_add_form(None));
    }
}
