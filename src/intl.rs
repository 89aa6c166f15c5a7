//! Intl Money Formatter
//!
//! Wraps one `Intl.NumberFormat` built for the shop currency with the
//! browser's default locale.

use cart_drawer_core::{CurrencyCode, MoneyFormat};
use js_sys::{Array, Function, Intl, Object, Reflect};
use log::warn;
use wasm_bindgen::JsValue;

pub struct IntlMoney {
    format: Function,
    currency: CurrencyCode,
}

impl IntlMoney {
    pub fn new(currency: &CurrencyCode) -> Self {
        let options = Object::new();
        for (key, value) in [("style", "currency"), ("currency", currency.as_str())] {
            // without these the formatter prints bare decimals
            if let Err(err) = Reflect::set(&options, &key.into(), &value.into()) {
                warn!("Intl option {}={} not set: {:?}", key, value, err);
            }
        }
        let formatter = Intl::NumberFormat::new(&Array::new(), &options);
        Self {
            format: formatter.format(),
            currency: currency.clone(),
        }
    }
}

impl MoneyFormat for IntlMoney {
    fn format_major(&self, major: f64) -> String {
        self.format
            .call1(&JsValue::NULL, &JsValue::from_f64(major))
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| format!("{} {:.2}", self.currency, major))
    }
}
