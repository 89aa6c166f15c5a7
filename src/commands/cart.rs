//! Cart Endpoint Commands
//!
//! `fetch` wrappers for `/cart.js`, `/cart/add.js` and `/cart/change.js`.
//! Every request is same-origin and asks for JSON.

use async_trait::async_trait;
use cart_drawer_core::{CartApi, CartOperation, CartPayload, ChangeLine, DrawerError, DrawerResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestCredentials, RequestInit, Response, Window};

pub struct FetchCartApi {
    window: Window,
}

impl FetchCartApi {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Send one request and return the body text of a successful response
    async fn send(&self, operation: CartOperation, body: Option<&JsValue>, json_body: bool) -> DrawerResult<String> {
        let network = |err: JsValue| DrawerError::Network { operation, message: js_message(&err) };

        let headers = Headers::new().map_err(network)?;
        headers.set("Accept", "application/json").map_err(network)?;
        if json_body {
            headers.set("Content-Type", "application/json").map_err(network)?;
        }

        let init = RequestInit::new();
        init.set_method(operation.method());
        init.set_credentials(RequestCredentials::SameOrigin);
        init.set_headers(&headers);
        if let Some(body) = body {
            init.set_body(body);
        }

        let request = Request::new_with_str_and_init(operation.endpoint(), &init).map_err(network)?;
        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        if !response.ok() {
            return Err(DrawerError::HttpStatus { operation, status: response.status() });
        }

        let text = JsFuture::from(response.text().map_err(network)?).await.map_err(network)?;
        text.as_string().ok_or_else(|| DrawerError::InvalidJson {
            operation,
            message: "response body is not text".to_string(),
        })
    }
}

#[async_trait(?Send)]
impl CartApi for FetchCartApi {
    type Form = FormData;

    async fn read_cart(&self) -> DrawerResult<CartPayload> {
        let body = self.send(CartOperation::Read, None, false).await?;
        CartPayload::parse(CartOperation::Read, &body)
    }

    async fn add_items(&self, form: &FormData) -> DrawerResult<()> {
        let fields: &JsValue = form.as_ref();
        let body = self.send(CartOperation::Add, Some(fields), false).await?;
        CartPayload::parse(CartOperation::Add, &body).map(|_| ())
    }

    async fn change_line(&self, change: &ChangeLine<'_>) -> DrawerResult<CartPayload> {
        let json = serde_json::to_string(change).map_err(|e| DrawerError::Network {
            operation: CartOperation::Change,
            message: e.to_string(),
        })?;
        let body = self
            .send(CartOperation::Change, Some(&JsValue::from_str(&json)), true)
            .await?;
        CartPayload::parse(CartOperation::Change, &body)
    }
}

fn js_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
