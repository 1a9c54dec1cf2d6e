//! HTTP Transport
//!
//! Background form submission. Handlers only see the [`Transport`] trait;
//! the browser implementation goes through `fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::TransportError;
use crate::form::FormFields;

pub const NO_CONTENT: u16 = 204;
pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// POST `fields` urlencoded to `url`. Any HTTP status is `Ok`; `Err` means no response at all.
    async fn post_form(&self, url: &str, fields: &FormFields) -> Result<HttpResponse, TransportError>;
}

/// `window.fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_form(&self, url: &str, fields: &FormFields) -> Result<HttpResponse, TransportError> {
        let window = web_sys::window().ok_or(TransportError::NoWindow)?;

        let headers = web_sys::Headers::new().map_err(|e| TransportError::Request(js_message(e)))?;
        headers
            .set("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
            .map_err(|e| TransportError::Request(js_message(e)))?;
        // Lets the server tell background submissions from page navigations
        headers
            .set("X-Requested-With", "XMLHttpRequest")
            .map_err(|e| TransportError::Request(js_message(e)))?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&fields.encode()));

        let request = web_sys::Request::new_with_str_and_init(url, &init)
            .map_err(|e| TransportError::Request(js_message(e)))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TransportError::Network(js_message(e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|v| TransportError::Network(js_message(v)))?;

        let status = response.status();
        let text = response.text().map_err(|e| TransportError::Body(js_message(e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| TransportError::Body(js_message(e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

fn js_message(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
