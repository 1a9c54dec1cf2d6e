//! Page Bootstrap
//!
//! The server embeds the page state as JSON in
//! `<script type="application/json" id="qa-page-data">`.

use wasm_bindgen::JsCast;

use crate::error::PageDataError;
use crate::models::PageData;

pub const PAGE_DATA_ID: &str = "qa-page-data";
pub const MOUNT_ID: &str = "qa-app";

pub fn parse_page_data(raw: &str) -> Result<PageData, PageDataError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_page_data() -> Result<PageData, PageDataError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PageDataError::NoDocument)?;
    let script = document
        .get_element_by_id(PAGE_DATA_ID)
        .ok_or(PageDataError::Missing(PAGE_DATA_ID))?;
    parse_page_data(&script.text_content().unwrap_or_default())
}

/// Dedicated mount element, if the page has one
pub fn mount_point() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
