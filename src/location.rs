//! Browser Location Binding
//!
//! Reads the filter from `location.search` and records filter changes
//! with `history.pushState`.

use thiserror::Error;
use todomvc_core::route::filter_from_query;
use todomvc_core::Filter;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("window is not available")]
    NoWindow,
    #[error("failed to read location: {0}")]
    Location(String),
    #[error("failed to push history entry: {0}")]
    History(String),
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, RouteError> {
    web_sys::window().ok_or(RouteError::NoWindow)
}

/// Filter encoded in the current URL
pub fn current_filter() -> Result<Filter, RouteError> {
    let search = window()?
        .location()
        .search()
        .map_err(|e| RouteError::Location(js_message(e)))?;
    Ok(filter_from_query(&search))
}

/// Path part of the current URL, used as the base for filter links
pub fn current_path() -> Result<String, RouteError> {
    window()?
        .location()
        .pathname()
        .map_err(|e| RouteError::Location(js_message(e)))
}

/// Push a history entry for `filter` without reloading the page
pub fn navigate(filter: Filter) -> Result<(), RouteError> {
    let window = window()?;
    let path = window
        .location()
        .pathname()
        .map_err(|e| RouteError::Location(js_message(e)))?;
    let href = filter.href(&path);
    window
        .history()
        .map_err(|e| RouteError::History(js_message(e)))?
        .push_state_with_url(&JsValue::NULL, "", Some(&href))
        .map_err(|e| RouteError::History(js_message(e)))
}
