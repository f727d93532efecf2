//! Small helpers over `web_sys` element lookups and mutations.
//!
//! Lookups are scoped to a root element and return `None` on anything
//! missing or of the wrong type, so callers can treat every page element
//! as optional.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::{AppError, AppResult};

/// First descendant of `root` matching `selector`, cast to `T`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<T>().ok()),
        Err(e) => {
            log::warn!("Invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// Every descendant of `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Invalid selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) -> AppResult<()> {
    el.class_list()
        .add_1(class)
        .map_err(|e| AppError::dom("classList.add", e))
}

pub fn remove_class(el: &Element, class: &str) -> AppResult<()> {
    el.class_list()
        .remove_1(class)
        .map_err(|e| AppError::dom("classList.remove", e))
}

/// Set the inline `display` style.
pub fn set_display(el: &HtmlElement, value: &str) -> AppResult<()> {
    el.style()
        .set_property("display", value)
        .map_err(|e| AppError::dom("style.display", e))
}

/// Set or clear the `required` flag on any form control.
pub fn set_required(el: &Element, required: bool) -> AppResult<()> {
    if required {
        el.set_attribute("required", "")
            .map_err(|e| AppError::dom("setAttribute(required)", e))
    } else {
        el.remove_attribute("required")
            .map_err(|e| AppError::dom("removeAttribute(required)", e))
    }
}

/// Log a failed mutation and carry on with the caller's remaining work.
pub fn or_warn(result: AppResult<()>, context: &str) {
    if let Err(e) = result {
        log::warn!("{}: {}", context, e);
    }
}
