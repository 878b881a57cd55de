//! Короткие обертки над web_sys для работы с серверной разметкой

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// Все элементы документа или поддерева, подходящие под селектор
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Vec<Element> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector_all(selector).ok()
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector_all(selector).ok()
    } else {
        None
    };
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Ближайший предок (включая сам элемент), подходящий под селектор
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Значение атрибута `data-*`; пустое значение считается отсутствующим
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
        .filter(|v| !v.is_empty())
}

/// Значение атрибута в селекторе `[attr="..."]`
pub fn attr_selector(attr: &str, value: &str) -> String {
    format!("[{}=\"{}\"]", attr, css_escape_value(value))
}

fn css_escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn set_display(el: &Element, visible: bool) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("display", if visible { "" } else { "none" });
    }
}

pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            log::warn!("Не удалось перезагрузить страницу: {:?}", e);
        }
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn prompt(message: &str) -> Option<String> {
    window().and_then(|w| w.prompt_with_message(message).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_selector() {
        assert_eq!(attr_selector("data-order-id", "15"), "[data-order-id=\"15\"]");
        assert_eq!(attr_selector("data-order-id", "a\"b"), "[data-order-id=\"a\\\"b\"]");
    }
}
