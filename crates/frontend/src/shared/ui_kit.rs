//! Доступ к UI-библиотеке страницы (подсказки, модальные окна).
//!
//! Логика панели знает только о трейте [`UiKit`]. Если на странице
//! подключен Bootstrap, используется [`BootstrapKit`], иначе
//! [`PlainKit`], который переключает классы сам.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub trait UiKit {
    fn init_tooltip(&self, el: &Element);
    fn show_modal(&self, el: &Element);
    fn hide_modal(&self, el: &Element);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
    fn new(el: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(el: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

/// Bootstrap 5, подключенный на странице глобально
pub struct BootstrapKit;

impl UiKit for BootstrapKit {
    fn init_tooltip(&self, el: &Element) {
        if let Err(e) = Tooltip::new(el) {
            log::warn!("Не удалось создать tooltip: {:?}", e);
        }
    }

    fn show_modal(&self, el: &Element) {
        match Modal::get_or_create_instance(el) {
            Ok(modal) => modal.show(),
            Err(e) => log::warn!("Не удалось открыть модальное окно: {:?}", e),
        }
    }

    fn hide_modal(&self, el: &Element) {
        match Modal::get_or_create_instance(el) {
            Ok(modal) => modal.hide(),
            Err(e) => log::warn!("Не удалось закрыть модальное окно: {:?}", e),
        }
    }
}

/// Запасной вариант без Bootstrap: подсказки из `title`, окна через класс `show`
pub struct PlainKit;

impl UiKit for PlainKit {
    fn init_tooltip(&self, _el: &Element) {}

    fn show_modal(&self, el: &Element) {
        let _ = el.class_list().add_1("show");
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("display", "block");
        }
    }

    fn hide_modal(&self, el: &Element) {
        let _ = el.class_list().remove_1("show");
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("display", "none");
        }
        // Bootstrap шлет это событие сам; без него форма окна не сбросится
        if let Ok(event) = web_sys::Event::new("hidden.bs.modal") {
            let _ = el.dispatch_event(&event);
        }
    }
}

/// Выбирает реализацию по наличию глобального `bootstrap`
pub fn detect() -> Rc<dyn UiKit> {
    let has_bootstrap = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .unwrap_or(false);
    if has_bootstrap {
        log::debug!("UI kit: bootstrap");
        Rc::new(BootstrapKit)
    } else {
        log::info!("Bootstrap не найден, модальные окна работают без анимаций");
        Rc::new(PlainKit)
    }
}
