//! Админ-панель заказов: инициализация страницы и общий контекст обработчиков.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement};

use crate::routes;
use crate::shared::ajax_form::submit_ajax_form;
use crate::shared::api_utils::set_api_base;
use crate::shared::config::PanelConfig;
use crate::shared::dom;
use crate::shared::notifications;
use crate::shared::table_utils::prepare_sortable_headers;
use crate::shared::ui_kit::{self, UiKit};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Общее для всех обработчиков страницы
pub struct PanelContext {
    pub config: PanelConfig,
    pub kit: Rc<dyn UiKit>,
}

pub struct AdminPanel {
    ctx: Rc<PanelContext>,
}

impl AdminPanel {
    pub fn new(config: PanelConfig, kit: Rc<dyn UiKit>) -> Self {
        set_api_base(&config.api_base);
        notifications::set_ttl_ms(config.notification_ttl_ms);
        Self {
            ctx: Rc::new(PanelContext { config, kit }),
        }
    }

    /// Подключает компоненты страницы и маршрутизатор событий
    pub fn init(&self) {
        let Some(document) = dom::document() else {
            log::error!("document недоступен, панель не запущена");
            return;
        };

        self.setup_tooltips(&document);
        self.setup_modals(&document);
        prepare_sortable_headers(&document);
        self.setup_forms(&document);
        routes::install(self.ctx.clone());

        log::info!("Админ-панель готова");
    }

    fn setup_tooltips(&self, document: &web_sys::Document) {
        for el in dom::query_all(document, "[data-bs-toggle=\"tooltip\"]") {
            self.ctx.kit.init_tooltip(&el);
        }
    }

    /// Форма модального окна очищается при его закрытии
    fn setup_modals(&self, document: &web_sys::Document) {
        for modal in dom::query_all(document, ".modal") {
            let modal_for_reset = modal.clone();
            let on_hidden = Closure::wrap(Box::new(move |_: Event| {
                if let Some(form) = modal_for_reset
                    .query_selector("form")
                    .ok()
                    .flatten()
                    .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
                {
                    form.reset();
                }
            }) as Box<dyn FnMut(Event)>);

            let _ = modal
                .add_event_listener_with_callback("hidden.bs.modal", on_hidden.as_ref().unchecked_ref());
            on_hidden.forget();
        }
    }

    fn setup_forms(&self, document: &web_sys::Document) {
        for el in dom::query_all(document, "form[data-ajax]") {
            let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
                continue;
            };
            let ctx = self.ctx.clone();
            let form_for_submit = form.clone();
            let on_submit = Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                spawn_local(submit_ajax_form(ctx.clone(), form_for_submit.clone()));
            }) as Box<dyn FnMut(Event)>);

            let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
            on_submit.forget();
        }
    }
}

/// Запускает панель после разбора документа; повторный вызов игнорируется
pub fn run_when_ready(config: PanelConfig) {
    if STARTED.with(|s| s.replace(true)) {
        log::warn!("Админ-панель уже запущена");
        return;
    }
    let Some(document) = dom::document() else {
        return;
    };

    let boot = move || AdminPanel::new(config, ui_kit::detect()).init();

    if is_loading_state(&document.ready_state()) {
        let on_ready = Closure::once_into_js(boot);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        boot();
    }
}

/// `document.readyState` еще не дошел до `interactive`
fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_only_while_loading() {
        assert!(is_loading_state("loading"));
        assert!(!is_loading_state("interactive"));
        assert!(!is_loading_state("complete"));
    }
}
