//! Всплывающие уведомления в правом верхнем углу.
//!
//! Контейнер `#alerts-container` создается при первом уведомлении.
//! Каждое уведомление снимается через `notification_ttl_ms` либо по
//! кнопке закрытия, смотря что наступит раньше. Второе снятие ничего не делает.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::shared::dom;
use crate::shared::slots::{KeyedSlots, Mounted};

pub const CONTAINER_ID: &str = "alerts-container";

/// Уровень уведомления; определяет класс `alert-*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Danger => "alert-danger",
            Severity::Warning => "alert-warning",
            Severity::Info => "alert-info",
        }
    }
}

thread_local! {
    static ALERTS: RefCell<KeyedSlots<String, Mounted>> = RefCell::new(KeyedSlots::default());
    static TTL_MS: Cell<u32> = const { Cell::new(5000) };
    static SEQ: Cell<u32> = const { Cell::new(0) };
}

/// Время жизни уведомлений (вызывается при старте панели)
pub fn set_ttl_ms(ttl_ms: u32) {
    TTL_MS.with(|t| t.set(ttl_ms));
}

pub fn show_success(message: &str) {
    show(message, Severity::Success);
}

pub fn show_error(message: &str) {
    show(message, Severity::Danger);
}

/// ID уведомления из времени создания; счетчик разводит уведомления одной миллисекунды
pub fn alert_id(timestamp_ms: f64, seq: u32) -> String {
    format!("alert-{}-{}", timestamp_ms as u64, seq)
}

/// Показывает уведомление и планирует его снятие
pub fn show(message: &str, severity: Severity) {
    match severity {
        Severity::Danger => log::warn!("notification: {}", message),
        _ => log::debug!("notification: {}", message),
    }

    let Some(container) = ensure_container() else {
        log::error!("Нет document.body, уведомление не показано: {}", message);
        return;
    };

    let seq = SEQ.with(|s| {
        let next = s.get().wrapping_add(1);
        s.set(next);
        next
    });
    let id = alert_id(js_sys::Date::now(), seq);

    let handle = {
        let id = id.clone();
        let message = message.to_string();
        leptos::mount::mount_to(container, move || view! { <Alert alert_id=id message=message severity=severity /> })
    };

    ALERTS.with(|alerts| {
        // Вытесненного значения быть не может: ID уникален
        let _ = alerts.borrow_mut().replace(id.clone(), Mounted::new(handle));
    });

    let ttl = TTL_MS.with(|t| t.get());
    Timeout::new(ttl, move || dismiss(&id)).forget();
}

/// Снимает уведомление; повторный вызов и вызов для неизвестного ID безопасны
pub fn dismiss(id: &str) {
    let removed = ALERTS.with(|alerts| alerts.borrow_mut().remove(&id.to_string()));
    drop(removed);
}

fn ensure_container() -> Option<HtmlElement> {
    let document = dom::document()?;
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return existing.dyn_into::<HtmlElement>().ok();
    }

    let container = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    container.set_id(CONTAINER_ID);
    container.set_class_name("position-fixed top-0 end-0 p-3");
    let _ = container.style().set_property("z-index", "1060");
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

#[component]
fn Alert(alert_id: String, message: String, severity: Severity) -> impl IntoView {
    let close_id = alert_id.clone();
    // Снятие откладывается: обработчик клика принадлежит снимаемому узлу
    let on_close = move |_| {
        let id = close_id.clone();
        leptos::task::spawn_local(async move { dismiss(&id) });
    };

    view! {
        <div
            id=alert_id
            class=format!("alert {} alert-dismissible fade show", severity.css_class())
            role="alert"
        >
            {message}
            <button type="button" class="btn-close" aria-label="Закрыть" on:click=on_close></button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class() {
        assert_eq!(Severity::Success.css_class(), "alert-success");
        assert_eq!(Severity::Danger.css_class(), "alert-danger");
        assert_eq!(Severity::Warning.css_class(), "alert-warning");
        assert_eq!(Severity::Info.css_class(), "alert-info");
    }

    #[test]
    fn test_alert_id_unique_within_millisecond() {
        let a = alert_id(1_700_000_000_123.0, 1);
        let b = alert_id(1_700_000_000_123.0, 2);
        assert_eq!(a, "alert-1700000000123-1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        dismiss("alert-0-0");
        dismiss("alert-0-0");
        assert!(ALERTS.with(|alerts| alerts.borrow_mut().remove(&"alert-0-0".to_string())).is_none());
    }
}
