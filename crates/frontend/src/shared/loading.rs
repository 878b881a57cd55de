//! Полноэкранный индикатор загрузки `#loading-overlay`.
//!
//! Индикатор один на страницу: повторный показ ничего не делает,
//! скрытие отсутствующего индикатора тоже.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::shared::dom;
use crate::shared::slots::{Mounted, Slot};

pub const OVERLAY_ID: &str = "loading-overlay";

thread_local! {
    static OVERLAY: RefCell<Slot<Mounted>> = RefCell::new(Slot::default());
}

pub fn show_loading() {
    let created = OVERLAY.with(|slot| {
        slot.borrow_mut().fill_if_empty(|| {
            let body = dom::body()?;
            Some(Mounted::new(leptos::mount::mount_to(body, || view! { <LoadingOverlay /> })))
        })
    });
    if created {
        log::trace!("loading overlay shown");
    }
}

pub fn hide_loading() {
    let removed = OVERLAY.with(|slot| slot.borrow_mut().take());
    if removed.is_some() {
        log::trace!("loading overlay hidden");
    }
    drop(removed);
}

/// Показывает индикатор на время жизни значения.
///
/// ```ignore
/// let _loading = LoadingGuard::show();
/// api::delete_order(&order_id).await?;
/// // индикатор снимется при выходе из области видимости, в том числе по `?`
/// ```
pub struct LoadingGuard {
    _private: (),
}

impl LoadingGuard {
    pub fn show() -> Self {
        show_loading();
        LoadingGuard { _private: () }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        hide_loading();
    }
}

#[component]
fn LoadingOverlay() -> impl IntoView {
    view! {
        <div
            id=OVERLAY_ID
            class="position-fixed top-0 start-0 w-100 h-100 d-flex align-items-center justify-content-center"
            style="background-color: rgba(0, 0, 0, 0.5); z-index: 9999;"
        >
            <div class="spinner-border text-light" role="status">
                <span class="visually-hidden">"Загрузка..."</span>
            </div>
        </div>
    }
}
