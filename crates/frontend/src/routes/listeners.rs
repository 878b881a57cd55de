//! Делегированные обработчики на `document`: клики, ввод в поиск, выбор файлов.
//!
//! Обработчики ставятся один раз на страницу и живут до ее выгрузки,
//! поэтому замыкания отпускаются через `forget()`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement};

use crate::app::PanelContext;
use crate::domain::order_files::actions as file_actions;
use crate::domain::orders::actions as order_actions;
use crate::routes::actions::{ClickAction, CLICK_MARKERS};
use crate::shared::dom;
use crate::shared::table_utils;

/// Ставит обработчики `click`, `input` и `change` на документ
pub fn install(ctx: Rc<PanelContext>) {
    let Some(document) = dom::document() else {
        return;
    };

    let click_ctx = ctx.clone();
    let click = Closure::wrap(Box::new(move |event: Event| {
        on_click(&click_ctx, &event);
    }) as Box<dyn FnMut(Event)>);

    let input_ctx = ctx.clone();
    let input = Closure::wrap(Box::new(move |event: Event| {
        on_input(&input_ctx, &event);
    }) as Box<dyn FnMut(Event)>);

    let change_ctx = ctx;
    let change = Closure::wrap(Box::new(move |event: Event| {
        on_change(&change_ctx, &event);
    }) as Box<dyn FnMut(Event)>);

    for (name, closure) in [("click", &click), ("input", &input), ("change", &change)] {
        if let Err(e) = document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
            log::error!("Не удалось подписаться на {}: {:?}", name, e);
        }
    }

    click.forget();
    input.forget();
    change.forget();
    log::debug!("event router installed");
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn on_click(ctx: &Rc<PanelContext>, event: &Event) {
    let Some(target) = target_element(event) else {
        return;
    };

    if let Some(header) = dom::closest(&target, table_utils::SORTABLE_HEADER) {
        let table = dom::closest(&header, ".table");
        let column = dom::data_attr(&header, "sort");
        if let (Some(table), Some(column)) = (table, column) {
            table_utils::sort_table(&table, &column);
        }
        return;
    }

    for marker in CLICK_MARKERS {
        let Some(el) = dom::closest(&target, &format!(".{}", marker)) else {
            continue;
        };
        match ClickAction::from_marker(marker, |name| dom::data_attr(&el, name)) {
            Some(action) => {
                event.prevent_default();
                dispatch(ctx, action);
            }
            None => log::warn!("{}: missing data attributes", marker),
        }
        return;
    }
}

fn dispatch(ctx: &Rc<PanelContext>, action: ClickAction) {
    log::debug!("dispatch {:?}", action);
    match action {
        ClickAction::ChangeStatus { order_id, status } => {
            spawn_local(order_actions::change_order_status(order_id, status));
        }
        ClickAction::SetPrice { order_id } => order_actions::open_price_dialog(ctx, order_id),
        ClickAction::SavePrice => order_actions::submit_price_dialog(ctx),
        ClickAction::DeleteOrder { order_id } => {
            spawn_local(order_actions::confirm_delete_order(order_id));
        }
        ClickAction::DownloadFile { file_id } => {
            spawn_local(file_actions::download_file(file_id));
        }
        ClickAction::DeleteFile { file_id, order_id } => {
            spawn_local(file_actions::delete_file(file_id, order_id));
        }
    }
}

fn on_input(ctx: &Rc<PanelContext>, event: &Event) {
    let Some(input) = target_element(event).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
        return;
    };
    let Some(table_type) = dom::data_attr(&input, "search") else {
        return;
    };

    table_utils::schedule_search(
        table_type.clone(),
        input.value(),
        table_type,
        ctx.config.search_debounce_ms,
    );
}

fn on_change(ctx: &Rc<PanelContext>, event: &Event) {
    let Some(target) = target_element(event) else {
        return;
    };
    if !target
        .matches("input[type=\"file\"][data-order-id]")
        .unwrap_or(false)
    {
        return;
    }
    let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
        return;
    };

    spawn_local(file_actions::handle_file_upload(input, ctx.config.max_upload_bytes));
}
