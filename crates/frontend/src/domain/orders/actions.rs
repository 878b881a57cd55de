//! Действия с заказом из таблицы: смена статуса, цена, удаление.
//!
//! Каждое действие показывает индикатор загрузки на время запроса и
//! сообщает результат уведомлением.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::app::PanelContext;
use crate::domain::orders::{api, price, row};
use crate::shared::dom;
use crate::shared::loading::LoadingGuard;
use crate::shared::notifications;

pub const PRICE_MODAL_ID: &str = "priceModal";
const PRICE_ORDER_INPUT: &str = "#orderId";
const PRICE_VALUE_INPUT: &str = "#orderPrice";

/// Изменить статус заказа и обновить его строку
pub async fn change_order_status(order_id: String, new_status: String) {
    let _loading = LoadingGuard::show();

    match api::change_status(&order_id, &new_status).await {
        Ok(()) => {
            notifications::show_success("Статус заказа успешно изменен");
            refresh_order_row(&order_id).await;
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при изменении статуса")),
    }
}

/// Установить цену заказа; строка из поля ввода передается как есть
pub async fn set_order_price(order_id: String, raw_price: String) {
    let _loading = LoadingGuard::show();

    match api::set_price(&order_id, price::parse_price(&raw_price)).await {
        Ok(()) => {
            notifications::show_success("Цена успешно установлена");
            refresh_order_row(&order_id).await;
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при установке цены")),
    }
}

/// Удалить заказ после подтверждения и убрать его строку
pub async fn confirm_delete_order(order_id: String) {
    if !dom::confirm("Вы уверены, что хотите удалить этот заказ? Это действие нельзя отменить.") {
        log::debug!("delete of order {} cancelled", order_id);
        return;
    }

    let _loading = LoadingGuard::show();

    match api::delete_order(&order_id).await {
        Ok(()) => {
            notifications::show_success("Заказ успешно удален");
            if let Some(row) = row::find_row(&order_id) {
                row.remove();
            }
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при удалении заказа")),
    }
}

/// Перечитать заказ и обновить его строку; ошибки только в лог
pub async fn refresh_order_row(order_id: &str) {
    match api::fetch_order(order_id).await {
        Ok(order) => {
            if let Some(row) = row::find_row(order_id) {
                row::patch_row(&row, &order);
            }
        }
        Err(e) => log::error!("Ошибка обновления строки {}: {}", order_id, e),
    }
}

/// Открыть окно ввода цены; без окна на странице спросить цену через prompt
pub fn open_price_dialog(ctx: &PanelContext, order_id: String) {
    let Some(document) = dom::document() else {
        return;
    };

    let Some(modal) = document.get_element_by_id(PRICE_MODAL_ID) else {
        if let Some(raw_price) = dom::prompt("Введите цену заказа") {
            wasm_bindgen_futures::spawn_local(set_order_price(order_id, raw_price));
        }
        return;
    };

    set_input_value(&modal, PRICE_ORDER_INPUT, &order_id);
    set_input_value(&modal, PRICE_VALUE_INPUT, "");
    ctx.kit.show_modal(&modal);
}

/// Сохранить цену из окна ввода цены
pub fn submit_price_dialog(ctx: &PanelContext) {
    let Some(modal) = dom::document().and_then(|d| d.get_element_by_id(PRICE_MODAL_ID)) else {
        return;
    };

    let order_id = input_value(&modal, PRICE_ORDER_INPUT).unwrap_or_default();
    if order_id.is_empty() {
        log::warn!("price modal without order id");
        return;
    }
    let raw_price = input_value(&modal, PRICE_VALUE_INPUT).unwrap_or_default();

    ctx.kit.hide_modal(&modal);
    wasm_bindgen_futures::spawn_local(set_order_price(order_id, raw_price));
}

fn input_value(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

fn set_input_value(root: &Element, selector: &str, value: &str) {
    if let Some(input) = root
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}
