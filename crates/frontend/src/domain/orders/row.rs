//! Обновление строки заказа `tr[data-order-id]` по свежим данным без перезагрузки.
//!
//! Ячейки, которые нужно обновлять, помечаются атрибутом `data-field`:
//! ```html
//! <tr data-order-id="15" data-status="new">
//!     <td data-field="status" data-status>🆕 Новый</td>
//!     <td data-field="price" data-price>—</td>
//! </tr>
//! ```

use contracts::domain::order::OrderDto;
use contracts::enums::WorkType;
use web_sys::Element;

use crate::shared::dom;
use crate::shared::format::{format_date, format_price};

/// Селектор строки заказа
pub fn row_selector(order_id: &str) -> String {
    format!("tr{}", dom::attr_selector("data-order-id", order_id))
}

/// Строка заказа на странице
pub fn find_row(order_id: &str) -> Option<Element> {
    dom::document()?
        .query_selector(&row_selector(order_id))
        .ok()
        .flatten()
}

/// Текст ячейки для поля заказа; для неизвестного поля `None`
pub fn field_text(order: &OrderDto, field: &str) -> Option<String> {
    let text = match field {
        "id" => order.id.to_string(),
        "title" => order.title.clone().unwrap_or_default(),
        "description" => order.description.clone().unwrap_or_default(),
        "work_type" => match order.work_type.as_deref() {
            Some(code) => WorkType::from_code(code)
                .map(|w| w.display_name().to_string())
                .unwrap_or_else(|| code.to_string()),
            None => String::new(),
        },
        "subject" => order.subject.clone().unwrap_or_default(),
        "deadline" => order.deadline.as_deref().map(format_date).unwrap_or_default(),
        "pages_count" => order.pages_count.map(|p| p.to_string()).unwrap_or_default(),
        "price" => format_price(order.price),
        "status" => order
            .status()
            .map(|s| s.label())
            .unwrap_or_else(|| order.status.clone()),
        "admin_notes" => order.admin_notes.clone().unwrap_or_default(),
        "created_at" => order.created_at.as_deref().map(format_date).unwrap_or_default(),
        "updated_at" => order.updated_at.as_deref().map(format_date).unwrap_or_default(),
        "user" => order
            .user
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_default(),
        _ => return None,
    };
    Some(text)
}

/// Переписывает помеченные ячейки строки и ее атрибут `data-status`
pub fn patch_row(row: &Element, order: &OrderDto) {
    let _ = row.set_attribute("data-status", &order.status);

    let mut patched = 0;
    for cell in dom::query_all(row, "[data-field]") {
        let Some(field) = cell.get_attribute("data-field") else {
            continue;
        };
        match field_text(order, &field) {
            Some(text) => {
                cell.set_text_content(Some(&text));
                patched += 1;
            }
            None => log::debug!("order {}: unknown field {:?}", order.id, field),
        }
    }
    log::debug!("order {}: {} cells patched", order.id, patched);
}
