//! Утилиты для серверных таблиц: поиск по строкам и сортировка по колонке.
//!
//! # Использование
//!
//! В HTML таблицы:
//! ```html
//! <input type="search" data-search="orders">
//! <table id="ordersTable" class="table">
//!     <thead>
//!         <tr>
//!             <th data-sort="price">Цена <span class="sort-icon">↕</span></th>
//!         </tr>
//!     </thead>
//!     <tbody>
//!         <tr data-order-id="15"><td data-price>1 500.00 руб.</td></tr>
//!     </tbody>
//! </table>
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::shared::dom;
use crate::shared::slots::KeyedSlots;

/// Значок неактивной колонки
pub const NEUTRAL_ICON: &str = "↕";

/// Сортируемый заголовок таблицы
pub const SORTABLE_HEADER: &str = ".table th[data-sort]";

const SORT_ORDER_ATTR: &str = "data-sort-order";

thread_local! {
    // Один отложенный поиск на поле поиска; новый ввод отменяет предыдущий
    static SEARCH_TIMERS: RefCell<KeyedSlots<String, Timeout>> = RefCell::new(KeyedSlots::default());
}

// ============================================================================
// Поиск
// ============================================================================

/// Строка подходит, если ее текст содержит запрос без учета регистра.
/// Пустой запрос подходит к любой строке.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Показывает строки `#{table_type}Table tbody`, подходящие под запрос, и скрывает остальные
pub fn perform_search(query: &str, table_type: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(tbody) = document
        .get_element_by_id(&format!("{}Table", table_type))
        .and_then(|table| table.query_selector("tbody").ok().flatten())
    else {
        log::debug!("search: table {}Table not found", table_type);
        return;
    };

    let rows = dom::query_all(&tbody, "tr");
    let mut visible = 0;
    for row in &rows {
        let text = row.text_content().unwrap_or_default();
        let matched = row_matches(&text, query);
        if matched {
            visible += 1;
        }
        dom::set_display(row, matched);
    }
    log::debug!("search {:?} in {}: {}/{} rows", query, table_type, visible, rows.len());
}

/// Планирует поиск через `delay_ms`; отменяет поиск, запланированный ранее для того же поля
pub fn schedule_search(slot_key: String, query: String, table_type: String, delay_ms: u32) {
    let timer = Timeout::new(delay_ms, move || perform_search(&query, &table_type));
    let previous = SEARCH_TIMERS.with(|timers| timers.borrow_mut().replace(slot_key, timer));
    drop(previous);
}

// ============================================================================
// Сортировка
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Следующее направление по флагу, сохраненному на таблице.
    /// Первая сортировка всегда по возрастанию.
    pub fn next(stored: Option<&str>) -> Self {
        if stored == Some("asc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Значок заголовка после сортировки по `active_column`
pub fn header_icon(header_column: &str, active_column: &str, direction: SortDirection) -> &'static str {
    if header_column == active_column {
        direction.icon()
    } else {
        NEUTRAL_ICON
    }
}

/// Сравнение строк "как у людей": числа сравниваются по значению,
/// буквы без учета регистра, кириллица раньше латиницы, `ё` как `е`.
/// Знаки и пробелы идут раньше цифр, цифры раньше букв.
/// При прочих равных `е` раньше `ё`, строчные раньше заглавных,
/// последним сравнивается побайтовое представление.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let chunks_a = split_chunks(a);
    let chunks_b = split_chunks(b);

    for (x, y) in chunks_a.iter().zip(chunks_b.iter()) {
        let ord = match (x, y) {
            (Chunk::Number(x), Chunk::Number(y)) => cmp_numeric(x, y),
            (Chunk::Number(_), Chunk::Text(t)) => {
                if starts_with_symbol(t) {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Chunk::Text(t), Chunk::Number(_)) => {
                if starts_with_symbol(t) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Chunk::Text(x), Chunk::Text(y)) => cmp_text(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    chunks_a
        .len()
        .cmp(&chunks_b.len())
        .then_with(|| letters(a).map(is_yo).cmp(letters(b).map(is_yo)))
        .then_with(|| letters(a).map(char::is_uppercase).cmp(letters(b).map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn starts_with_symbol(text: &str) -> bool {
    text.chars().next().is_some_and(|c| !c.is_alphanumeric())
}

fn is_yo(c: char) -> bool {
    c == 'ё' || c == 'Ё'
}

fn letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| c.is_alphabetic())
}

/// Порядок индексов строк после сортировки по ключам.
/// Сортировка устойчивая: строки с равными ключами сохраняют взаимный порядок.
pub fn sorted_order(keys: &[String], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&i, &j| {
        let cmp = natural_cmp(&keys[i], &keys[j]);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    order
}

#[derive(Debug, PartialEq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn split_chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_number: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_number {
            Some(prev) if prev != is_digit => {
                chunks.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_number = Some(is_digit);
    }
    if let Some(prev) = in_number {
        chunks.push(make_chunk(&s[start..], prev));
    }
    chunks
}

fn make_chunk(s: &str, is_number: bool) -> Chunk<'_> {
    if is_number {
        Chunk::Number(s)
    } else {
        Chunk::Text(s)
    }
}

fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars().map(collation_key).cmp(b.chars().map(collation_key))
}

fn collation_key(c: char) -> (u8, char) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = if lower == 'ё' { 'е' } else { lower };
    let script = if !base.is_alphabetic() {
        0
    } else if ('а'..='я').contains(&base) {
        1
    } else if base.is_ascii_alphabetic() {
        2
    } else {
        3
    };
    (script, base)
}

/// Текст первой ячейки строки с атрибутом `data-{column}`
fn cell_value(row: &Element, column: &str) -> String {
    row.query_selector(&format!("[data-{}]", column))
        .ok()
        .flatten()
        .and_then(|cell| cell.text_content())
        .unwrap_or_default()
}

/// Сортирует строки `tbody` по колонке, переключая направление, и обновляет значки заголовков
pub fn sort_table(table: &Element, column: &str) {
    let Some(tbody) = table.query_selector("tbody").ok().flatten() else {
        return;
    };

    let rows = dom::query_all(&tbody, ":scope > tr");
    let direction = SortDirection::next(table.get_attribute(SORT_ORDER_ATTR).as_deref());
    let keys: Vec<String> = rows.iter().map(|row| cell_value(row, column)).collect();

    for i in sorted_order(&keys, direction) {
        // appendChild переносит существующий узел в конец
        let _ = tbody.append_child(&rows[i]);
    }

    let _ = table.set_attribute(SORT_ORDER_ATTR, direction.as_attr());
    log::debug!("sort by {} {}: {} rows", column, direction.as_attr(), rows.len());

    for header in dom::query_all(table, "th[data-sort]") {
        let Some(icon) = header.query_selector(".sort-icon").ok().flatten() else {
            continue;
        };
        let header_column = header.get_attribute("data-sort").unwrap_or_default();
        icon.set_text_content(Some(header_icon(&header_column, column, direction)));
    }
}

/// Курсор-указатель на сортируемых заголовках
pub fn prepare_sortable_headers(root: &impl AsRef<web_sys::Node>) {
    for header in dom::query_all(root, SORTABLE_HEADER) {
        if let Ok(header) = header.dyn_into::<HtmlElement>() {
            let _ = header.style().set_property("cursor", "pointer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn apply(values: &[&str], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| values[i].to_string()).collect()
    }

    #[test]
    fn test_row_matches() {
        assert!(row_matches("Заказ 15 Курсовая ИСТОРИЯ", "история"));
        assert!(row_matches("anything", ""));
        assert!(!row_matches("Заказ 15", "диплом"));
    }

    #[test]
    fn test_direction_toggles() {
        assert_eq!(SortDirection::next(None), SortDirection::Ascending);
        assert_eq!(SortDirection::next(Some("desc")), SortDirection::Ascending);
        assert_eq!(SortDirection::next(Some("asc")), SortDirection::Descending);

        let first = SortDirection::next(None);
        let second = SortDirection::next(Some(first.as_attr()));
        let third = SortDirection::next(Some(second.as_attr()));
        assert_eq!(second, SortDirection::Descending);
        assert_eq!(third, SortDirection::Ascending);
    }

    #[test]
    fn test_sortable_header_scoped_to_tables() {
        assert_eq!(SORTABLE_HEADER, ".table th[data-sort]");
    }

    #[test]
    fn test_header_icons() {
        assert_eq!(header_icon("price", "price", SortDirection::Ascending), "↑");
        assert_eq!(header_icon("price", "price", SortDirection::Descending), "↓");
        assert_eq!(header_icon("status", "price", SortDirection::Ascending), NEUTRAL_ICON);
    }

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("Заказ 9", "Заказ 10"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Less);
        assert_eq!(natural_cmp("7", "7"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_text() {
        assert_eq!(natural_cmp("абв", "АБГ"), Ordering::Less);
        assert_eq!(natural_cmp("ёж", "жук"), Ordering::Less);
        assert_eq!(natural_cmp("Ясно", "Apple"), Ordering::Less);
        assert_eq!(natural_cmp("", "а"), Ordering::Less);
        assert_eq!(natural_cmp("1", "а"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_symbols_before_digits() {
        assert_eq!(natural_cmp("—", "1 500.00 руб."), Ordering::Less);
        assert_eq!(natural_cmp("1 500.00 руб.", "—"), Ordering::Greater);
        assert_eq!(natural_cmp("#5", "5"), Ordering::Less);

        let values = ["12500.00 руб.", "—", "900.00 руб."];
        let asc = sorted_order(&keys(&values), SortDirection::Ascending);
        assert_eq!(apply(&values, &asc), vec!["—", "900.00 руб.", "12500.00 руб."]);
    }

    #[test]
    fn test_natural_cmp_lowercase_first() {
        assert_eq!(natural_cmp("a", "A"), Ordering::Less);
        assert_eq!(natural_cmp("Готов", "готов"), Ordering::Greater);
        assert_eq!(natural_cmp("еж", "ёж"), Ordering::Less);
    }

    #[test]
    fn test_sorted_order_ascending_and_descending() {
        let values = ["15", "3", "200", "3a"];
        let asc = sorted_order(&keys(&values), SortDirection::Ascending);
        assert_eq!(apply(&values, &asc), vec!["3", "3a", "15", "200"]);

        let desc = sorted_order(&keys(&values), SortDirection::Descending);
        assert_eq!(apply(&values, &desc), vec!["200", "15", "3a", "3"]);
    }

    #[test]
    fn test_sorting_twice_restores_relative_order_without_ties() {
        let values = ["Новый", "Готов", "В работе", "Отменен"];
        let asc = sorted_order(&keys(&values), SortDirection::Ascending);
        let after_asc = apply(&values, &asc);

        let refs: Vec<&str> = after_asc.iter().map(String::as_str).collect();
        let desc = sorted_order(&keys(&refs), SortDirection::Descending);
        let after_desc = apply(&refs, &desc);

        let mut reversed = after_asc.clone();
        reversed.reverse();
        assert_eq!(after_desc, reversed);
    }

    #[test]
    fn test_sorted_order_is_stable_for_missing_cells() {
        let values = ["", "b", "", "a"];
        let asc = sorted_order(&keys(&values), SortDirection::Ascending);
        assert_eq!(asc, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_split_chunks() {
        assert_eq!(
            split_chunks("ab12c"),
            vec![Chunk::Text("ab"), Chunk::Number("12"), Chunk::Text("c")]
        );
        assert!(split_chunks("").is_empty());
    }
}
