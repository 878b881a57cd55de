//! Форматирование значений для отображения в админке

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const SIZE_UNITS: [&str; 4] = ["Б", "КБ", "МБ", "ГБ"];

/// Дата и время в виде `DD.MM.YYYY, HH:MM`.
///
/// Время со смещением переводится в локальный часовой пояс, время без
/// смещения считается уже локальным. Нераспознанная строка возвращается как есть.
pub fn format_date(date_str: &str) -> String {
    match parse_local(date_str) {
        Some(dt) => dt.format("%d.%m.%Y, %H:%M").to_string(),
        None => date_str.to_string(),
    }
}

fn parse_local(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Размер файла в единицах по 1024 байта, не более двух знаков после точки
///
/// # Примеры
///
/// ```
/// use admin_frontend::shared::format::format_file_size;
/// assert_eq!(format_file_size(2048), "2 КБ");
/// assert_eq!(format_file_size(0), "0 Б");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Б".to_string();
    }

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / divisor as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// Экранирует `& < > " '` для вставки текста в HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Сумма с разделителем тысяч (пробел) и двумя знаками после точки
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Цена заказа для ячейки таблицы
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} руб.", format_money(v)),
        None => "—".to_string(),
    }
}
