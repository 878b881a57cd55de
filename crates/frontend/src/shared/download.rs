/// Сохранение полученных с сервера файлов через браузер
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Имя файла, если сервер его не сообщил
pub const FALLBACK_FILENAME: &str = "file";

/// Имя файла из заголовка `Content-Disposition`.
///
/// Понимает `filename*=UTF-8''...` (RFC 5987), `filename="..."` и `filename=...`.
pub fn filename_from_disposition(header: Option<&str>) -> String {
    let Some(header) = header else {
        return FALLBACK_FILENAME.to_string();
    };

    let mut plain: Option<String> = None;
    let mut extended: Option<String> = None;

    for part in split_params(header) {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let value = value.trim().trim_matches('"');
                // charset'language'percent-encoded
                let encoded = value.splitn(3, '\'').nth(2).unwrap_or(value);
                if let Ok(decoded) = urlencoding::decode(encoded) {
                    extended = Some(decoded.into_owned());
                }
            }
            "filename" => {
                plain = Some(unquote(value.trim()));
            }
            _ => {}
        }
    }

    extended
        .or(plain)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

/// Делит заголовок на параметры по `;` вне кавычек
fn split_params(header: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;

    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted => {
                parts.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&header[start..]);
    parts
}

/// Значение параметра без кавычек и экранирования
fn unquote(value: &str) -> String {
    let Some(inner) = value.strip_prefix('"') else {
        return value.to_string();
    };
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Создает Blob из байтов ответа
pub fn create_blob(bytes: &[u8], content_type: Option<&str>) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        properties.set_type(content_type);
    }

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=\"report.docx\"")),
            "report.docx"
        );
    }

    #[test]
    fn test_unquoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=work.pdf")),
            "work.pdf"
        );
    }

    #[test]
    fn test_extended_filename_wins() {
        assert_eq!(
            filename_from_disposition(Some(
                "attachment; filename=\"fallback.txt\"; filename*=utf-8''%D0%9A%D1%83%D1%80%D1%81%D0%BE%D0%B2%D0%B0%D1%8F.docx"
            )),
            "Курсовая.docx"
        );
    }

    #[test]
    fn test_quoted_filename_keeps_separators() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=\"draft;v2.docx\"")),
            "draft;v2.docx"
        );
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=\"say \\\"hi\\\"; now.txt\"; size=10")),
            "say \"hi\"; now.txt"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(filename_from_disposition(None), "file");
        assert_eq!(filename_from_disposition(Some("inline")), "file");
        assert_eq!(filename_from_disposition(Some("attachment; filename=\"\"")), "file");
    }
}
