//! Отправка форм `form[data-ajax]` без перезагрузки страницы.
//!
//! Сервер отвечает `{"message": "...", "reload": true}`; при ошибке
//! `{"message": "..."}` или `{"detail": "..."}`.

use std::rc::Rc;

use contracts::shared::ApiMessage;
use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement, UrlSearchParams};

use crate::app::PanelContext;
use crate::shared::api_utils::ensure_ok;
use crate::shared::dom;
use crate::shared::error::ApiError;
use crate::shared::loading::LoadingGuard;
use crate::shared::notifications;

/// Отправить форму методом и по адресу, объявленным в ней самой
pub async fn submit_ajax_form(ctx: Rc<PanelContext>, form: HtmlFormElement) {
    let action = form.action();
    let method = declared_method(form.get_attribute("method").as_deref());

    let data = match FormData::new_with_form(&form) {
        Ok(data) => data,
        Err(e) => {
            notifications::show_error(&format!("Произошла ошибка: {:?}", e));
            return;
        }
    };

    let _loading = LoadingGuard::show();
    log::debug!("{} {} (ajax form)", method, action);

    match send_form(&action, method, data).await {
        Ok(result) => {
            notifications::show_success(&result.text_or("Операция выполнена успешно"));

            if let Some(modal) = dom::closest(&form, ".modal") {
                ctx.kit.hide_modal(&modal);
            }
            if result.reload {
                dom::reload_page();
            }
        }
        Err(e) => notifications::show_error(&e.to_string()),
    }
}

/// Метод формы в верхнем регистре; без атрибута `method` будет POST
pub fn declared_method(attr: Option<&str>) -> &'static str {
    match attr.map(|m| m.trim().to_ascii_uppercase()).as_deref() {
        Some("GET") => "GET",
        Some("PUT") => "PUT",
        Some("PATCH") => "PATCH",
        Some("DELETE") => "DELETE",
        _ => "POST",
    }
}

/// Добавляет строку запроса к адресу
pub fn with_query(action: &str, query: &str) -> String {
    if query.is_empty() {
        return action.to_string();
    }
    let (base, fragment) = match action.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (action, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{}{}{}#{}", base, separator, query, fragment),
        None => format!("{}{}{}", base, separator, query),
    }
}

async fn send_form(action: &str, method: &str, data: FormData) -> Result<ApiMessage, ApiError> {
    let request = match method {
        "GET" => {
            let params = UrlSearchParams::new_with_str_sequence_sequence(&data)
                .map_err(|e| ApiError::transport(format!("{:?}", e)))?;
            let query = String::from(params.to_string());
            Request::get(&with_query(action, &query)).build()?
        }
        "PUT" => Request::put(action).body(data)?,
        "PATCH" => Request::patch(action).body(data)?,
        "DELETE" => Request::delete(action).body(data)?,
        _ => Request::post(action).body(data)?,
    };

    let response = ensure_ok(request.send().await?).await?;

    response.json::<ApiMessage>().await.map_err(ApiError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_method() {
        assert_eq!(declared_method(None), "POST");
        assert_eq!(declared_method(Some("")), "POST");
        assert_eq!(declared_method(Some("get")), "GET");
        assert_eq!(declared_method(Some(" Patch ")), "PATCH");
        assert_eq!(declared_method(Some("dialog")), "POST");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/orders", "q=1"), "/orders?q=1");
        assert_eq!(with_query("/orders?page=2", "q=1"), "/orders?page=2&q=1");
        assert_eq!(with_query("/orders#top", "q=1"), "/orders?q=1#top");
        assert_eq!(with_query("/orders", ""), "/orders");
    }
}
