use contracts::domain::order::{ChangeStatusRequest, OrderDto, SetPriceRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, encode_id, ensure_ok};
use crate::shared::error::ApiError;

fn order_url(order_id: &str, suffix: &str) -> String {
    api_url(&format!("/api/orders/{}{}", encode_id(order_id), suffix))
}

/// Получить заказ
pub async fn fetch_order(order_id: &str) -> Result<OrderDto, ApiError> {
    log::debug!("GET order {}", order_id);

    let response = Request::get(&order_url(order_id, "")).send().await?;
    let response = ensure_ok(response).await?;

    response.json::<OrderDto>().await.map_err(ApiError::decode)
}

/// Изменить статус заказа
pub async fn change_status(order_id: &str, status: &str) -> Result<(), ApiError> {
    log::debug!("POST status {} for order {}", status, order_id);

    let body = ChangeStatusRequest {
        status: status.to_string(),
    };
    let response = Request::post(&order_url(order_id, "/status"))
        .json(&body)?
        .send()
        .await?;
    ensure_ok(response).await?;

    Ok(())
}

/// Установить цену заказа
pub async fn set_price(order_id: &str, price: f64) -> Result<(), ApiError> {
    log::debug!("POST price {} for order {}", price, order_id);

    let response = Request::post(&order_url(order_id, "/price"))
        .json(&SetPriceRequest { price })?
        .send()
        .await?;
    ensure_ok(response).await?;

    Ok(())
}

/// Удалить заказ
pub async fn delete_order(order_id: &str) -> Result<(), ApiError> {
    log::debug!("DELETE order {}", order_id);

    let response = Request::delete(&order_url(order_id, "")).send().await?;
    ensure_ok(response).await?;

    Ok(())
}
