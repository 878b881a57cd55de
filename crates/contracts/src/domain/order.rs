use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

/// Заказ в том виде, в каком его отдает `GET /api/orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub pages_count: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Код статуса; неизвестные коды не ломают разбор ответа
    pub status: String,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: Option<OrderUser>,
}

impl OrderDto {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(&self.status)
    }
}

/// Клиент, оформивший заказ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    pub id: i64,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl OrderUser {
    /// Имя для отображения: "Имя Фамилия", затем @username, затем id
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        match &self.username {
            Some(username) if !username.is_empty() => format!("@{}", username),
            _ => format!("#{}", self.id),
        }
    }
}

/// Тело `POST /api/orders/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: String,
}

/// Тело `POST /api/orders/{id}/price`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPriceRequest {
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order_response() {
        let json = r#"{
            "id": 42,
            "title": null,
            "description": null,
            "work_type": "essay",
            "subject": "История",
            "deadline": null,
            "pages_count": null,
            "price": 1500.0,
            "status": "in_progress",
            "admin_notes": null,
            "created_at": "2024-03-15T14:02:26.123456",
            "updated_at": "2024-03-16T09:00:00",
            "user": {
                "id": 7,
                "telegram_id": 123456789,
                "username": "student",
                "first_name": "Иван",
                "last_name": null
            }
        }"#;
        let order: OrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 42);
        assert_eq!(order.price, Some(1500.0));
        assert_eq!(order.status(), Some(OrderStatus::InProgress));
        assert_eq!(order.user.unwrap().display_name(), "Иван");
    }

    #[test]
    fn test_unknown_status_still_decodes() {
        let order: OrderDto = serde_json::from_str(r#"{"id": 1, "status": "archived"}"#).unwrap();
        assert_eq!(order.status(), None);
        assert_eq!(order.price, None);
    }

    #[test]
    fn test_user_display_name_fallbacks() {
        let mut user = OrderUser {
            id: 3,
            telegram_id: None,
            username: Some("nick".to_string()),
            first_name: None,
            last_name: None,
        };
        assert_eq!(user.display_name(), "@nick");
        user.username = None;
        assert_eq!(user.display_name(), "#3");
    }

    #[test]
    fn test_price_request_body() {
        let body = serde_json::to_string(&SetPriceRequest { price: 99.5 }).unwrap();
        assert_eq!(body, r#"{"price":99.5}"#);
    }
}
