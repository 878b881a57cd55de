use contracts::shared::ApiMessage;
use thiserror::Error;

/// Запасной текст, когда сервер не объяснил ошибку
pub const GENERIC_ERROR: &str = "Произошла ошибка";

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошел до сервера или тело не удалось собрать
    #[error("Произошла ошибка: {0}")]
    Transport(String),

    /// Сервер ответил не 2xx
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_ERROR))]
    Status { status: u16, message: Option<String> },

    /// Ответ 2xx с неразборчивым телом
    #[error("Произошла ошибка: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(e: impl std::fmt::Display) -> Self {
        ApiError::Transport(e.to_string())
    }

    pub fn decode(e: impl std::fmt::Display) -> Self {
        ApiError::Decode(e.to_string())
    }

    /// Ошибка статуса с текстом из тела ответа, если он есть
    pub fn status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.text());
        ApiError::Status { status, message }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Текст уведомления: для ошибки статуса фиксированная строка
    /// обработчика, для остальных описание исключения.
    pub fn user_message(&self, on_status: &str) -> String {
        if self.is_status() {
            on_status.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message() {
        let e = ApiError::transport("Failed to fetch");
        assert_eq!(e.to_string(), "Произошла ошибка: Failed to fetch");
        assert_eq!(e.user_message("Ошибка при удалении заказа"), "Произошла ошибка: Failed to fetch");
    }

    #[test]
    fn test_status_uses_fixed_handler_text() {
        let e = ApiError::status(404, r#"{"detail": "Заказ не найден"}"#);
        assert!(e.is_status());
        assert_eq!(e.user_message("Ошибка при удалении заказа"), "Ошибка при удалении заказа");
        assert_eq!(e.to_string(), "Заказ не найден");
    }

    #[test]
    fn test_status_without_body_falls_back() {
        let e = ApiError::status(500, "<html>Internal Server Error</html>");
        assert_eq!(e, ApiError::Status { status: 500, message: None });
        assert_eq!(e.to_string(), "Произошла ошибка");
    }
}
