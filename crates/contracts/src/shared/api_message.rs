use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ответ backend на действие: `{message, reload}` при успехе,
/// `{message}` или `{detail}` при ошибке.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reload: bool,
    /// Строка или список ошибок валидации
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ApiMessage {
    /// Текст для пользователя: `message`, иначе `detail`
    pub fn text(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return Some(message.to_string());
        }
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Текст сообщения или запасная строка
    pub fn text_or(&self, fallback: &str) -> String {
        self.text().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_reload() {
        let msg: ApiMessage =
            serde_json::from_str(r#"{"message": "Сохранено", "reload": true}"#).unwrap();
        assert!(msg.reload);
        assert_eq!(msg.text_or("x"), "Сохранено");
    }

    #[test]
    fn test_detail_string() {
        let msg: ApiMessage = serde_json::from_str(r#"{"detail": "Заказ не найден"}"#).unwrap();
        assert!(!msg.reload);
        assert_eq!(msg.text().as_deref(), Some("Заказ не найден"));
    }

    #[test]
    fn test_detail_validation_list() {
        let msg: ApiMessage = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "price"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(msg.text().as_deref(), Some("field required"));
    }

    #[test]
    fn test_fallback_when_body_is_empty() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.text_or("Произошла ошибка"), "Произошла ошибка");
    }
}
