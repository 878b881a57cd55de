use serde::Deserialize;

/// ID элемента `<script type="application/json">` с настройками панели
pub const CONFIG_ELEMENT_ID: &str = "admin-panel-config";

/// Настройки админ-панели.
///
/// Страница может переопределить любое поле:
/// ```html
/// <script type="application/json" id="admin-panel-config">
///     {"api_base": "/admin", "max_upload_bytes": 10485760}
/// </script>
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Префикс перед `/api/...`; при пустой строке запросы идут на тот же origin
    pub api_base: String,
    /// Максимальный размер одного загружаемого файла
    pub max_upload_bytes: u64,
    /// Время жизни уведомления
    pub notification_ttl_ms: u32,
    /// Задержка поиска после последнего нажатия клавиши
    pub search_debounce_ms: u32,
    pub log_level: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            max_upload_bytes: 20 * 1024 * 1024,
            notification_ttl_ms: 5000,
            search_debounce_ms: 300,
            log_level: "debug".to_string(),
        }
    }
}

impl PanelConfig {
    /// Разбирает JSON настроек; отсутствующие поля берутся по умолчанию
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid panel config: {}", e))
    }

    /// Уровень логирования; нераспознанное значение дает Debug
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Загружает настройки со страницы.
///
/// Порядок поиска:
/// 1. Элемент `#admin-panel-config`
/// 2. Значения по умолчанию
///
/// Вызывается до инициализации логгера, поэтому ошибку разбора
/// возвращает вызывающему вместо записи в лог.
pub fn load_config() -> (PanelConfig, Option<String>) {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => match PanelConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (PanelConfig::default(), Some(e)),
        },
        _ => (PanelConfig::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.max_upload_bytes, 20_971_520);
        assert_eq!(config.notification_ttl_ms, 5000);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override() {
        let config = PanelConfig::from_json(r#"{"api_base": "/admin", "log_level": "warn"}"#).unwrap();
        assert_eq!(config.api_base, "/admin");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PanelConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = PanelConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
