//! Какое действие означает клик по размеченному элементу.
//!
//! Элемент выбирает действие классом-маркером, параметры берутся из его
//! атрибутов `data-*`. Маркеры взаимоисключающие.

/// Классы-маркеры кнопок в порядке проверки
pub const CLICK_MARKERS: &[&str] = &[
    "change-status-btn",
    "set-price-btn",
    "save-price-btn",
    "delete-order-btn",
    "download-file-btn",
    "delete-file-btn",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    ChangeStatus { order_id: String, status: String },
    SetPrice { order_id: String },
    SavePrice,
    DeleteOrder { order_id: String },
    DownloadFile { file_id: String },
    DeleteFile { file_id: String, order_id: Option<String> },
}

impl ClickAction {
    /// Действие для маркера; `data` отдает значение `data-{name}`.
    /// Без обязательного атрибута действие не строится.
    pub fn from_marker(marker: &str, data: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let action = match marker {
            "change-status-btn" => ClickAction::ChangeStatus {
                order_id: data("order-id")?,
                status: data("status")?,
            },
            "set-price-btn" => ClickAction::SetPrice {
                order_id: data("order-id")?,
            },
            "save-price-btn" => ClickAction::SavePrice,
            "delete-order-btn" => ClickAction::DeleteOrder {
                order_id: data("order-id")?,
            },
            "download-file-btn" => ClickAction::DownloadFile {
                file_id: data("file-id")?,
            },
            "delete-file-btn" => ClickAction::DeleteFile {
                file_id: data("file-id")?,
                order_id: data("order-id"),
            },
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_change_status() {
        let action =
            ClickAction::from_marker("change-status-btn", attrs(&[("order-id", "15"), ("status", "ready")]));
        assert_eq!(
            action,
            Some(ClickAction::ChangeStatus {
                order_id: "15".to_string(),
                status: "ready".to_string()
            })
        );
    }

    #[test]
    fn test_missing_required_attribute() {
        assert_eq!(ClickAction::from_marker("change-status-btn", attrs(&[("order-id", "15")])), None);
        assert_eq!(ClickAction::from_marker("download-file-btn", attrs(&[])), None);
        assert_eq!(ClickAction::from_marker("delete-order-btn", attrs(&[("file-id", "3")])), None);
    }

    #[test]
    fn test_delete_file_order_is_optional() {
        assert_eq!(
            ClickAction::from_marker("delete-file-btn", attrs(&[("file-id", "3")])),
            Some(ClickAction::DeleteFile {
                file_id: "3".to_string(),
                order_id: None
            })
        );
        assert_eq!(
            ClickAction::from_marker("delete-file-btn", attrs(&[("file-id", "3"), ("order-id", "15")])),
            Some(ClickAction::DeleteFile {
                file_id: "3".to_string(),
                order_id: Some("15".to_string())
            })
        );
    }

    #[test]
    fn test_every_marker_is_known() {
        let all = attrs(&[("order-id", "1"), ("status", "new"), ("file-id", "2")]);
        for marker in CLICK_MARKERS {
            assert!(ClickAction::from_marker(marker, &all).is_some(), "{}", marker);
        }
        assert_eq!(ClickAction::from_marker("unknown-btn", &all), None);
    }
}
