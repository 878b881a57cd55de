/// Статусы заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    InProgress,
    Ready,
    WaitingPayment,
    Sent,
    Cancelled,
    Revision,
}

impl OrderStatus {
    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "Новый",
            OrderStatus::InProgress => "В работе",
            OrderStatus::Ready => "Готов",
            OrderStatus::WaitingPayment => "Ожидает оплаты",
            OrderStatus::Sent => "Отправлен",
            OrderStatus::Cancelled => "Отменен",
            OrderStatus::Revision => "На доработке",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            OrderStatus::New => "🆕",
            OrderStatus::InProgress => "⏳",
            OrderStatus::Ready => "✅",
            OrderStatus::WaitingPayment => "💰",
            OrderStatus::Sent => "📤",
            OrderStatus::Cancelled => "❌",
            OrderStatus::Revision => "🔄",
        }
    }

    /// Подпись для ячейки таблицы: эмодзи и название
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji(), self.display_name())
    }

    /// Парсинг из кода API
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(OrderStatus::New),
            "in_progress" => Some(OrderStatus::InProgress),
            "ready" => Some(OrderStatus::Ready),
            "waiting_payment" => Some(OrderStatus::WaitingPayment),
            "sent" => Some(OrderStatus::Sent),
            "cancelled" => Some(OrderStatus::Cancelled),
            "revision" => Some(OrderStatus::Revision),
            _ => None,
        }
    }
}
