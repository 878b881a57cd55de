pub mod order_status;
pub mod work_type;

pub use order_status::OrderStatus;
pub use work_type::WorkType;
