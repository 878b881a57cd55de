pub mod actions;
pub mod api;
pub mod price;
pub mod row;
