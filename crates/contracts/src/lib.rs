//! DTO, которыми админ-панель обменивается с backend API заказов.

pub mod domain;
pub mod enums;
pub mod shared;
