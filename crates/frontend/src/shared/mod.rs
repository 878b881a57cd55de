pub mod ajax_form;
pub mod api_utils;
pub mod config;
pub mod dom;
pub mod download;
pub mod error;
pub mod format;
pub mod loading;
pub mod notifications;
pub mod slots;
pub mod table_utils;
pub mod ui_kit;
