pub mod api_message;

pub use api_message::ApiMessage;
