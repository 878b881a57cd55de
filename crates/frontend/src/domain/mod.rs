pub mod order_files;
pub mod orders;
