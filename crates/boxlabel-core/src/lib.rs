pub mod classes;
pub mod codec;
pub mod config;
pub mod error;
pub mod images;
pub mod label;
pub mod session;
