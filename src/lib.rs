pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
