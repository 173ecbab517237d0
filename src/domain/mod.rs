//! Domain types shared by the systems and the WASM API

pub mod config;
pub mod error;
pub mod modes;
pub mod shapes;
