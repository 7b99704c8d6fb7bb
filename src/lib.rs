pub mod api;
pub mod config;
pub mod consts;
pub mod curves;
pub mod error;
pub mod scenarios;
pub mod scorer;
// cmd and reports belong to the binary crate (main.rs).
