pub mod api;
pub mod clipboard;
pub mod config;
pub mod date_utils;
pub mod logging;
pub mod storage;
