pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod download;
pub mod icons;
pub mod modal;
