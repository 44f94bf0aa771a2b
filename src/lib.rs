pub mod app_config;
mod config_loader;
pub mod domain;
pub mod extensions;
pub mod narrative;
pub mod planner;
pub mod segments;
pub mod solar;
