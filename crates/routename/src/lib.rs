pub mod app;
pub mod climber;
pub mod components;
pub mod config;
pub mod loader;
pub mod palette;
pub mod plan;
pub mod route_name;
pub mod util;
