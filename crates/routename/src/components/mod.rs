pub mod load_error;
pub mod route_page;
