//! Shared layout components.

pub mod app_navbar;
pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

mod loading;
pub use loading::{ErrorMessage, Loading};
