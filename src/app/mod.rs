pub mod application;
pub mod messages;
pub mod store_menu;

pub use application::Application;
