pub mod header_nav_item;
pub mod loading;
