pub mod items;
pub mod system;
pub mod users;
