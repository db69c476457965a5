pub mod browser;

mod navbar;
pub use navbar::TopBar;

pub mod homepage;
pub use homepage::Homepage;

pub mod sidebar;

pub mod demon;
pub use demon::DemonPage;

pub mod player;
pub use player::PlayerPage;

pub mod admin;
pub use admin::Admin;
