pub mod hud;

pub use hud::Hud;
