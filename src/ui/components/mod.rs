pub mod hud;
pub mod split_diagram;
pub mod start_screen;
