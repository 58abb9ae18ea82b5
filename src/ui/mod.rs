pub mod components;
pub mod layout;
pub mod num_input;
pub mod theme;
