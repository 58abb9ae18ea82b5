pub mod form;
pub mod state;
pub mod timer;
