mod events;
mod mouse_click;
mod mouse_hover;
mod render;
mod state;

pub use state::App;
