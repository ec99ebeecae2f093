mod app;
mod dom;
mod palette;
mod render;
mod state;
mod util;

pub use app::run;
