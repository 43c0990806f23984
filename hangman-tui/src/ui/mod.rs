pub mod hit_map;
pub mod input;
pub mod render_loop;
pub mod theme;
pub mod widgets;

pub use hit_map::HitMap;
pub use render_loop::{draw, run_app};
pub use theme::{Theme, ThemeChoice};
