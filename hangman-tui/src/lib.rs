pub mod config;
pub mod prelude;
pub mod state;
pub mod ui;

pub use config::{Cli, Config};
pub use state::{Action, AppState, Direction};
