pub mod chances;
pub mod controls_panel;
pub mod keyboard;
pub mod outcome_panel;
pub mod word;

pub use chances::ChancesWidget;
pub use controls_panel::ControlsPanel;
pub use keyboard::KeyboardWidget;
pub use outcome_panel::OutcomePanel;
pub use word::WordWidget;
