//! TUI widgets for the story presentation

pub mod background;
pub mod chart;
pub mod intro_screen;
pub mod navigation;
pub mod page_panel;
pub mod sensor;

pub use background::BackgroundWidget;
pub use chart::ChartPanelWidget;
pub use intro_screen::IntroScreenWidget;
pub use navigation::NavigationWidget;
pub use page_panel::PagePanelWidget;
pub use sensor::SensorOverlayWidget;
