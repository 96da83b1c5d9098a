pub mod app;
pub mod logging;
pub mod pad;
pub mod settings;
