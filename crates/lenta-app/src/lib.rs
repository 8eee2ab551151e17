pub mod config;
pub mod logging;
pub mod shell;
pub mod state;

pub use config::Config;
pub use shell::App;
pub use state::{AuthMode, Tab, ViewState};
