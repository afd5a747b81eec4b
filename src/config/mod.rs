//! Configuration: the TOML config file and the saved session.

pub mod loader;
pub mod session;
pub mod types;

pub use loader::ConfigError;
pub use session::{SavedSession, SessionError, SessionStore};
pub use types::{AnimationConfig, Config, ListConfig, Revision, UiConfig};
