//! Tray-icon menu that runs shell commands.
//!
//! A menu description comes from command-line flags ([`Configuration::from_args`])
//! or from one directive per line ([`stream::read_menu`]), and is then rendered
//! by a [`tray::Renderer`].

pub mod config;
pub mod error;
pub mod exec;
pub mod icon;
pub mod logging;
pub mod menu;
pub mod stream;
pub mod tray;

pub use config::{Configuration, Toolkit};
pub use error::{Error, ErrorKind, Result};
pub use menu::{MenuDescription, MenuItem};
