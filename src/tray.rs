//! Rendering a parsed menu as a tray icon.

pub mod menu;
mod platform;

use anyhow::Result;

use crate::config::{Configuration, Toolkit};
use crate::icon::IconAsset;

pub use menu::{populate, MenuBuilder, MenuNode, MenuSpec};

pub trait Renderer {
    /// Shows the tray icon and blocks until the user picks Quit.
    fn run(&self, config: &Configuration, icon: &IconAsset) -> Result<()>;
}

pub fn backend(toolkit: Toolkit) -> Result<Box<dyn Renderer>> {
    platform::backend(toolkit)
}
