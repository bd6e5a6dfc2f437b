use anyhow::Result;

use super::Renderer;
use crate::config::Toolkit;

#[cfg(target_os = "linux")]
mod linux;

pub fn backend(toolkit: Toolkit) -> Result<Box<dyn Renderer>> {
    #[cfg(target_os = "linux")]
    {
        return Ok(Box::new(linux::StatusNotifierRenderer::new(toolkit)));
    }

    #[cfg(not(target_os = "linux"))]
    {
        use anyhow::bail;
        bail!("Unsupported OS for the {toolkit} tray (only Linux desktops are supported).");
    }
}
