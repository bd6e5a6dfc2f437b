use std::{
    fs,
    path::{self, Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

const DEFAULT_ICON_FILE: &str = "traymenu.svg";

const BACKGROUND: u32 = 0xFF1B1E24; // AARRGGBB
const STROKE: u32 = 0xFF2A9DF4;
const ACCENT: u32 = 0xFF66D9EF;

const DEFAULT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 32 32">
  <rect x="0" y="0" width="32" height="32" rx="6" fill="#1B1E24"/>
  <rect x="6" y="8" width="20" height="3" rx="1" fill="#66D9EF"/>
  <rect x="6" y="15" width="20" height="3" rx="1" fill="#2A9DF4"/>
  <rect x="6" y="22" width="20" height="3" rx="1" fill="#2A9DF4"/>
</svg>
"##;

/// The icon handed to the renderer.
///
/// A generated icon lives in its own temp dir, removed when the asset is dropped.
#[derive(Debug)]
pub enum IconAsset {
    User(PathBuf),
    Generated { dir: TempDir, path: PathBuf },
}

impl IconAsset {
    /// A configured path is made absolute against the current directory.
    pub fn from_config(icon: Option<&Path>) -> Result<Self> {
        match icon {
            Some(path) => {
                let path = path::absolute(path)
                    .with_context(|| format!("resolve icon path {}", path.display()))?;
                Ok(IconAsset::User(path))
            }
            None => Self::generate(),
        }
    }

    /// Writes the default SVG icon to a fresh temporary directory.
    pub fn generate() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("traymenu-")
            .tempdir()
            .context("create temp dir for icon")?;
        let path = dir.path().join(DEFAULT_ICON_FILE);
        fs::write(&path, DEFAULT_SVG).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "generated default icon");
        Ok(IconAsset::Generated { dir, path })
    }

    pub fn path(&self) -> &Path {
        match self {
            IconAsset::User(path) => path,
            IconAsset::Generated { path, .. } => path,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, IconAsset::Generated { .. })
    }

    /// Directory to search for [`IconAsset::name`] (icon-theme style lookup).
    pub fn theme_path(&self) -> PathBuf {
        if let IconAsset::Generated { dir, .. } = self {
            return dir.path().to_path_buf();
        }
        self.path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// File stem of the icon, as icon-theme lookups expect.
    pub fn name(&self) -> String {
        self.path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Raw ARGB pixels, row-major, top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub argb: Vec<u32>,
}

impl Pixmap {
    /// ARGB32 in network byte order.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.argb.iter().flat_map(|px| px.to_be_bytes()).collect()
    }
}

/// Draws the default glyph (three menu bars on a dark square) at `size`x`size`.
pub fn default_pixmap(size: u32) -> Pixmap {
    let size = size.max(8);
    let mut argb = vec![BACKGROUND; (size * size) as usize];

    let margin = size * 6 / 32;
    let bar = (size * 3 / 32).max(1);
    for (row, color) in [(8, ACCENT), (15, STROKE), (22, STROKE)] {
        let top = size * row / 32;
        for y in top..(top + bar).min(size) {
            for x in margin..size - margin {
                argb[(y * size + x) as usize] = color;
            }
        }
    }

    Pixmap {
        width: size,
        height: size,
        argb,
    }
}
