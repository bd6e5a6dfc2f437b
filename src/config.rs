use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result, SettingsError};
use crate::menu::{split_entry, MenuDescription, MenuItem};

pub const PROGRAM_NAME: &str = "TrayMenu";

pub const USAGE: &str = "\
Usage:  traymenu  qt|gtk [-d|--debug] [ --icon <filename> ] [ --allow-empty ]
                  ( --stdin | { --item '<label>: <command>' |
                                --submenu <label> |
                                --separator |
                                --submenu-end } )
";

/// Usage banner with the invoking program name in place of `traymenu`.
pub fn usage(program: &str) -> String {
    USAGE.replacen("traymenu", program, 1)
}

/// Text printed to stdout before exiting with status 1.
///
/// Command-line problems get a blank line and the usage banner; read
/// failures are reported alone.
pub fn failure_message(err: &Error, program: &str) -> String {
    if err.kind() == ErrorKind::Io {
        return format!("{err}\n");
    }
    format!("{err}\n\n{}", usage(program))
}

/// Which menu backend renders the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolkit {
    Qt,
    Gtk,
}

impl FromStr for Toolkit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("qt") {
            Ok(Toolkit::Qt)
        } else if s.eq_ignore_ascii_case("gtk") {
            Ok(Toolkit::Gtk)
        } else {
            Err(Error::UnknownToolkit(s.to_string()))
        }
    }
}

impl fmt::Display for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolkit::Qt => f.write_str("qt"),
            Toolkit::Gtk => f.write_str("gtk"),
        }
    }
}

/// Program configuration, derived once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    toolkit: Toolkit,
    debug: bool,
    icon: Option<PathBuf>,
    read_from_stdin: bool,
    allow_empty: bool,
    menu: MenuDescription,
}

impl Configuration {
    /// Parses argv-style tokens (without the program name).
    ///
    /// The first token selects the toolkit; it is checked before any flag.
    /// Flags taking an argument consume the next token whatever it looks like.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let toolkit: Toolkit = args.next().ok_or(Error::NoArguments)?.parse()?;

        let mut cfg = Configuration {
            toolkit,
            debug: false,
            icon: None,
            read_from_stdin: false,
            allow_empty: false,
            menu: MenuDescription::new(),
        };

        while let Some(kind) = args.next() {
            match kind.as_str() {
                "--debug" | "-d" => cfg.debug = true,
                "--icon" => {
                    let arg = required(args.next(), "--icon", "Filename for icon")?;
                    cfg.icon = Some(PathBuf::from(arg));
                }
                "--stdin" => cfg.read_from_stdin = true,
                "--allow-empty" => cfg.allow_empty = true,
                "--separator" => cfg.menu.push(MenuItem::Separator),
                "--submenu" => {
                    let arg = required(args.next(), "--submenu", "Name for submenu")?;
                    cfg.menu.push(MenuItem::submenu(arg));
                }
                "--submenu-end" => cfg.menu.push(MenuItem::SubmenuEnd),
                "--item" => {
                    let arg = required(args.next(), "--item", "Name for menu entry")?;
                    cfg.menu.push(split_entry(&arg)?);
                }
                _ => return Err(Error::BadItem(kind)),
            }
        }

        tracing::debug!(
            toolkit = %cfg.toolkit,
            items = cfg.menu.len(),
            stdin = cfg.read_from_stdin,
            "parsed command line"
        );
        Ok(cfg)
    }

    pub fn toolkit(&self) -> Toolkit {
        self.toolkit
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    pub fn read_from_stdin(&self) -> bool {
        self.read_from_stdin
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn menu(&self) -> &MenuDescription {
        &self.menu
    }

    /// Replaces the menu collected from argv (used with `--stdin`).
    pub fn with_menu(self, menu: MenuDescription) -> Self {
        Self { menu, ..self }
    }

    /// Folds in defaults from the settings file; command-line values win.
    pub fn with_settings(self, settings: &Settings) -> Self {
        Self {
            debug: self.debug || settings.debug,
            icon: self.icon.or_else(|| settings.icon.clone()),
            allow_empty: self.allow_empty || settings.allow_empty,
            ..self
        }
    }

    /// Fails with [`Error::NoMenuItems`] when no menu directive was given,
    /// unless empty menus are allowed. An ignored `--submenu-end` still counts.
    pub fn validate(self) -> Result<Self> {
        if self.menu.directive_count() == 0 && !self.allow_empty {
            return Err(Error::NoMenuItems);
        }
        Ok(self)
    }
}

fn required(arg: Option<String>, flag: &'static str, what: &'static str) -> Result<String> {
    arg.ok_or(Error::MissingArgument { flag, what })
}

/// Optional defaults read from `config.json`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub icon: Option<PathBuf>,

    /// Accept an empty menu instead of failing with "No menu items given".
    #[serde(default)]
    pub allow_empty: bool,
}

pub fn load_settings() -> Result<Option<Settings>> {
    let Some(path) = resolve_settings_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_settings_from(&path).map(Some)
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let settings_err = |source: SettingsError| Error::Settings {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(|e| settings_err(e.into()))?;
    let settings: Settings = serde_json::from_slice(&bytes).map_err(|e| settings_err(e.into()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn resolve_settings_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("TRAYMENU_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("traymenu").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("traymenu").join("config.json"));
    }

    None
}
