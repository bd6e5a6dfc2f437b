use crate::error::{Error, Result};

/// One directive of a menu description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Separator,
    SubmenuStart { label: String },
    SubmenuEnd,
    Entry { label: String, command: String },
}

impl MenuItem {
    pub fn submenu(label: impl Into<String>) -> Self {
        MenuItem::SubmenuStart {
            label: label.into(),
        }
    }

    pub fn entry(label: impl Into<String>, command: impl Into<String>) -> Self {
        MenuItem::Entry {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// Ordered menu items whose submenu scopes never close below the top level.
///
/// A `SubmenuEnd` pushed while no scope is open is dropped, so replaying the
/// items as a stack never underflows. Scopes still open at the end are allowed.
/// Dropped ends still count as directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDescription {
    items: Vec<MenuItem>,
    depth: usize,
    directives: usize,
}

impl MenuDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.directives += 1;
        match item {
            MenuItem::SubmenuStart { .. } => self.depth += 1,
            MenuItem::SubmenuEnd => {
                if self.depth == 0 {
                    tracing::debug!("ignoring submenu end without open submenu");
                    return;
                }
                self.depth -= 1;
            }
            MenuItem::Separator | MenuItem::Entry { .. } => {}
        }
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of submenus opened but not yet closed.
    pub fn open_scopes(&self) -> usize {
        self.depth
    }

    /// Directives pushed so far, including ignored submenu ends.
    pub fn directive_count(&self) -> usize {
        self.directives
    }
}

impl FromIterator<MenuItem> for MenuDescription {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        let mut menu = MenuDescription::new();
        menu.extend(iter);
        menu
    }
}

impl Extend<MenuItem> for MenuDescription {
    fn extend<I: IntoIterator<Item = MenuItem>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a> IntoIterator for &'a MenuDescription {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Splits `"<label>: <command>"` at the first `:`, trimming both halves.
pub fn split_entry(arg: &str) -> Result<MenuItem> {
    let Some((label, command)) = arg.split_once(':') else {
        return Err(Error::MissingCommandSeparator(arg.to_string()));
    };
    Ok(MenuItem::entry(label.trim(), command.trim()))
}
