use std::mem;

use crate::menu::{MenuDescription, MenuItem};

/// Toolkit-side sink for a menu description.
///
/// `Menu` is an opaque handle to one (sub)menu; [`populate`] keeps a stack of
/// them mirroring the nesting of the description.
pub trait MenuBuilder {
    type Menu: Clone;

    fn root(&mut self) -> Self::Menu;
    fn separator(&mut self, menu: &Self::Menu);
    fn entry(&mut self, menu: &Self::Menu, label: &str, command: &str);
    fn submenu(&mut self, menu: &Self::Menu, label: &str) -> Self::Menu;
}

/// Replays `items` against `builder`.
///
/// A submenu end never pops the root; submenus still open at the end stay as they are.
pub fn populate<B: MenuBuilder>(builder: &mut B, items: &MenuDescription) {
    let root = builder.root();
    let mut stack: Vec<B::Menu> = Vec::new();

    for item in items {
        let current = stack.last().unwrap_or(&root).clone();
        match item {
            MenuItem::Separator => builder.separator(&current),
            MenuItem::Entry { label, command } => builder.entry(&current, label, command),
            MenuItem::SubmenuStart { label } => {
                let submenu = builder.submenu(&current, label);
                stack.push(submenu);
            }
            MenuItem::SubmenuEnd => {
                stack.pop();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Separator,
    Entry { label: String, command: String },
    Submenu { label: String, children: Vec<MenuNode> },
    Quit,
}

/// Nested menu ready to be handed to a tray backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSpec {
    pub items: Vec<MenuNode>,
}

impl MenuSpec {
    pub fn new(items: Vec<MenuNode>) -> Self {
        Self { items }
    }

    pub fn from_description(menu: &MenuDescription) -> Self {
        let mut builder = TreeBuilder::default();
        populate(&mut builder, menu);
        Self::new(builder.finish())
    }

    /// Appends a separator and a Quit action to the top level.
    pub fn with_quit(mut self) -> Self {
        self.items.push(MenuNode::Separator);
        self.items.push(MenuNode::Quit);
        self
    }

    /// Number of command entries at any depth.
    pub fn entry_count(&self) -> usize {
        fn count(nodes: &[MenuNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    MenuNode::Entry { .. } => 1,
                    MenuNode::Submenu { children, .. } => count(children),
                    MenuNode::Separator | MenuNode::Quit => 0,
                })
                .sum()
        }
        count(&self.items)
    }
}

enum Slot {
    Separator,
    Entry { label: String, command: String },
    Submenu { label: String, menu: usize },
}

/// Builds a [`MenuSpec`] tree; handles are indices into a flat list of menus.
struct TreeBuilder {
    menus: Vec<Vec<Slot>>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            menus: vec![Vec::new()],
        }
    }
}

impl TreeBuilder {
    fn finish(mut self) -> Vec<MenuNode> {
        self.assemble(0)
    }

    fn assemble(&mut self, menu: usize) -> Vec<MenuNode> {
        let slots = mem::take(&mut self.menus[menu]);
        let mut nodes = Vec::with_capacity(slots.len());
        for slot in slots {
            nodes.push(match slot {
                Slot::Separator => MenuNode::Separator,
                Slot::Entry { label, command } => MenuNode::Entry { label, command },
                Slot::Submenu { label, menu } => MenuNode::Submenu {
                    label,
                    children: self.assemble(menu),
                },
            });
        }
        nodes
    }
}

impl MenuBuilder for TreeBuilder {
    type Menu = usize;

    fn root(&mut self) -> usize {
        0
    }

    fn separator(&mut self, menu: &usize) {
        self.menus[*menu].push(Slot::Separator);
    }

    fn entry(&mut self, menu: &usize, label: &str, command: &str) {
        self.menus[*menu].push(Slot::Entry {
            label: label.to_string(),
            command: command.to_string(),
        });
    }

    fn submenu(&mut self, menu: &usize, label: &str) -> usize {
        let id = self.menus.len();
        self.menus.push(Vec::new());
        self.menus[*menu].push(Slot::Submenu {
            label: label.to_string(),
            menu: id,
        });
        id
    }
}
