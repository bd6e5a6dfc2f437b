use std::{
    path::PathBuf,
    sync::mpsc::{self, Sender},
    thread,
};

use anyhow::{anyhow, Context, Result};
use ksni::menu::{StandardItem, SubMenu};

use crate::config::{Configuration, Toolkit, PROGRAM_NAME};
use crate::exec::CommandRunner;
use crate::icon::{default_pixmap, IconAsset, Pixmap};
use crate::tray::{MenuNode, MenuSpec, Renderer};

const PIXMAP_SIZE: u32 = 48;

/// StatusNotifierItem tray over D-Bus; serves both toolkit selectors.
pub struct StatusNotifierRenderer {
    toolkit: Toolkit,
}

impl StatusNotifierRenderer {
    pub fn new(toolkit: Toolkit) -> Self {
        Self { toolkit }
    }
}

impl Renderer for StatusNotifierRenderer {
    fn run(&self, config: &Configuration, icon: &IconAsset) -> Result<()> {
        let spec = MenuSpec::from_description(config.menu()).with_quit();
        let (quit_tx, quit_rx) = mpsc::channel();

        let tray = TrayMenu {
            spec,
            runner: CommandRunner::new(config.debug()),
            toolkit: self.toolkit,
            icon_theme_path: icon.theme_path(),
            icon_name: icon.name(),
            pixmap: icon.is_generated().then(|| default_pixmap(PIXMAP_SIZE)),
            quit: quit_tx,
        };

        let service = ksni::TrayService::new(tray);
        let handle = service.handle();
        let worker = thread::Builder::new()
            .name("tray".to_string())
            .spawn(move || service.run().map_err(|e| e.to_string()))
            .context("start tray thread")?;

        tracing::info!(toolkit = %self.toolkit, icon = %icon.path().display(), "tray running");

        // The sender lives in the tray, so this also returns if the service dies.
        if quit_rx.recv().is_ok() {
            tracing::debug!("quit requested");
            handle.shutdown();
            return Ok(());
        }

        match worker.join() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(anyhow!(e)).context("tray service"),
            Err(_) => Err(anyhow!("tray thread panicked")),
        }
    }
}

struct TrayMenu {
    spec: MenuSpec,
    runner: CommandRunner,
    toolkit: Toolkit,
    icon_theme_path: PathBuf,
    icon_name: String,
    // Only for the generated icon; a user icon is found through the theme path.
    pixmap: Option<Pixmap>,
    quit: Sender<()>,
}

impl TrayMenu {
    fn items(&self, nodes: &[MenuNode]) -> Vec<ksni::MenuItem<Self>> {
        nodes.iter().map(|node| self.item(node)).collect()
    }

    fn item(&self, node: &MenuNode) -> ksni::MenuItem<Self> {
        match node {
            MenuNode::Separator => ksni::MenuItem::Separator,
            MenuNode::Entry { label, command } => {
                let runner = self.runner;
                let command = command.clone();
                StandardItem {
                    label: label.clone(),
                    activate: Box::new(move |_| runner.run(&command)),
                    ..Default::default()
                }
                .into()
            }
            MenuNode::Submenu { label, children } => SubMenu {
                label: label.clone(),
                submenu: self.items(children),
                ..Default::default()
            }
            .into(),
            MenuNode::Quit => {
                let quit = self.quit.clone();
                StandardItem {
                    label: "Quit".into(),
                    icon_name: "application-exit".into(),
                    activate: Box::new(move |_| {
                        let _ = quit.send(());
                    }),
                    ..Default::default()
                }
                .into()
            }
        }
    }
}

impl ksni::Tray for TrayMenu {
    // NOTE: some hosts misbehave without a stable `id`.
    fn id(&self) -> String {
        env!("CARGO_PKG_NAME").into()
    }

    fn title(&self) -> String {
        PROGRAM_NAME.into()
    }

    fn category(&self) -> ksni::Category {
        match self.toolkit {
            Toolkit::Gtk => ksni::Category::SystemServices,
            Toolkit::Qt => ksni::Category::ApplicationStatus,
        }
    }

    fn icon_theme_path(&self) -> String {
        self.icon_theme_path.to_string_lossy().into_owned()
    }

    fn icon_name(&self) -> String {
        self.icon_name.clone()
    }

    fn icon_pixmap(&self) -> Vec<ksni::Icon> {
        self.pixmap
            .iter()
            .map(|px| ksni::Icon {
                width: px.width as i32,
                height: px.height as i32,
                data: px.to_be_bytes(),
            })
            .collect()
    }

    fn menu(&self) -> Vec<ksni::MenuItem<Self>> {
        self.items(&self.spec.items)
    }
}
