use std::{env, io, process::ExitCode};

use anyhow::{Context, Result};

use traymenu::{
    config,
    icon::IconAsset,
    logging::{init_logging, LogConfig},
    stream, tray, Configuration,
};

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "traymenu".to_string());

    let config = match load_configuration(args) {
        Ok(config) => config,
        Err(e) => {
            print!("{}", config::failure_message(&e, &program));
            return ExitCode::from(1);
        }
    };

    init_logging(&LogConfig::from_debug(config.debug()));
    restore_default_interrupt();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(args: impl Iterator<Item = String>) -> traymenu::Result<Configuration> {
    let mut config = Configuration::from_args(args)?;
    if let Some(settings) = config::load_settings()? {
        config = config.with_settings(&settings);
    }
    if config.read_from_stdin() {
        let menu = stream::read_menu(io::stdin().lock())?;
        config = config.with_menu(menu);
    }
    config.validate()
}

fn run(config: &Configuration) -> Result<()> {
    let icon = IconAsset::from_config(config.icon()).context("prepare tray icon")?;
    let renderer = tray::backend(config.toolkit()).context("select tray backend")?;
    renderer
        .run(config, &icon)
        .with_context(|| format!("run {} tray", config.toolkit()))
}

// Ctrl-C in the launching terminal should just end the process.
#[cfg(unix)]
fn restore_default_interrupt() {
    // SAFETY: installs the default disposition; no handler code runs in signal context.
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn restore_default_interrupt() {}
