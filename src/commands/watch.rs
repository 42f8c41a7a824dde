use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use localetypes::{ModuleResolver, SessionPhase};

use super::{HostedSession, Project};

const RESCAN_INTERVAL: Duration = Duration::from_millis(500);

pub fn cmd_watch(project: &Project, json: bool) -> Result<()> {
    let hosted = HostedSession::start(project, "watch", json);
    let Some(config) = hosted.session.config() else {
        anyhow::bail!("plugin options rejected; see `localetypes check`");
    };
    if hosted.session.phase() != SessionPhase::Active {
        anyhow::bail!("module resolution could not be hooked");
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !json {
        eprintln!("Watching {}", config.locales_dir().display());
        eprintln!("Press Ctrl+C to stop\n");
    }

    // An editor opening a file that imports the module does the same
    hosted.hook.resolve_module_names(
        &[config.module_name().to_string()],
        &project.entry_file(),
        None,
    )?;

    // Watches only cover files that existed at the last resolution
    let mut last_scan = Instant::now();
    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));
        if last_scan.elapsed() < RESCAN_INTERVAL {
            continue;
        }
        last_scan = Instant::now();
        if let Err(e) = hosted.session.refresh_if_locales_changed() {
            tracing::warn!(error = %e, "failed to refresh locale watches");
        }
    }

    if !json {
        eprintln!("\nShutting down...");
    }
    hosted.session.dispose();
    Ok(())
}
