use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use crate::client::HttpScheduleApi;
use crate::config::PickConfig;
use crate::dialog::ports::{Host, LogInvalidator};
use crate::dialog::{self, DialogView, Options, Phase, Ports, Props};
use crate::domain::offset::SystemClock;

/// Host for a terminal session: there is no list to refocus, so it reports.
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn set_is_open(&self, open: bool) {
        log::info!("schedule dialog {}", if open { "opened" } else { "closed" });
    }

    fn set_switching_id(&self, candidate_id: u32) {
        log::info!("switching focus to candidate {}", candidate_id);
    }
}

fn print_schedules(title: &str, view: &DialogView) {
    println!("{} ({}):", title, view.timezone);
    if view.schedules.is_empty() {
        println!("  no slots");
    }
    for (index, schedule) in view.schedules.iter().enumerate() {
        println!("  [{}] {}", index, schedule);
    }
}

pub async fn run(config: PickConfig) -> Result<()> {
    let ports = Ports {
        api: Arc::new(HttpScheduleApi::new(config.api_url.clone())),
        invalidator: Arc::new(LogInvalidator),
        host: Arc::new(ConsoleHost),
        clock: Arc::new(SystemClock),
    };
    let props = Props {
        candidate_id: config.candidate_id,
        position_id: config.position_id,
        lang: config.lang,
    };
    let options = Options {
        close_delay: Duration::from_millis(config.close_delay_ms),
        ..Options::default()
    };
    let (handle, task) = dialog::open(props, ports, options);

    let view = handle
        .wait_for(|view| view.phase != Phase::Loading)
        .await
        .context("dialog closed while loading schedules")?;
    if let Some(error) = view.error {
        handle.close().await?;
        task.await?;
        bail!("{}", error);
    }

    if let Some(timezone) = config.timezone {
        handle.set_timezone(timezone).await?;
    }
    if config.replace {
        handle.set_schedules(config.slots).await?;
    } else {
        for slot in config.slots.into_iter() {
            handle.add_slot(slot).await?;
        }
    }
    print_schedules("Picked slots", &handle.snapshot().await?);

    if config.dry_run {
        handle.close().await?;
        task.await?;
        return Ok(());
    }

    handle.submit().await?;
    let view = handle
        .wait_for(|view| matches!(view.phase, Phase::Closed | Phase::Failed))
        .await
        .ok_or_else(|| anyhow!("dialog ended before the submit completed"))?;
    if let Some(error) = view.error {
        handle.close().await?;
        task.await?;
        bail!("{}", error);
    }
    task.await?;

    println!("Schedules saved for candidate {}", config.candidate_id);
    Ok(())
}
