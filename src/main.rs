// Where is the ISS right now, and who is aboard?

use anyhow::{Context, Result};

mod config;
mod coord;
mod map;
mod open_notify;
mod report;
mod time;

use config::TrackerConfig;
use open_notify::OpenNotifyClient;

fn main() -> Result<()> {
    let config = TrackerConfig::default();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let client = OpenNotifyClient::new(config.api.clone());
    eprintln!("[INIT] Open Notify client for {}", config.api.base_url);

    let mut stdout = std::io::stdout();
    runtime.block_on(report::report_astronauts(&client, &mut stdout))?;
    let station = runtime.block_on(report::report_position(&client, &mut stdout))?;

    map::run(config, &runtime, &client, station)
}
