mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod ports;
mod presentation;

use clap::Parser;

use crate::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let cli = cli::DemoCli::parse();

    // One thread: both lookups of a submission interleave on the same loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run(cli))
}
