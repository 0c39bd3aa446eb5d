//! Main entry point for the terminal client.
//!
//! Parses the command line, connects to the game server, starts the `GameClient`
//! actor on the inbound event stream and then reads commands from stdin.

use actix::prelude::*;
use clap::Parser;
use log::info;

use caro_client::client::{connect, GameClient};
use caro_client::config::{Cli, ClientConfig};
use caro_client::console::{self, ConsoleView};
use caro_client::engine::SyncEngine;

#[actix::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let config = ClientConfig::try_from(Cli::parse())?;
    let (transport, inbound) = connect(&config.server_url).await?;
    info!("[Main] Connected to {}", config.server_url);

    let engine = SyncEngine::new(config.engine());
    let tick_interval = config.tick_interval;
    let client = GameClient::create(move |ctx| {
        ctx.add_stream(inbound);
        GameClient::new(engine, transport, ConsoleView::new()).with_tick_interval(tick_interval)
    });

    println!("{}", console::input::HELP);
    console::input::run(client).await?;

    System::current().stop();
    Ok(())
}
