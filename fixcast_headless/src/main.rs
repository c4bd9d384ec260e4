// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use clap::{CommandFactory, Parser};
use location::{
    LocationSource, command_source::CommandSource, synthetic_source::SyntheticSource,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use stream::StreamServer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LISTEN_PORT: u16 = 8085;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serve synthetic fixes around a fixed base coordinate
    #[arg(short, long)]
    synthetic: bool,
    /// Acquire fixes from an external command, e.g. "termux-location"
    #[arg(short = 'c', long)]
    location_command: Option<String>,
}

fn create_location_source(cli: &Cli) -> Result<Arc<dyn LocationSource>, ()> {
    if let Some(command_line) = &cli.location_command {
        match CommandSource::from_command_line(command_line) {
            Ok(source) => Ok(Arc::new(source)),
            Err(e) => {
                error!("Failed to create CommandSource. Error: {}", e);
                Err(())
            }
        }
    } else if cli.synthetic {
        Ok(Arc::new(SyntheticSource::default()))
    } else {
        error!("No location source specified. Use --synthetic or --location-command");
        Cli::command().print_help().unwrap();
        Err(())
    }
}

#[tokio::main]
async fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = create_location_source(&cli)?;
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT));
    let server = StreamServer::bind(address, source).map_err(|e| {
        error!("Failed to bind on {}. Error: {}", address, e);
    })?;
    info!("Listening on {}", address);

    tokio::select! {
        result = server.run() => result.map_err(|e| {
            error!("Server stopped. Error: {}", e);
        }),
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down server");
            Ok(())
        }
    }
}
