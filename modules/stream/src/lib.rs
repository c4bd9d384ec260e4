// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Stream Modul for fixcast
//!
//! Provides the TCP server that pushes one location fix per second to every
//! connected client.

use location::LocationSource;
use std::{
    io::Error,
    net::SocketAddr,
    sync::Arc,
    time::Duration,
};
use tokio::{
    io::AsyncWriteExt,
    net::{TcpSocket, TcpStream},
};
use tracing::{debug, error, info};

/// The TCP server that streams location fixes to its clients
///
/// The server owns the listening socket and accepts connections in a loop.
/// Every accepted connection runs in its own task that repeatedly acquires a
/// fix from the configured [`LocationSource`], writes it to the socket as raw
/// JSON text and sleeps for one second. The tasks share nothing but the
/// read-only source, a failing connection never affects the others or the
/// accept loop.
pub struct StreamServer {
    listener: tokio::net::TcpListener,
    source: Arc<dyn LocationSource>,
}

impl StreamServer {
    /// Creates a new StreamServer that listens on the given address.
    ///
    /// The listening socket is created with address reuse enabled, so a
    /// restarted process can rebind immediately after the previous instance
    /// released the port.
    ///
    /// # Arguments
    ///
    /// * `address` - The address the server listens on
    /// * `source` - The location source every connection acquires its fixes from
    ///
    /// # Returns
    ///
    /// * `Ok(StreamServer)` - The bound StreamServer
    /// * `Err(io::Error)` - If binding or listening on the address fails
    pub fn bind(address: SocketAddr, source: Arc<dyn LocationSource>) -> Result<Self, Error> {
        let socket = if address.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(address)?;
        let listener = socket.listen(StreamServer::LISTEN_BACKLOG)?;
        Ok(StreamServer { listener, source })
    }

    /// Returns the local address the server listens on.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        self.listener.local_addr()
    }

    /// Accepts connections until an unrecoverable accept error occurs.
    ///
    /// Every accepted connection is handed to its own send loop task. An
    /// accept error ends the loop and is returned, it is fatal to the whole
    /// server.
    pub async fn run(&self) -> Result<(), Error> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(connection) => connection,
                Err(e) => {
                    error!("Failed to accept connection. Error: {}", e);
                    return Err(e);
                }
            };
            info!("Accepted connection from {}", peer);
            let source = self.source.clone();
            tokio::spawn(async move {
                send_loop(stream, peer, source).await;
            });
        }
    }

    const LISTEN_BACKLOG: u32 = 5;
}

/// Interval between two fixes on one connection.
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

async fn send_loop(mut stream: TcpStream, peer: SocketAddr, source: Arc<dyn LocationSource>) {
    loop {
        let sample = source.acquire().await;
        let payload = match sample.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize sample for {}. Error: {}", peer, e);
                break;
            }
        };
        debug!("Sending to {}: {}", peer, payload);
        // No delimiter is appended, clients read the stream with a streaming
        // JSON parser.
        if let Err(e) = stream.write_all(payload.as_bytes()).await {
            info!("Connection {} closed: {}", peer, e);
            break;
        }
        tokio::time::sleep(SAMPLE_INTERVAL).await;
    }
}
