//! Mock Zebra printer
//!
//! Bare TCP listener that logs whatever it receives. Stands in for a real
//! printer when testing the server or the agent by hand.

use std::net::SocketAddr;

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 9100;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("MOCK_PRINTER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Mock printer listening on {}", addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        tokio::spawn(handle_connection(socket, peer));
    }
}

async fn handle_connection(mut socket: TcpStream, peer: SocketAddr) {
    info!(peer = %peer, "Client connected");

    let mut buf = [0u8; 4096];
    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                info!(peer = %peer, bytes = n, "Received data");
                println!("-------------------------------------------");
                println!("{}", String::from_utf8_lossy(&buf[..n]));
                println!("-------------------------------------------");
            }
            Err(e) => {
                error!(peer = %peer, error = %e, "Socket error");
                break;
            }
        }
    }

    info!(peer = %peer, "Client disconnected");
}
