//! Printer transport for sending ZPL data
//!
//! Zebra-compatible printers accept raw command streams over TCP port 9100.
//! One connection per job: connect, write, close.

use crate::error::{PrintError, PrintResult};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument};

/// Default connect/write timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Network printer (raw TCP, port 9100)
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer
    ///
    /// `host` is an IP literal, v4 or v6.
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}:{}", host, port)))?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create from a socket address string (e.g., "192.168.1.100:9100")
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", addr)))?;

        Ok(Self {
            addr,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set connect/write timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send raw ZPL data to the printer
    ///
    /// Single attempt: connect, write everything, close the stream. Both the
    /// connect and the write phase are bounded by the configured timeout.
    #[instrument(skip(self, data), fields(addr = %self.addr, data_len = data.len()))]
    pub async fn send(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        info!("Connected, sending {} bytes", data.len());

        tokio::time::timeout(self.timeout, async {
            stream.write_all(data).await?;
            stream.flush().await?;
            // Half-close signals end of job to the printer
            stream.shutdown().await
        })
        .await
        .map_err(|_| PrintError::Timeout(format!("Write timeout: {}", self.addr)))??;

        info!("Print job sent successfully");
        Ok(())
    }
}
