//! TCP server: bind the fixed endpoint and serve sessions one at a time.
//!
//! There is no task per connection. The accept loop runs a session to
//! completion before it accepts again, so clients arriving mid-session
//! queue in the kernel accept backlog and are drained in order.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::config::{Config, ServiceMode};
use crate::protocols::{command, echo, feed};
use crate::runtime::{bind_listener, SessionEnd};

/// Every deployment answers on the same loopback endpoint.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);

/// Bind the fixed endpoint and accept connections until accepting fails.
///
/// A bind failure is fatal and propagates to the caller. An accept
/// failure is logged and ends the loop normally.
pub async fn run(config: Config) -> io::Result<()> {
    let listener = bind_listener(LISTEN_ADDR)?;
    info!(addr = %LISTEN_ADDR, mode = ?config.mode, "Server listening");

    serve(listener, config.mode).await;
    Ok(())
}

/// Accept connections in a loop, running one session at a time.
///
/// Per-session errors are logged and the loop moves on to the next
/// client; only an accept failure ends the loop.
pub async fn serve(listener: TcpListener, mode: ServiceMode) {
    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, "Failed to accept connection");
                break;
            }
        };

        info!(peer = %addr, "Client connected");

        match handle_session(stream, mode).await {
            Ok(SessionEnd::Quit) => info!(peer = %addr, "Client quit"),
            Ok(SessionEnd::Disconnected) => info!(peer = %addr, "Client disconnected"),
            Err(e) => warn!(peer = %addr, error = %e, "Session ended with error"),
        }
    }
}

/// Run the handler for the configured service mode.
async fn handle_session(stream: TcpStream, mode: ServiceMode) -> io::Result<SessionEnd> {
    match mode {
        ServiceMode::Echo => echo::handle_connection(stream).await,
        ServiceMode::Feed => feed::handle_connection(stream).await,
        ServiceMode::Command => command::handle_connection(stream).await,
    }
}
