//! Listening socket construction.
//!
//! The listener is built through socket2 so the listen backlog is explicit:
//! while one client is being served, further connection attempts queue in
//! the OS backlog (up to `SOMAXCONN`) instead of being turned away.

use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a bound, listening TCP socket with the platform's maximum backlog.
///
/// The address is a parameter so tests can bind an ephemeral port; the
/// server itself always passes its fixed endpoint. Failures here are fatal
/// to the process.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = socket2::Socket::new(
        match addr {
            SocketAddr::V4(_) => socket2::Domain::IPV4,
            SocketAddr::V6(_) => socket2::Domain::IPV6,
        },
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(libc::SOMAXCONN)?;

    TcpListener::from_std(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_bind_ephemeral_port_and_accept() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert_ne!(addr.port(), 0);

        let client = TcpStream::connect(addr);
        let (accepted, _) = tokio::join!(listener.accept(), client);
        let (_stream, peer) = accepted.unwrap();
        assert!(peer.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_second_listener_on_same_port_fails() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(bind_listener(addr).is_err());
    }
}
