//! Counting feed handler for the Tokio runtime.

use std::io;
use tokio::io::AsyncWrite;
use tracing::debug;

use crate::runtime::{send_all, Session, SessionEnd};

use super::data_count_line;

/// Handle a counting feed connection.
///
/// Pushes `Data Count: <N>` lines until a write fails. The handler never
/// reads, so the failed write is the disconnect signal rather than a
/// fault: the session ends cleanly.
pub async fn handle_connection<S>(mut stream: S) -> io::Result<SessionEnd>
where
    S: AsyncWrite + Unpin,
{
    let mut session = Session::new();

    loop {
        let line = data_count_line(session.next_count());
        session.begin_response();
        if let Err(e) = send_all(&mut stream, &line).await {
            session.peer_closed();
            debug!(error = %e, sent = session.sent_count(), "Feed write failed; peer gone");
            return Ok(SessionEnd::Disconnected);
        }
        session.response_sent();
    }
}
