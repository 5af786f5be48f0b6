//! Session state machine for client connections.
//!
//! Each accepted connection gets a fresh `Session` tracking its current
//! protocol state and the response sequence counter. The machine is pure
//! state (no socket I/O), so transitions can be exercised in isolation.

/// Why a session ended, as reported to the accept loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The peer closed the connection (EOF on read, or a failed write
    /// in feed mode).
    Disconnected,
    /// The client asked to stop with QUIT.
    Quit,
}

/// Terminal result recorded in the `Closed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session finished without an I/O failure (peer close or QUIT).
    Clean,
    /// The session ended on a read or write failure.
    Error,
}

/// Current state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Blocked on the next client request.
    AwaitingRequest,
    /// A response is being written out. Leaves only back to
    /// `AwaitingRequest` on success or to `Closed(Error)` on send failure.
    SendingResponse,
    /// Terminal; the socket is about to be dropped.
    Closed(Outcome),
}

/// Per-connection session state.
///
/// Created on accept, dropped when the connection closes. The counter
/// restarts at zero for every session; nothing carries across connections.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    sent_count: u64,
}

impl Session {
    /// Create a new session awaiting its first request.
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingRequest,
            sent_count: 0,
        }
    }

    /// Current state, for asserting on transitions in tests.
    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Responses sent so far.
    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    /// Advance the response counter; the first call returns 1.
    pub fn next_count(&mut self) -> u64 {
        self.sent_count += 1;
        self.sent_count
    }

    /// Transition to writing a response.
    pub fn begin_response(&mut self) {
        self.state = SessionState::SendingResponse;
    }

    /// The response was fully written; ready for the next request.
    pub fn response_sent(&mut self) {
        self.state = SessionState::AwaitingRequest;
    }

    /// A write failed mid-response.
    pub fn send_failed(&mut self) {
        self.state = SessionState::Closed(Outcome::Error);
    }

    /// A read failed.
    pub fn read_failed(&mut self) {
        self.state = SessionState::Closed(Outcome::Error);
    }

    /// The client sent QUIT.
    pub fn quit(&mut self) {
        self.state = SessionState::Closed(Outcome::Clean);
    }

    /// The peer closed the connection.
    pub fn peer_closed(&mut self) {
        self.state = SessionState::Closed(Outcome::Clean);
    }

    /// Whether the session has reached a terminal state.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, SessionState::Closed(_))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
