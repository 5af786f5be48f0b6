//! Request classification for the command protocol.
//!
//! There is no framing layer: each chunk handed over by the socket is
//! classified as a whole, by its leading bytes. A request split across
//! two reads therefore classifies as two separate (likely unknown)
//! requests -- acceptable for the short commands this protocol carries.

/// A classified client request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Starts with `GET`: reply with the next `Data Count` line.
    Get,
    /// Starts with `QUIT`: close the connection without a reply.
    Quit,
    /// Anything else: reply `ERR` and keep the session open.
    Unknown,
}

/// Classify one received chunk by its prefix.
///
/// Matching is case-sensitive and ignores everything after the matched
/// prefix, including the client's line terminator.
pub fn classify(input: &[u8]) -> Request {
    if input.starts_with(b"GET") {
        Request::Get
    } else if input.starts_with(b"QUIT") {
        Request::Quit
    } else {
        Request::Unknown
    }
}

/// The reply sent for an unrecognized request.
pub fn response_err() -> &'static [u8] {
    b"ERR\n"
}
