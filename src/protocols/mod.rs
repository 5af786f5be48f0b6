//! Protocol implementations.
//!
//! One module per selectable service mode. Every handler takes a generic
//! async stream so tests can drive it with scripted mock I/O instead of a
//! live socket.
//!
//! - `echo`: raw byte echo, no framing
//! - `feed`: push-only `Data Count` lines
//! - `command`: GET/QUIT request/response over the same counter

pub mod command;
pub mod echo;
pub mod feed;
