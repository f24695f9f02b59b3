//! Boundary glue around `tractor-core`: the transport and audio
//! collaborator contracts, the room session that pumps inbound envelopes
//! through the store, and the one piece of persisted local state (the
//! player's display name).

pub mod connection;
pub mod persistence;
pub mod session;

pub use connection::*;
pub use persistence::*;
pub use session::*;
