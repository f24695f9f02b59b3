//! Client-side view core for a Tractor (Shengji) game: mirrors the
//! authoritative event stream, derives notifications and audio cues, and
//! resolves seat geometry and the viewer's one primary action. Keep this
//! crate free of IO and platform concerns; callers pass `now_ms` wherever a
//! clock is needed.

pub mod affordance;
pub mod cards;
pub mod events;
pub mod intents;
pub mod notify;
pub mod seating;
pub mod state;
pub mod store;
pub mod wire;

pub use affordance::*;
pub use cards::*;
pub use events::*;
pub use intents::*;
pub use notify::*;
pub use seating::*;
pub use state::*;
pub use store::*;
pub use wire::*;
