//! Derived-view shaping.
//!
//! Turns raw API payloads into display-ready structures: filtered rosters,
//! truncated log previews, display durations, and zero-safe metric summaries.
//! Rendering itself lives in the CLI layer; nothing here touches the network.

pub mod agents;
pub mod logs;
pub mod metrics;
pub mod overview;
pub mod state;
pub mod traces;

pub use state::ViewState;
