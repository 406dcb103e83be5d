//! Explicit view-selection state.
//!
//! All filter and selection state lives in one value owned by the top-level
//! caller and passed down to the views, instead of ambient global session
//! state. Each interaction constructs or updates a `ViewState` and hands it
//! to the page logic that needs it.

use crate::client::query::{LogQuery, Period, StatusFilter, TraceFilter};

/// Selection and filter state for one rendering pass.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Agent roster filters.
    pub agent_status: StatusFilter,
    pub agent_search: String,

    /// Logs page query.
    pub log_query: LogQuery,

    /// Trace page size/offset plus the locally applied status filter.
    pub trace_limit: u32,
    pub trace_offset: u32,
    pub trace_status: TraceFilter,

    /// Metrics aggregation window.
    pub period: Period,

    /// Currently selected entities, if any.
    pub selected_agent: Option<String>,
    pub selected_log: Option<String>,
    pub selected_trace: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            trace_limit: 20,
            ..Default::default()
        }
    }

    pub fn select_agent(&mut self, id: impl Into<String>) {
        self.selected_agent = Some(id.into());
    }

    pub fn select_log(&mut self, id: impl Into<String>) {
        self.selected_log = Some(id.into());
    }

    pub fn select_trace(&mut self, id: impl Into<String>) {
        self.selected_trace = Some(id.into());
    }
}
