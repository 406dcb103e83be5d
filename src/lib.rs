//! Agentmon - Monitoring client for multi-agent AI systems
//!
//! This library provides a typed client for the agent-monitoring REST API,
//! deterministic synthetic fallbacks for offline use, and the view-shaping
//! logic that turns raw payloads into display-ready structures.

pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod views;
