//! # Squash Scheduler Bot
//!
//! A Telegram bot that polls a group chat for squash attendance and turns
//! the answers into a fair court timetable.
//!
//! ## Features
//! - Weekly attendance poll with 45 and 90 minute options
//! - Inline court configuration with per-court booking counts
//! - Rotation scheduler: two players per court per quantum, forced rests
//!   after consecutive play, first claim on free slots for returning resters
//! - Court capacity decay after every booking block
//! - Health check endpoint for deployment probes

/// Bot commands, keyboards and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Poll answer bookkeeping
pub mod poll;
/// The timetable generation core
pub mod scheduler;
/// Background services like the health endpoint
pub mod services;
/// In-memory per-poll session state
pub mod state;
/// Rendering and validation helpers
pub mod utils;
