//! # Workdesk Core Library
//!
//! Core logic for the Workdesk AI-workspace companion. Workdesk follows a
//! CLI-first philosophy: every operation is available through the standalone
//! `workdesk` binary, and any GUI layer is a thin shell over this library.
//!
//! ## Architecture
//!
//! - **Timer**: the pomodoro session state machine. Caller-driven — the host
//!   delivers one tick per second and the engine never touches a clock for
//!   countdown progress
//! - **Api**: thin JSON/HTTP client for the external workspace backend
//!   (notes, todos, projects, tasks, chat, search). The backend owns all
//!   data; this crate only forwards requests
//! - **Workspace**: wire-format data model, overlay (panel) open/closed
//!   state, and local suggestion/highlight matching
//! - **Config**: TOML configuration with dot-path get/set
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: pomodoro state machine
//! - [`Ticker`]: cancellable once-per-second tick source
//! - [`ApiClient`]: backend HTTP client
//! - [`Config`]: application configuration

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod timer;
pub mod workspace;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, ConfigError, CoreError, Result};
pub use events::Event;
pub use timer::{
    CompletedSession, CompletionNotice, Mode, Notifier, NullNotifier, SessionLog, SessionTimer,
    Ticker, TickerHandle, TimerConfig, TimerStats,
};
