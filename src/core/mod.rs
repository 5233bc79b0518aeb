//! # Core Application Logic
//!
//! This module contains gridform's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Schema + Records     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   xlsx     │      │   disk     │
//!     │  Adapter   │      │   codec    │      │ (schema    │
//!     │ (ratatui)  │      │            │      │  file)     │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`schema`]: Field definitions and their JSON persistence
//! - [`records`]: The in-memory row store
//! - [`config`]: TOML configuration and override resolution

pub mod action;
pub mod config;
pub mod records;
pub mod schema;
pub mod state;
