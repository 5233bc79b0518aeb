//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar (schema file, table dimensions, status)
//! - `NoticeDialog`: Blocking message dialog
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep persistent state in `TuiState` and emit high-level
//! events, rendered each frame through a transient wrapper:
//! - `Form` / `FormState`: Schema-driven entry form
//! - `RecordTable` / `RecordTableState`: Record table with hover cursor
//! - `SchemaEditor` / `SchemaEditorState`: Modal schema customization
//! - `PathPrompt` / `PathPromptState`: Modal workbook path input
//!
//! Each component file contains its state types, event types, rendering
//! logic, event handling, and tests.

pub mod form;
pub mod notice;
pub mod path_prompt;
pub mod record_table;
pub mod schema_editor;
mod title_bar;

pub use form::{Form, FormEvent, FormState};
pub use notice::NoticeDialog;
pub use path_prompt::{PathEvent, PathPrompt, PathPromptState, PromptPurpose};
pub use record_table::{RecordTable, RecordTableState};
pub use schema_editor::{SchemaEditor, SchemaEditorEvent, SchemaEditorState};
pub use title_bar::TitleBar;
