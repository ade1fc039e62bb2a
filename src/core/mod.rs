//! # Core Application Logic
//!
//! This module contains Tangier Live's business logic.
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
//!                    │  • Session (timers)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`screen`]: The ten screens and their back edges
//! - [`navigation`]: Active screen, selected guide, language, theme
//! - [`language`]: Supported languages and translated labels
//! - [`chat`]: The chatbot transcript
//! - [`catalog`]: Guides, posts, places and other static content
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`timer`]: Cancelable single-shot timers
//! - [`session`]: Runs `update()` and carries out its effects
//! - [`config`]: `~/.tangier-live/config.toml` and env/CLI overrides

pub mod action;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod language;
pub mod navigation;
pub mod screen;
pub mod session;
pub mod state;
pub mod timer;
