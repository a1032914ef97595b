//! # Core Form Logic
//!
//! This module contains the contact form's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FormState (values)   │
//!                    │  • validate() (rules)   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
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
//! - [`field`]: The `Field` enum — names, labels, tab order
//! - [`form`]: `FormState` and the frozen `Submission`
//! - [`validate`]: The rule table and `ErrorSet`
//! - [`state`]: The `App` struct — all form state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod field;
pub mod form;
pub mod state;
pub mod validate;
