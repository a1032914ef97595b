//! # TUI Components
//!
//! The pieces the contact form screen is made of.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: title line with status text
//! - `ErrorList`: one `Error: ...` line per visible validation error
//! - `Summary`: the last accepted submission
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextField`: labeled input with its own buffer and cursor
//! - `SubmitButton`: focusable button
//!
//! Components receive external data as props (public fields or constructor
//! arguments), never by reaching into `App`. The parent in `ui.rs` copies
//! what each component needs before rendering it:
//!
//! ```rust,ignore
//! field.status = app.field_status(field.field);
//! field.focused = tui.focus == Focus::Field(field.field);
//! field.render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Title + status line)
//! ├── error_list.rs    (Validation messages)
//! ├── submit_button.rs (Submit control)
//! ├── summary.rs       (Submitted values)
//! └── text_field/      (Input with cursor, wrapping, scrolling)
//! ```

pub mod error_list;
pub mod header;
pub mod submit_button;
pub mod summary;
pub mod text_field;

pub use error_list::ErrorList;
pub use header::Header;
pub use submit_button::{ButtonEvent, SubmitButton};
pub use summary::Summary;
pub use text_field::{FieldEvent, TextField};
