//! Headless pages of the console.
//!
//! Views own form text, confirmation state and navigation decisions; records
//! and request status live in the [`store`](crate::store) containers they are
//! handed. The CLI renders them, tests drive them directly.

pub mod auth;
pub mod composer;
pub mod edit;
pub mod fields;
pub mod forms;
pub mod guard;
pub mod list;
pub mod table;

pub use composer::Composer;
pub use edit::{EditMode, EditView, ParentOption, ResourceForm, SubmitError};
pub use fields::FieldError;
pub use guard::{resolve, AuthState, Route};
pub use list::{ListScreen, ListView, References, Tabular};
pub use table::Table;
