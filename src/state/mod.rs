//! Application state module

mod app_state;
pub mod editor;
pub mod form;
pub mod notice;
pub mod preview;
pub mod store;
pub mod templates;

pub use app_state::*;
pub use form::{BuilderMode, FieldType, FormData, FormField, FormTheme};
pub use notice::{Notice, NoticeLevel};
pub use store::FormStore;
