pub mod database;
pub mod filter;
pub mod form;
pub mod notice;

pub use database::{CatalogError, PropertyDatabase};
pub use form::{FieldError, FormField, FormState, PropertyForm};
pub use notice::{Notice, NoticeLevel};
