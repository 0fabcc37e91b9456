pub mod card;
pub mod detail;
pub mod form;
pub mod format;

pub use card::render_list;
pub use detail::render_detail;
pub use form::render_form;
