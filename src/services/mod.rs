pub mod categories;
pub mod picker;
pub mod providers;
pub mod titles;

pub use categories::{fetch_titles, validate_category};
pub use picker::MoviePicker;
pub use titles::clean_title;
