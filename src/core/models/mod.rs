//! Data models for `StudentHub`

pub mod catalog;
pub mod course;
pub mod selection;

pub use catalog::{Catalog, CatalogError, CourseFilter};
pub use course::{Course, CourseType};
pub use selection::Selection;
