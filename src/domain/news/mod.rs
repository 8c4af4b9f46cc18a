pub mod entity;
pub mod value_objects;

pub use entity::{Article, NewsPage, PageInfo};
pub use value_objects::{NewsQuery, SourceRef};
