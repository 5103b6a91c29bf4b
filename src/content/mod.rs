//! Content module - content items, front-matter and collection loading

mod error;
mod frontmatter;
mod item;
pub mod loader;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use item::{ContentItem, Entry};
pub use loader::CollectionLoader;
