//! Folio Core Library
//!
//! Site metadata, page query declarations and the shapes of the query results
//! the build pipeline hands back to page templates.

pub mod config;
pub mod content;
pub mod error;
pub mod page_data;
pub mod pages;
pub mod path;
pub mod query;

pub use config::{Config, DirectoryPage, MenuItem, PageMetadata, UserMetadata};
pub use content::{
    DirectoryNode, FileNode, ListingData, MarkdownRemark, Nodes, PostData, PostFrontmatter,
    ProjectFrontmatter, Slug,
};
pub use error::{CoreError, Result};
pub use page_data::{PageData, page_data_path};
pub use pages::{PROJECTS_DIRECTORY, SitePage, Template, site_pages};
pub use path::{capitalize, in_directory, top_level_path_name};
pub use query::{PageQuery, PostEntries};
