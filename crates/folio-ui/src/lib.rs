//! Folio UI Components
//!
//! Leptos components the page templates are composed of.
//!
//! # Components
//!
//! ## Layout
//! - [`Layout`] - Navbar, content area and footer
//! - [`PageTitle`] - Page heading
//! - [`PageDescription`] - Short text under the heading
//!
//! ## Navigation
//! - [`NavBar`] - Site menu
//! - [`Sidebar`] - Directories of the current category
//! - [`TableOfContents`] - Post table of contents with the active heading highlighted
//!
//! ## Lists
//! - [`PostItems`] - Dated posts with excerpts
//! - [`ProjectList`] - Project cards
//!
//! ## Post
//! - [`PostBody`] - Rendered Markdown in the `#markdown` container
//! - [`PostMeta`] - Date and tags
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use folio_ui::{Layout, PageTitle, PostBody, TableOfContents};
//!
//! #[component]
//! fn Post(html: String, toc: Option<String>) -> impl IntoView {
//!     view! {
//!         <Layout belongs="develop">
//!             <PageTitle title="Ownership" />
//!             <PostBody html=html />
//!             <TableOfContents toc=Signal::stored(toc) />
//!         </Layout>
//!     }
//! }
//! ```

pub mod layout;
pub mod list;
pub mod navigation;
pub mod post;
pub mod toc;

pub use layout::{Layout, PageDescription, PageTitle};
pub use list::{PostItems, ProjectList};
pub use navigation::{NavBar, NavItem, Sidebar};
pub use post::{PostBody, PostMeta};
pub use toc::TableOfContents;
