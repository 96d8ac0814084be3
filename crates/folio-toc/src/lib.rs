//! Folio table-of-contents tracker
//!
//! Keeps exactly one table-of-contents link highlighted: the one pointing at
//! the heading that most recently scrolled into the top band of the viewport.
//!
//! The tracker is written against two small traits so it can run without a
//! browser:
//!
//! - [`VisibilityHost`] - registers visibility watches and hands back a
//!   [`Subscription`] that releases the watch on drop
//! - [`TocDocument`] - enumerates headings, resolves links and edits classes
//!
//! With the `web` feature, [`dom::DomDocument`] and [`dom::IntersectionHost`]
//! implement both on top of `web-sys`.
//!
//! # Example
//!
//! ```ignore
//! use folio_toc::{HeadingTracker, TrackerConfig, dom::{DomDocument, IntersectionHost}};
//!
//! let document = DomDocument::current().expect("document");
//! let tracker = HeadingTracker::mount(Some(toc_html), document, &IntersectionHost, TrackerConfig::default());
//! // ... later, when the page goes away
//! if let Some(tracker) = tracker {
//!     tracker.teardown();
//! }
//! ```

pub mod document;
pub mod encode;
pub mod tracker;
pub mod watch;

#[cfg(feature = "web")]
pub mod dom;

#[cfg(test)]
mod testing;

pub use document::TocDocument;
pub use encode::{encode_uri, link_selector};
pub use tracker::{HeadingTracker, HighlightPolicy, TrackerConfig};
pub use watch::{
    Length, RootMargin, Subscription, Visibility, VisibilityCallback, VisibilityHost, WatchError,
    WatchOptions,
};
