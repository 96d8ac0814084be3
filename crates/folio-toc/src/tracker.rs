//! Heading visibility tracker.
//!
//! One tracker exists per mounted table of contents. It registers a watch
//! per heading and moves the highlight class between TOC links as headings
//! enter the active zone.

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use log::{debug, warn};

use crate::{
    document::TocDocument,
    encode::link_selector,
    watch::{Subscription, Visibility, VisibilityHost, WatchOptions},
};

/// How to choose the active heading when several are in the zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightPolicy {
    /// The heading whose entry was reported last wins.
    #[default]
    LastFired,
    /// The visible heading earliest in the document wins.
    TopmostVisible,
}

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Id of the element holding the rendered content.
    pub container_id: String,

    /// Selector for the headings to watch.
    pub heading_selector: String,

    /// Class marking the active link.
    pub highlight_class: String,

    /// Active heading selection.
    pub policy: HighlightPolicy,

    /// Options passed to every watch.
    pub watch: WatchOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            container_id: "markdown".to_string(),
            heading_selector: "h1, h2, h3".to_string(),
            highlight_class: "toc-highlight".to_string(),
            policy: HighlightPolicy::default(),
            watch: WatchOptions::default(),
        }
    }
}

impl TrackerConfig {
    /// Use a different highlight policy.
    pub fn with_policy(mut self, policy: HighlightPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Highlight state shared with the watch callbacks.
struct Highlight<D: TocDocument> {
    document: D,
    class: String,
    policy: HighlightPolicy,
    /// Anchor ids by document index.
    ids: Vec<String>,
    /// Headings currently in the zone, by document index.
    visible: BTreeSet<usize>,
    /// The highlighted link and the heading it belongs to.
    active: Option<(usize, D::Element)>,
}

impl<D: TocDocument> Highlight<D> {
    fn on_visibility(&mut self, index: usize, visibility: Visibility) {
        match self.policy {
            HighlightPolicy::LastFired => {
                if visibility.is_intersecting {
                    self.activate(index);
                }
            }
            HighlightPolicy::TopmostVisible => {
                if visibility.is_intersecting {
                    self.visible.insert(index);
                } else {
                    self.visible.remove(&index);
                }

                // An empty zone keeps the last highlight.
                if let Some(top) = self.visible.first().copied() {
                    if self.active_index() != Some(top) {
                        self.activate(top);
                    }
                }
            }
        }
    }

    fn activate(&mut self, index: usize) {
        let Some(id) = self.ids.get(index).filter(|id| !id.is_empty()) else {
            debug!("heading {index} has no anchor id");
            return;
        };

        let selector = link_selector(id);
        let Some(link) = self.document.query_link(&selector) else {
            debug!("no toc link for heading {id:?}");
            return;
        };

        if let Some((_, previous)) = self.active.take() {
            self.document.remove_class(&previous, &self.class);
        }
        self.document.add_class(&link, &self.class);
        self.active = Some((index, link));
    }

    fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|(index, _)| *index)
    }
}

/// Tracks which heading is in view and highlights its TOC link.
///
/// Dropping the tracker releases every watch, same as [`teardown`](Self::teardown).
pub struct HeadingTracker<D: TocDocument> {
    state: Rc<RefCell<Highlight<D>>>,
    subscriptions: Vec<Subscription>,
}

impl<D: TocDocument> HeadingTracker<D> {
    /// Set up tracking for a table of contents.
    ///
    /// An absent or blank `toc` means there is nothing to show: no tracker is
    /// created and no watch is registered.
    pub fn mount<H>(toc: Option<&str>, document: D, host: &H, config: TrackerConfig) -> Option<Self>
    where
        H: VisibilityHost<Target = D::Element>,
    {
        match toc {
            Some(toc) if !toc.trim().is_empty() => Some(Self::setup(document, host, config)),
            _ => None,
        }
    }

    /// Register one watch per heading of the content container.
    ///
    /// A missing container yields a tracker without watches. Watches the
    /// host fails to create are skipped.
    pub fn setup<H>(document: D, host: &H, config: TrackerConfig) -> Self
    where
        H: VisibilityHost<Target = D::Element>,
    {
        let headings = document
            .headings(&config.container_id, &config.heading_selector)
            .unwrap_or_else(|| {
                debug!("content container #{} not found", config.container_id);
                Vec::new()
            });

        let ids = headings.iter().map(|h| document.element_id(h)).collect();
        let state = Rc::new(RefCell::new(Highlight {
            document,
            class: config.highlight_class,
            policy: config.policy,
            ids,
            visible: BTreeSet::new(),
            active: None,
        }));

        let mut subscriptions = Vec::with_capacity(headings.len());
        for (index, heading) in headings.iter().enumerate() {
            let weak = Rc::downgrade(&state);
            let on_change = Box::new(move |visibility: Visibility| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match state.try_borrow_mut() {
                    Ok(mut state) => state.on_visibility(index, visibility),
                    Err(_) => warn!("visibility event for heading {index} while busy, dropped"),
                }
            });

            match host.watch(heading, &config.watch, on_change) {
                Ok(subscription) => subscriptions.push(subscription),
                Err(e) => warn!("skipping heading {index}: {e}"),
            }
        }

        debug!("watching {} headings", subscriptions.len());
        Self {
            state,
            subscriptions,
        }
    }

    /// Replace the tracker held in `slot` with one for `toc`.
    ///
    /// The previous tracker releases its watches before the new one
    /// registers any. Without a document the slot is left empty.
    pub fn remount<H>(
        slot: &mut Option<Self>,
        toc: Option<&str>,
        document: Option<D>,
        host: &H,
        config: TrackerConfig,
    ) where
        H: VisibilityHost<Target = D::Element>,
    {
        Self::unmount(slot);
        *slot = document.and_then(|document| Self::mount(toc, document, host, config));
    }

    /// Tear down the tracker held in `slot`, if any.
    pub fn unmount(slot: &mut Option<Self>) {
        if let Some(tracker) = slot.take() {
            tracker.teardown();
        }
    }

    /// Number of live watches.
    pub fn watch_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Anchor id of the heading whose link is highlighted.
    pub fn active_heading(&self) -> Option<String> {
        let state = self.state.borrow();
        let index = state.active_index()?;
        state.ids.get(index).cloned()
    }

    /// Release every watch and drop the highlight state.
    pub fn teardown(mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }
}
