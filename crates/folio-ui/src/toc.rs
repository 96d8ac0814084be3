//! Table of contents with active heading tracking.

use folio_toc::{
    HeadingTracker, HighlightPolicy, TrackerConfig,
    dom::{DomDocument, IntersectionHost},
};
use leptos::prelude::*;

fn has_content(toc: Option<&str>) -> bool {
    toc.is_some_and(|toc| !toc.trim().is_empty())
}

/// Table of contents for a post.
///
/// Renders the TOC fragment produced by the Markdown renderer and highlights
/// the link of the heading currently in the top of the viewport. Renders
/// nothing when there is no fragment.
///
/// Tracking is rebuilt whenever `toc` changes and released when the
/// component is disposed.
#[component]
pub fn TableOfContents(
    /// Rendered TOC markup, trusted.
    #[prop(into)]
    toc: Signal<Option<String>>,
    /// Active heading selection.
    #[prop(optional)]
    policy: HighlightPolicy,
) -> impl IntoView {
    let tracker = StoredValue::new_local(None::<HeadingTracker<DomDocument>>);

    Effect::new(move |_| {
        let toc = toc.get();
        tracker.update_value(|slot| {
            HeadingTracker::remount(
                slot,
                toc.as_deref(),
                DomDocument::current(),
                &IntersectionHost,
                TrackerConfig::default().with_policy(policy),
            );
        });
    });

    on_cleanup(move || {
        tracker.try_update_value(HeadingTracker::unmount);
    });

    view! {
      <Show when=move || toc.with(|toc| has_content(toc.as_deref()))>
        <div class="toc-container">
          <div class="toc-highlight-bar"></div>
          <div class="toc">
            <h3>"Table of content"</h3>
            <div inner_html=move || toc.get().unwrap_or_default()></div>
          </div>
        </div>
      </Show>
    }
}
