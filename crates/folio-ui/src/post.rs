//! Post body and metadata.

use leptos::prelude::*;

/// Id of the element holding rendered Markdown; the TOC tracker looks
/// headings up inside it.
pub const CONTENT_CONTAINER_ID: &str = "markdown";

/// Rendered Markdown body.
///
/// The HTML comes from the Markdown renderer and is trusted.
#[component]
pub fn PostBody(
    /// Rendered HTML.
    #[prop(into)]
    html: String,
) -> impl IntoView {
    view! { <div id=CONTENT_CONTAINER_ID class="markdown" inner_html=html></div> }
}

/// Post metadata: date and tags.
#[component]
pub fn PostMeta(
    /// Formatted publication date.
    #[prop(default = None)]
    date: Option<String>,
    /// Tags.
    #[prop(default = vec![])]
    tags: Vec<String>,
) -> impl IntoView {
    let has_date = date.is_some();
    let has_tags = !tags.is_empty();
    let tags_list = StoredValue::new(tags);

    view! {
      <div class="post-meta">
        <Show when=move || has_date>
          <time class="post-date">{date.clone()}</time>
        </Show>

        <Show when=move || has_tags>
          <div class="post-tags">
            <For
              each=move || tags_list.get_value()
              key=|tag| tag.clone()
              children=move |tag| {
                view! { <span class="post-tag">"#" {tag}</span> }
              }
            />

          </div>
        </Show>
      </div>
    }
}
