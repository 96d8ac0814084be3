//! Folio application: router and page templates.

pub mod data;
pub mod templates;

use folio_core::Config;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::templates::{CategoryPage, HomePage, NotFound, PostPage};

#[component]
pub fn App(
    /// Site metadata, provided to every page through context.
    config: Config,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site_title = config.user.title.clone();
    provide_context(config);

    view! {
      <Title formatter=move |text: String| {
        if text.is_empty() { site_title.clone() } else { format!("{text} | {site_title}") }
      } />

      <Router>
        <Routes fallback=|| view! { <NotFound /> }>
          <Route path=StaticSegment("") view=HomePage />
          <Route path=ParamSegment("category") view=CategoryPage />
          <Route path=(ParamSegment("category"), WildcardSegment("slug")) view=PostPage />
        </Routes>
      </Router>
    }
}
