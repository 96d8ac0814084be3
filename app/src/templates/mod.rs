//! Page templates.
//!
//! Each template loads the result of its query (see
//! [`folio_core::Template::query`]) from the page-data file of its route and
//! passes it to the components.

mod home;
mod listing;
mod post;

use leptos::prelude::*;

pub use self::{
    home::HomePage,
    listing::{CategoryPage, ProjectsPage},
    post::PostPage,
};
use crate::data::PageDataError;

/// Placeholder while page data loads.
fn loading() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

/// Shown when a page's data cannot be loaded.
#[component]
pub fn LoadError(
    /// What went wrong.
    error: PageDataError,
) -> impl IntoView {
    log::error!("page data unavailable: {error}");
    view! {
      <div class="load-error" role="alert">
        <p>"This page could not be loaded."</p>
      </div>
    }
}

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <div class="not-found">
        <h1>"404"</h1>
        <p>"Page not found."</p>
        <a href="/">"Back to home"</a>
      </div>
    }
}
