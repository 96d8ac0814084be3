use folio_core::{MarkdownRemark, PostData, PostFrontmatter, top_level_path_name};
use folio_ui::{Layout, PageTitle, PostBody, PostMeta, TableOfContents};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::{LoadError, NotFound, loading};
use crate::data::fetch_page_data;

/// A single post, looked up by the current path.
#[component]
pub fn PostPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let data = LocalResource::new(move || {
        let route = pathname.get();
        async move { fetch_page_data::<PostData>(&route).await }
    });

    view! {
      <Suspense fallback=loading>
        {move || {
          data
            .get()
            .map(|result| match result {
              Ok(data) => {
                let belongs = top_level_path_name(&pathname.get_untracked()).to_string();
                view! { <PostView post=data.markdown_remark belongs=belongs /> }.into_any()
              }
              Err(error) if error.is_not_found() => view! { <NotFound /> }.into_any(),
              Err(error) => view! { <LoadError error=error /> }.into_any(),
            })
        }}
      </Suspense>
    }
}

#[component]
fn PostView(post: MarkdownRemark<PostFrontmatter>, belongs: String) -> impl IntoView {
    let title = post.frontmatter.title;
    let toc = post.table_of_contents;
    let html = post.html.unwrap_or_default();

    view! {
      <Title text=title.clone() />
      <Layout belongs=belongs>
        <article class="post">
          <PageTitle title=title />
          <PostMeta date=post.frontmatter.date tags=post.frontmatter.tags />
          <div class="post-content">
            <PostBody html=html />
            <TableOfContents toc=Signal::derive(move || toc.clone()) />
          </div>
        </article>
      </Layout>
    }
}
