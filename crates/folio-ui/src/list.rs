//! Post and project lists.

use folio_core::{MarkdownRemark, PostFrontmatter, ProjectFrontmatter};
use leptos::prelude::*;

/// Dated posts with their excerpts.
#[component]
pub fn PostItems(
    /// Posts in display order.
    #[prop(into)]
    posts: Signal<Vec<MarkdownRemark<PostFrontmatter>>>,
) -> impl IntoView {
    view! {
      <Show
        when=move || posts.with(|posts| !posts.is_empty())
        fallback=|| view! { <p class="post-items-empty">"No posts yet."</p> }
      >
        <ul class="post-items">
          <For
            each=move || posts.get()
            key=|post| post.id.clone()
            children=move |post| {
              let date = post.frontmatter.date.clone().unwrap_or_default();
              let excerpt = post.excerpt.clone().unwrap_or_default();
              view! {
                <li class="post-item">
                  <a href=post.fields.slug.clone() class="post-item-link">
                    <h3 class="post-item-title">{post.frontmatter.title.clone()}</h3>
                    <time class="post-item-date">{date}</time>
                    <p class="post-item-excerpt">{excerpt}</p>
                  </a>
                </li>
              }
            }
          />
        </ul>
      </Show>
    }
}

/// Project cards, newest first.
#[component]
pub fn ProjectList(
    /// Projects in display order.
    #[prop(into)]
    projects: Signal<Vec<MarkdownRemark<ProjectFrontmatter>>>,
) -> impl IntoView {
    view! {
      <ul class="project-list">
        <For
          each=move || projects.get()
          key=|project| project.id.clone()
          children=move |project| {
            let fm = project.frontmatter;
            let tech = fm
              .tech
              .into_iter()
              .map(|t| view! { <span class="project-tech">{t}</span> })
              .collect_view();
            let tags = fm
              .tags
              .into_iter()
              .map(|t| view! { <span class="project-tag">"#" {t}</span> })
              .collect_view();

            view! {
              <li class="project-card">
                <a href=project.fields.slug class="project-link">
                  <h3 class="project-title">{fm.title}</h3>
                  <span class="project-period">{fm.period}</span>
                  <p class="project-desc">{fm.desc}</p>
                  <div class="project-techs">{tech}</div>
                  <div class="project-tags">{tags}</div>
                </a>
              </li>
            }
          }
        />
      </ul>
    }
}
