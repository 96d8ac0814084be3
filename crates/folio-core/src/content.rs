//! Query result shapes.
//!
//! These mirror the JSON the build pipeline writes for each page query, so
//! page templates can deserialize their data without any mapping layer.

use serde::{Deserialize, Serialize};

/// A list of graph nodes, as returned by `all*` selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// A content directory node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub id: String,
    pub name: String,
}

/// Fields added to Markdown nodes by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    /// Route of the rendered post, e.g. `/develop/rust-ownership/`.
    pub slug: String,
}

/// A rendered Markdown document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownRemark<F> {
    pub id: String,
    pub frontmatter: F,
    pub fields: Slug,

    /// Truncated plain-text excerpt, when the query asked for it.
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Rendered HTML body, only present in post queries.
    #[serde(default)]
    pub html: Option<String>,

    /// Rendered table-of-contents fragment, only present in post queries.
    #[serde(default)]
    pub table_of_contents: Option<String>,
}

/// A file node with its Markdown child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode<F> {
    pub source_instance_name: String,

    /// Missing when the pipeline failed to parse the file.
    #[serde(default)]
    pub child_markdown_remark: Option<MarkdownRemark<F>>,
}

/// Frontmatter of a dated post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFrontmatter {
    pub title: String,

    /// Already formatted by the pipeline (`MMMM DD , YYYY`).
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Frontmatter of a project write-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFrontmatter {
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Technologies used.
    #[serde(default)]
    pub tech: Vec<String>,

    /// One-line description.
    #[serde(default)]
    pub desc: String,

    /// Development period, e.g. `2021.03 ~ 2021.06`.
    #[serde(default)]
    pub period: String,
}

/// Result of a directory listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData<F> {
    #[serde(rename = "directorys", default)]
    pub directories: Nodes<DirectoryNode>,

    #[serde(default)]
    pub posts: Nodes<FileNode<F>>,
}

impl<F> ListingData<F> {
    /// Markdown entries in query order, skipping files without a document.
    pub fn entries(&self) -> impl Iterator<Item = &MarkdownRemark<F>> {
        self.posts
            .nodes
            .iter()
            .filter_map(|node| node.child_markdown_remark.as_ref())
    }

    /// Names of the listed directories.
    pub fn directory_names(&self) -> Vec<String> {
        self.directories
            .nodes
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }
}

/// Result of the single post query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub markdown_remark: MarkdownRemark<PostFrontmatter>,
}
