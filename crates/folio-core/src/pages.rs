//! The site's page templates and the routes they serve.

use serde::Serialize;

use crate::{
    config::{Config, DirectoryPage},
    path::capitalize,
    query::{PageQuery, PostEntries},
};

/// Directory rendered with project cards instead of dated posts.
pub const PROJECTS_DIRECTORY: &str = "projects";

/// Route pattern of single posts.
pub const POST_ROUTE: &str = "/:category/*slug";

/// Page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Template {
    /// Recent posts of every dated directory.
    Home,
    /// Project cards of the projects directory.
    Projects,
    /// Dated posts of one directory.
    Category(DirectoryPage),
    /// A single post with its table of contents.
    Post,
}

/// A route and the template rendering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitePage {
    pub route: String,
    pub template: Template,
}

impl Template {
    /// Template of a configured directory's listing page.
    pub fn for_directory(directory: &DirectoryPage) -> Self {
        if directory.name == PROJECTS_DIRECTORY {
            Self::Projects
        } else {
            Self::Category(directory.clone())
        }
    }

    /// Name of the template's query.
    pub fn query_name(&self) -> String {
        match self {
            Self::Home => "HomePage".to_string(),
            Self::Projects => "ProjectPage".to_string(),
            Self::Category(directory) => {
                let name: String = directory
                    .name
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .map(capitalize)
                    .collect();
                format!("{name}Page")
            }
            Self::Post => "PostPage".to_string(),
        }
    }

    /// The query this template declares.
    pub fn query(&self, config: &Config) -> PageQuery {
        let name = self.query_name();
        match self {
            Self::Home => {
                let sources: Vec<&str> = config
                    .page
                    .directories
                    .iter()
                    .map(|d| d.name.as_str())
                    .filter(|name| *name != PROJECTS_DIRECTORY)
                    .collect();
                PageQuery::recent_posts(name, &sources)
            }
            Self::Projects => PageQuery::listing(name, PROJECTS_DIRECTORY, PostEntries::Projects),
            Self::Category(directory) => {
                PageQuery::listing(name, &directory.name, PostEntries::Dated)
            }
            Self::Post => PageQuery::post(name),
        }
    }
}

/// Every page of the site: home, one listing per directory, and posts.
pub fn site_pages(config: &Config) -> Vec<SitePage> {
    let mut pages = vec![SitePage {
        route: "/".to_string(),
        template: Template::Home,
    }];

    pages.extend(config.page.directories.iter().map(|directory| SitePage {
        route: directory.route(),
        template: Template::for_directory(directory),
    }));

    pages.push(SitePage {
        route: POST_ROUTE.to_string(),
        template: Template::Post,
    });

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_toml_str(
            r#"
[user]
title = "Test"
site_url = "https://example.com"

[[page.directories]]
name = "develop"
description = "Notes"

[[page.directories]]
name = "projects"

[[page.directories]]
name = "daily-life"
"#,
        )
        .expect("parse config")
    }

    #[test]
    fn test_site_pages() {
        let pages = site_pages(&config());
        let routes: Vec<&str> = pages.iter().map(|p| p.route.as_str()).collect();

        assert_eq!(
            routes,
            vec!["/", "/develop", "/projects", "/daily-life", POST_ROUTE]
        );
        assert_eq!(pages[2].template, Template::Projects);
        assert!(matches!(&pages[1].template, Template::Category(d) if d.description == "Notes"));
    }

    #[test]
    fn test_query_names() {
        let config = config();
        let names: Vec<String> = site_pages(&config)
            .iter()
            .map(|p| p.template.query_name())
            .collect();

        assert_eq!(
            names,
            vec!["HomePage", "DevelopPage", "ProjectPage", "DailyLifePage", "PostPage"]
        );
    }

    #[test]
    fn test_home_query_skips_projects() {
        let text = Template::Home.query(&config()).to_string();
        assert!(text.contains(r#"regex: "/^(develop|daily-life)$/""#));
    }

    #[test]
    fn test_category_query_uses_directory_source() {
        let config = config();
        let directory = config.directory("develop").expect("develop");
        let text = Template::for_directory(directory).query(&config).to_string();

        assert!(text.starts_with("query DevelopPage {"));
        assert!(text.contains(r#"sourceInstanceName: { eq: "develop" }"#));
    }
}
