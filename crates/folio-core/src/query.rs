//! Page query declarations.
//!
//! Templates declare what they need from the content graph; the build
//! pipeline executes the query and writes the result to the page's
//! page-data file. Queries render to GraphQL text through [`Display`] and
//! serialize with serde for tooling.

use std::fmt::{self, Display, Write as _};

use serde::Serialize;

/// Regex matching top-level directories of a source.
const TOP_LEVEL_DIRECTORY: &str = r"/^$|^\.\.$/";

/// Regex matching Markdown files.
const MARKDOWN_FILE: &str = r"/.md$/";

/// Date format applied by the pipeline to post dates.
pub const DATE_FORMAT: &str = "MMMM DD , YYYY";

/// A named query with its selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageQuery {
    pub name: String,
    pub variables: Vec<Variable>,
    pub selections: Vec<Selection>,
}

/// A query variable, e.g. `$slug: String!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub ty: String,
}

/// Graph collections a selection can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collection {
    AllDirectory,
    AllFile,
    MarkdownRemark,
}

impl Collection {
    /// GraphQL field name.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::AllDirectory => "allDirectory",
            Self::AllFile => "allFile",
            Self::MarkdownRemark => "markdownRemark",
        }
    }

    /// Whether results are wrapped in `nodes`.
    pub fn is_list(self) -> bool {
        matches!(self, Self::AllDirectory | Self::AllFile)
    }
}

/// One top-level selection of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub alias: Option<String>,
    pub collection: Collection,
    pub arguments: Vec<Argument>,
    pub fields: Vec<Field>,
}

/// Selection arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Argument {
    /// `filter: { ... }` for list collections.
    Filter(Vec<Filter>),
    /// `sort: { ... }` for list collections.
    Sort(Sort),
    /// A filter written directly as an argument, for single-node lookups.
    Match(Filter),
}

/// Predicate on a (possibly nested) node field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub path: Vec<String>,
    pub op: FilterOp,
    pub value: Value,
}

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOp {
    Eq,
    Regex,
}

/// Sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// An argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    String(String),
    Bool(bool),
    Variable(String),
}

/// A requested field, with optional arguments and sub-fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
    pub children: Vec<Field>,
}

/// Which frontmatter a listing page asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostEntries {
    /// Dated posts with an excerpt, newest first.
    Dated,
    /// Project write-ups, most recent period first.
    Projects,
}

impl Filter {
    /// Equality on a field path such as `["fields", "slug"]`.
    pub fn eq(path: &[&str], value: Value) -> Self {
        Self::new(path, FilterOp::Eq, value)
    }

    /// Regex match on a field path.
    pub fn regex(path: &[&str], pattern: impl Into<String>) -> Self {
        Self::new(path, FilterOp::Regex, Value::String(pattern.into()))
    }

    fn new(path: &[&str], op: FilterOp, value: Value) -> Self {
        Self {
            path: path.iter().map(|s| (*s).to_string()).collect(),
            op,
            value,
        }
    }
}

impl Field {
    /// A plain leaf field.
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A field with sub-fields.
    pub fn object(name: &str, children: Vec<Field>) -> Self {
        Self {
            name: name.to_string(),
            arguments: Vec::new(),
            children,
        }
    }

    /// Add an argument.
    pub fn with_arg(mut self, name: &str, value: Value) -> Self {
        self.arguments.push((name.to_string(), value));
        self
    }
}

impl PostEntries {
    /// Frontmatter field the listing is sorted by.
    pub fn sort_field(self) -> &'static str {
        match self {
            Self::Dated => "childrenMarkdownRemark___frontmatter___date",
            Self::Projects => "childrenMarkdownRemark___frontmatter___period",
        }
    }

    fn remark_fields(self) -> Vec<Field> {
        let slug = Field::object("fields", vec![Field::leaf("slug")]);
        match self {
            Self::Dated => vec![
                Field::object(
                    "frontmatter",
                    vec![
                        Field::leaf("date")
                            .with_arg("formatString", Value::String(DATE_FORMAT.into())),
                        Field::leaf("title"),
                    ],
                ),
                slug,
                Field::leaf("excerpt").with_arg("truncate", Value::Bool(true)),
                Field::leaf("id"),
            ],
            Self::Projects => vec![
                Field::object(
                    "frontmatter",
                    ["title", "tags", "tech", "desc", "period"]
                        .into_iter()
                        .map(Field::leaf)
                        .collect(),
                ),
                slug,
                Field::leaf("id"),
            ],
        }
    }
}

impl PageQuery {
    /// The query of a directory listing page.
    ///
    /// Selects the top-level directories of `source` as `directorys` and its
    /// Markdown files as `posts`.
    pub fn listing(name: impl Into<String>, source: &str, entries: PostEntries) -> Self {
        let source_filter = Filter::eq(&["sourceInstanceName"], Value::String(source.into()));

        Self {
            name: name.into(),
            variables: Vec::new(),
            selections: vec![
                Self::directories(source_filter.clone()),
                Self::posts(source_filter, entries),
            ],
        }
    }

    /// The query of the home page: dated posts across several sources.
    pub fn recent_posts(name: impl Into<String>, sources: &[&str]) -> Self {
        let alternatives: Vec<String> = sources.iter().map(|s| escape_regex(s)).collect();
        let source_filter = Filter::regex(
            &["sourceInstanceName"],
            format!("/^({})$/", alternatives.join("|")),
        );

        Self {
            name: name.into(),
            variables: Vec::new(),
            selections: vec![Self::posts(source_filter, PostEntries::Dated)],
        }
    }

    /// The query of a single post, looked up by `$slug`.
    pub fn post(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: vec![Variable {
                name: "slug".to_string(),
                ty: "String!".to_string(),
            }],
            selections: vec![Selection {
                alias: None,
                collection: Collection::MarkdownRemark,
                arguments: vec![Argument::Match(Filter::eq(
                    &["fields", "slug"],
                    Value::Variable("slug".into()),
                ))],
                fields: vec![
                    Field::leaf("id"),
                    Field::leaf("html"),
                    Field::leaf("tableOfContents"),
                    Field::object(
                        "frontmatter",
                        vec![
                            Field::leaf("title"),
                            Field::leaf("date")
                                .with_arg("formatString", Value::String(DATE_FORMAT.into())),
                            Field::leaf("tags"),
                        ],
                    ),
                    Field::object("fields", vec![Field::leaf("slug")]),
                ],
            }],
        }
    }

    fn directories(source_filter: Filter) -> Selection {
        Selection {
            alias: Some("directorys".to_string()),
            collection: Collection::AllDirectory,
            arguments: vec![
                Argument::Filter(vec![
                    source_filter,
                    Filter::regex(&["relativeDirectory"], TOP_LEVEL_DIRECTORY),
                ]),
                Argument::Sort(Sort {
                    field: "relativeDirectory".to_string(),
                    order: SortOrder::Desc,
                }),
            ],
            fields: vec![Field::leaf("id"), Field::leaf("name")],
        }
    }

    fn posts(source_filter: Filter, entries: PostEntries) -> Selection {
        Selection {
            alias: Some("posts".to_string()),
            collection: Collection::AllFile,
            arguments: vec![
                Argument::Filter(vec![
                    source_filter,
                    Filter::regex(&["absolutePath"], MARKDOWN_FILE),
                ]),
                Argument::Sort(Sort {
                    field: entries.sort_field().to_string(),
                    order: SortOrder::Desc,
                }),
            ],
            fields: vec![
                Field::leaf("sourceInstanceName"),
                Field::object("childMarkdownRemark", entries.remark_fields()),
            ],
        }
    }
}

fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if "\\^$.|?*+()[]{}/".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            FilterOp::Eq => "eq",
            FilterOp::Regex => "regex",
        };
        for segment in &self.path {
            write!(f, "{segment}: {{ ")?;
        }
        write!(f, "{op}: {}", self.value)?;
        for _ in &self.path {
            f.write_str(" }")?;
        }
        Ok(())
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        write!(f, "{{ order: {order}, fields: {} }}", self.field)
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[Field], depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    for field in fields {
        write!(f, "{pad}{}", field.name)?;
        if !field.arguments.is_empty() {
            let args: Vec<String> = field
                .arguments
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            write!(f, "({})", args.join(", "))?;
        }
        if field.children.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, " {{")?;
            write_fields(f, &field.children, depth + 1)?;
            writeln!(f, "{pad}}}")?;
        }
    }
    Ok(())
}

impl Display for PageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query {}", self.name)?;
        if !self.variables.is_empty() {
            let vars: Vec<String> = self
                .variables
                .iter()
                .map(|v| format!("${}: {}", v.name, v.ty))
                .collect();
            write!(f, "({})", vars.join(", "))?;
        }
        writeln!(f, " {{")?;

        for selection in &self.selections {
            f.write_str("  ")?;
            if let Some(alias) = &selection.alias {
                write!(f, "{alias}: ")?;
            }
            f.write_str(selection.collection.field_name())?;

            if !selection.arguments.is_empty() {
                writeln!(f, "(")?;
                for argument in &selection.arguments {
                    match argument {
                        Argument::Filter(filters) => {
                            let parts: Vec<String> =
                                filters.iter().map(ToString::to_string).collect();
                            writeln!(f, "    filter: {{ {} }}", parts.join(", "))?;
                        }
                        Argument::Sort(sort) => writeln!(f, "    sort: {sort}")?,
                        Argument::Match(filter) => writeln!(f, "    {filter}")?,
                    }
                }
                f.write_str("  )")?;
            }
            writeln!(f, " {{")?;

            if selection.collection.is_list() {
                writeln!(f, "    nodes {{")?;
                write_fields(f, &selection.fields, 3)?;
                writeln!(f, "    }}")?;
            } else {
                write_fields(f, &selection.fields, 2)?;
            }
            writeln!(f, "  }}")?;
        }

        writeln!(f, "}}")
    }
}
