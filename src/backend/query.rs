//! PostgREST Query Builder
//!
//! Builds the `table?select=..&col=op.value&order=..` part of a REST URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in query values; PostgREST operators (`.`, `,`, `*`) pass through
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in a single path segment
pub const PATH_SEGMENT: &AsciiSet = &QUERY_VALUE.add(b'/');

/// `select=*` query with `eq` filters and an optional descending order
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    table: String,
    filters: Vec<(String, String)>,
    order_desc: Option<String>,
}

impl TableQuery {
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: Vec::new(),
            order_desc: None,
        }
    }

    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// `order=column.desc`
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order_desc = Some(column.to_string());
        self
    }

    /// Path relative to `/rest/v1/`
    pub fn to_path(&self) -> String {
        let mut params = vec!["select=*".to_string()];
        params.extend(
            self.filters
                .iter()
                .map(|(column, value)| format!("{}={}", encode(column), encode(value))),
        );
        if let Some(column) = &self.order_desc {
            params.push(format!("order={}.desc", encode(column)));
        }
        format!("{}?{}", encode(&self.table), params.join("&"))
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// All posts that are not hidden, newest discovery first
pub fn visible_posts() -> TableQuery {
    TableQuery::from("post")
        .eq("hidden", false)
        .order_desc("find_date")
}

/// A single post by id
pub fn post_by_id(id: &str) -> TableQuery {
    TableQuery::from("post").eq("id", id)
}
