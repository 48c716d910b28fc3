use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{ColumnTrait, Condition, IdenStatic};

const LIKE_ESCAPE: char = '\\';

/// Record kinds that can be searched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venue,
    Artist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Artist names match regardless of case, venue names only as typed.
    pub fn for_kind(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Artist => CaseSensitivity::Insensitive,
            SearchKind::Venue => CaseSensitivity::Sensitive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub count: usize,
    pub results: Vec<SearchHit>,
}

impl SearchResult {
    pub fn from_hits(hits: impl IntoIterator<Item = SearchHit>) -> Self {
        let results: Vec<SearchHit> = hits.into_iter().collect();
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Escape LIKE wildcards so the term only matches itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Filter for rows whose `column` contains `term` as literal text.
/// An empty term matches every row.
pub fn name_contains<C>(column: C, term: &str, case: CaseSensitivity) -> Condition
where
    C: ColumnTrait,
{
    match case {
        // SQLite's LIKE ignores ASCII case
        CaseSensitivity::Insensitive => {
            let pattern = format!("%{}%", escape_like(term));
            Condition::all().add(column.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)))
        }
        CaseSensitivity::Sensitive => Condition::all().add(Expr::cust_with_values(
            format!("instr(\"{}\", ?) > 0", column.as_str()),
            [term.to_string()],
        )),
    }
}
