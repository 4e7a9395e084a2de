//! Query predicates for the generic repository.
//!
//! A [`Filter`] is a small expression tree that renders to a parameterized
//! SQL `WHERE` clause. Columns either belong to the queried entity (alias
//! `t`) or to one of its relations, in which case the repository joins the
//! relation under its alias before applying the predicate.

use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};

/// Alias of the queried table in generated SQL
pub const ROOT_ALIAS: &str = "t";

/// Scalar value compared against a column
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Text(String),
    Date(NaiveDate),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl Value {
    /// Append this value as a bind parameter
    pub fn push_bind(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Value::Int(v) => builder.push_bind(*v),
            Value::Text(v) => builder.push_bind(v.clone()),
            Value::Date(v) => builder.push_bind(*v),
        };
    }
}

/// Column reference, optionally through a relation alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub relation: Option<&'static str>,
    pub name: &'static str,
}

impl Column {
    /// Column of the queried entity
    pub const fn own(name: &'static str) -> Self {
        Self { relation: None, name }
    }

    /// Column of a related entity, `relation` being the relation alias
    pub const fn of(relation: &'static str, name: &'static str) -> Self {
        Self {
            relation: Some(relation),
            name,
        }
    }

    /// Qualified SQL identifier, e.g. `author.last_name`
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.relation.unwrap_or(ROOT_ALIAS), self.name)
    }
}

/// Boolean predicate over an entity
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq(Column, Value),
    /// Case-insensitive substring match
    Contains(Column, String),
    /// Inclusive range
    Between(Column, Value, Value),
    And(Box<Filter>, Box<Filter>),
    Or(Box<Filter>, Box<Filter>),
}

impl Filter {
    pub fn eq(column: Column, value: impl Into<Value>) -> Self {
        Filter::Eq(column, value.into())
    }

    pub fn contains(column: Column, needle: impl Into<String>) -> Self {
        Filter::Contains(column, needle.into())
    }

    pub fn between(column: Column, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Filter::Between(column, low.into(), high.into())
    }

    pub fn and(self, other: Filter) -> Self {
        Filter::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Filter) -> Self {
        Filter::Or(Box::new(self), Box::new(other))
    }

    /// Relation aliases referenced anywhere in the expression, deduplicated
    /// and in first-seen order
    pub fn relations(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        self.collect_relations(&mut found);
        found
    }

    fn collect_relations(&self, found: &mut Vec<&'static str>) {
        match self {
            Filter::Eq(col, _) | Filter::Contains(col, _) | Filter::Between(col, _, _) => {
                if let Some(rel) = col.relation {
                    if !found.contains(&rel) {
                        found.push(rel);
                    }
                }
            }
            Filter::And(a, b) | Filter::Or(a, b) => {
                a.collect_relations(found);
                b.collect_relations(found);
            }
        }
    }

    /// Render the predicate into `builder`, binding every value
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Filter::Eq(col, value) => {
                builder.push(col.qualified()).push(" = ");
                value.push_bind(builder);
            }
            Filter::Contains(col, needle) => {
                // strpos avoids escaping LIKE wildcards in user input
                builder
                    .push("strpos(lower(")
                    .push(col.qualified())
                    .push("), lower(")
                    .push_bind(needle.clone())
                    .push(")) > 0");
            }
            Filter::Between(col, low, high) => {
                builder.push(col.qualified()).push(" BETWEEN ");
                low.push_bind(builder);
                builder.push(" AND ");
                high.push_bind(builder);
            }
            Filter::And(a, b) => {
                builder.push("(");
                a.push_sql(builder);
                builder.push(" AND ");
                b.push_sql(builder);
                builder.push(")");
            }
            Filter::Or(a, b) => {
                builder.push("(");
                a.push_sql(builder);
                builder.push(" OR ");
                b.push_sql(builder);
                builder.push(")");
            }
        }
    }
}

/// One ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub descending: bool,
}

/// Ordering applied to a list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy(pub Vec<SortKey>);

impl OrderBy {
    pub fn asc(column: Column) -> Self {
        OrderBy(vec![SortKey {
            column,
            descending: false,
        }])
    }

    pub fn then_asc(mut self, column: Column) -> Self {
        self.0.push(SortKey {
            column,
            descending: false,
        });
        self
    }

    pub fn then_desc(mut self, column: Column) -> Self {
        self.0.push(SortKey {
            column,
            descending: true,
        });
        self
    }

    pub fn relations(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        for key in &self.0 {
            if let Some(rel) = key.column.relation {
                if !found.contains(&rel) {
                    found.push(rel);
                }
            }
        }
        found
    }

    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" ORDER BY ");
        let mut separated = builder.separated(", ");
        for key in &self.0 {
            let direction = if key.descending { "DESC" } else { "ASC" };
            separated.push(format!("{} {}", key.column.qualified(), direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: &Filter) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("");
        filter.push_sql(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn test_eq_binds_value() {
        let sql = render(&Filter::eq(Column::own("isbn10"), "8408172177"));
        assert_eq!(sql, "t.isbn10 = $1");
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let sql = render(&Filter::contains(Column::of("author", "name"), "gabriel"));
        assert_eq!(sql, "strpos(lower(author.name), lower($1)) > 0");
    }

    #[test]
    fn test_between_and_or_nesting() {
        let start = NaiveDate::from_ymd_opt(1830, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1950, 12, 31).unwrap();
        let filter = Filter::between(Column::own("birth_date"), start, end)
            .and(Filter::eq(Column::own("isbn10"), "a").or(Filter::eq(Column::own("isbn13"), "b")));

        assert_eq!(
            render(&filter),
            "(t.birth_date BETWEEN $1 AND $2 AND (t.isbn10 = $3 OR t.isbn13 = $4))"
        );
    }

    #[test]
    fn test_relations_are_deduplicated() {
        let filter = Filter::contains(Column::of("narrator", "name"), "a")
            .and(Filter::contains(Column::of("narrator", "last_name"), "b"))
            .and(Filter::eq(Column::own("genre"), "c"));
        assert_eq!(filter.relations(), vec!["narrator"]);
    }

    #[test]
    fn test_order_by_renders_all_keys() {
        let order = OrderBy::asc(Column::of("author", "last_name")).then_desc(Column::own("published"));
        let mut builder = QueryBuilder::<Postgres>::new("SELECT t.* FROM books AS t");
        order.push_sql(&mut builder);
        assert_eq!(
            builder.sql(),
            "SELECT t.* FROM books AS t ORDER BY author.last_name ASC, t.published DESC"
        );
        assert_eq!(order.relations(), vec!["author"]);
    }
}
