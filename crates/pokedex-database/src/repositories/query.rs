//! Translation of [`Predicate`] trees into PostgreSQL `WHERE` clauses.
//!
//! Document paths map onto a fixed column whitelist; every value is a
//! bound parameter. The `type` array is stored as `TEXT[]`, so membership
//! uses `&&` and equality uses `= ANY(...)`.

use sqlx::{Postgres, QueryBuilder};

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::{FilterField, FilterOp, FilterValue, LIKE_ESCAPE, Predicate};

/// A column a document path maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// A single-valued column.
    Scalar(&'static str),
    /// A `TEXT[]` column.
    Array(&'static str),
}

impl Column {
    /// The column name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar(name) | Self::Array(name) => name,
        }
    }
}

/// Map a dotted document path to its column.
pub fn column_for(path: &str) -> AppResult<Column> {
    let column = match path {
        "id" => Column::Scalar("id"),
        "type" => Column::Array("types"),
        "name.english" => Column::Scalar("name_english"),
        "name.french" => Column::Scalar("name_french"),
        "name.japanese" => Column::Scalar("name_japanese"),
        "name.chinese" => Column::Scalar("name_chinese"),
        "base.HP" => Column::Scalar("hp"),
        "base.Attack" => Column::Scalar("attack"),
        "base.Defense" => Column::Scalar("defense"),
        "base.SpecialAttack" => Column::Scalar("special_attack"),
        "base.SpecialDefense" => Column::Scalar("special_defense"),
        "base.Speed" => Column::Scalar("speed"),
        "image" => Column::Scalar("image"),
        other => {
            return Err(AppError::internal(format!(
                "No column for document path '{other}'"
            )));
        }
    };
    Ok(column)
}

/// Column usable in `ORDER BY`.
pub fn sort_column(path: &str) -> AppResult<&'static str> {
    match column_for(path)? {
        Column::Scalar(name) => Ok(name),
        Column::Array(name) => Err(AppError::internal(format!(
            "Cannot sort by array column '{name}'"
        ))),
    }
}

/// Append the SQL condition for `predicate` to `qb`.
pub fn push_predicate(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) -> AppResult<()> {
    match predicate {
        Predicate::All => {
            qb.push("TRUE");
        }
        Predicate::Field(field) => push_field(qb, field)?,
        Predicate::And(children) => push_group(qb, children, " AND ", "TRUE")?,
        Predicate::Or(children) => push_group(qb, children, " OR ", "FALSE")?,
    }
    Ok(())
}

fn push_group(
    qb: &mut QueryBuilder<'_, Postgres>,
    children: &[Predicate],
    separator: &str,
    empty: &str,
) -> AppResult<()> {
    if children.is_empty() {
        qb.push(empty);
        return Ok(());
    }
    qb.push("(");
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            qb.push(separator);
        }
        push_predicate(qb, child)?;
    }
    qb.push(")");
    Ok(())
}

fn push_field(qb: &mut QueryBuilder<'_, Postgres>, field: &FilterField) -> AppResult<()> {
    let column = column_for(&field.field)?;

    match (field.op, &field.value, column) {
        (FilterOp::Eq, FilterValue::Integer(v), Column::Scalar(c)) => {
            qb.push(c).push(" = ").push_bind(*v);
        }
        (FilterOp::Eq, FilterValue::String(v), Column::Scalar(c)) => {
            qb.push(c).push(" = ").push_bind(v.clone());
        }
        (FilterOp::Eq, FilterValue::String(v), Column::Array(c)) => {
            qb.push_bind(v.clone()).push(" = ANY(").push(c).push(")");
        }
        (FilterOp::Gte, FilterValue::Float(v), Column::Scalar(c)) => {
            qb.push(c).push(" >= ").push_bind(*v);
        }
        (FilterOp::Gte, FilterValue::Integer(v), Column::Scalar(c)) => {
            qb.push(c).push(" >= ").push_bind(*v);
        }
        (FilterOp::Lte, FilterValue::Float(v), Column::Scalar(c)) => {
            qb.push(c).push(" <= ").push_bind(*v);
        }
        (FilterOp::Lte, FilterValue::Integer(v), Column::Scalar(c)) => {
            qb.push(c).push(" <= ").push_bind(*v);
        }
        (FilterOp::In, FilterValue::IntegerList(v), Column::Scalar(c)) => {
            qb.push(c).push(" = ANY(").push_bind(v.clone()).push(")");
        }
        (FilterOp::In, FilterValue::StringList(v), Column::Scalar(c)) => {
            qb.push(c).push(" = ANY(").push_bind(v.clone()).push(")");
        }
        (FilterOp::In, FilterValue::StringList(v), Column::Array(c)) => {
            qb.push(c).push(" && ").push_bind(v.clone());
        }
        (FilterOp::ILike, FilterValue::Pattern(p), Column::Scalar(c)) => {
            qb.push(c)
                .push(" ILIKE ")
                .push_bind(p.as_str().to_owned())
                .push(format!(" ESCAPE '{LIKE_ESCAPE}'"));
        }
        (FilterOp::ILike, FilterValue::Pattern(p), Column::Array(c)) => {
            qb.push("EXISTS (SELECT 1 FROM unnest(")
                .push(c)
                .push(") AS t(v) WHERE t.v ILIKE ")
                .push_bind(p.as_str().to_owned())
                .push(format!(" ESCAPE '{LIKE_ESCAPE}')"));
        }
        (op, _, column) => {
            return Err(AppError::internal(format!(
                "Unsupported {op:?} condition on column '{}'",
                column.name()
            )));
        }
    }
    Ok(())
}
