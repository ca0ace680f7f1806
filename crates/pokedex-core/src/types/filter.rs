//! Store-agnostic predicate model.
//!
//! A [`Predicate`] is a small boolean tree over [`FilterField`] leaves.
//! Each leaf names a dotted document path (`id`, `type`, `name.english`,
//! `base.HP`, ...), a comparison operator and a value. Store
//! implementations translate the tree into their own query language.

use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Greater than or equal (numeric).
    Gte,
    /// Less than or equal (numeric).
    Lte,
    /// Membership. On an array field at least one element must be listed.
    In,
    /// Case-insensitive `LIKE` pattern match.
    ILike,
}

/// A dynamic filter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value.
    String(String),
    /// A list of integers (for `In`).
    IntegerList(Vec<i64>),
    /// A list of strings (for `In`).
    StringList(Vec<String>),
    /// A `LIKE` pattern (for `ILike`).
    Pattern(LikePattern),
}

/// A single condition on a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The dotted document path to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}

/// A boolean tree of field conditions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record.
    #[default]
    All,
    /// A single field condition.
    Field(FilterField),
    /// All children must match. An empty list matches everything.
    And(Vec<Predicate>),
    /// At least one child must match. An empty list matches nothing.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// `field == value` for an integer field.
    pub fn eq_int(field: impl Into<String>, value: i64) -> Self {
        Self::Field(FilterField::new(field, FilterOp::Eq, FilterValue::Integer(value)))
    }

    /// `field >= value`.
    pub fn gte(field: impl Into<String>, value: f64) -> Self {
        Self::Field(FilterField::new(field, FilterOp::Gte, FilterValue::Float(value)))
    }

    /// `field <= value`.
    pub fn lte(field: impl Into<String>, value: f64) -> Self {
        Self::Field(FilterField::new(field, FilterOp::Lte, FilterValue::Float(value)))
    }

    /// Integer membership.
    pub fn in_ints(field: impl Into<String>, values: Vec<i64>) -> Self {
        Self::Field(FilterField::new(
            field,
            FilterOp::In,
            FilterValue::IntegerList(values),
        ))
    }

    /// String membership.
    pub fn in_strings(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::Field(FilterField::new(
            field,
            FilterOp::In,
            FilterValue::StringList(values),
        ))
    }

    /// Case-insensitive pattern match.
    pub fn ilike(field: impl Into<String>, pattern: LikePattern) -> Self {
        Self::Field(FilterField::new(
            field,
            FilterOp::ILike,
            FilterValue::Pattern(pattern),
        ))
    }

    /// Conjunction that collapses trivial cases.
    pub fn and(mut clauses: Vec<Predicate>) -> Self {
        clauses.retain(|c| !c.is_all());
        match clauses.len() {
            0 => Self::All,
            1 => clauses.remove(0),
            _ => Self::And(clauses),
        }
    }

    /// Whether this predicate trivially matches everything.
    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::And(children) => children.iter().all(Predicate::is_all),
            _ => false,
        }
    }
}

/// Escape character understood by [`LikePattern`].
pub const LIKE_ESCAPE: char = '\\';

/// A SQL-`LIKE` style pattern: `%` matches any run of characters, `_`
/// matches exactly one, and `\` makes the following character literal.
///
/// The pattern text is taken as-is; building it safely from user input is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikePattern(String);

impl LikePattern {
    /// Wrap raw pattern text.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The raw pattern text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against `text`, with the same semantics as
    /// PostgreSQL `ILIKE ... ESCAPE '\'`.
    pub fn matches_ignore_case(&self, text: &str) -> bool {
        let tokens = tokenize(&self.0.to_lowercase());
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        match_tokens(&tokens, &chars)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    AnyRun,
    AnyOne,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        let token = match c {
            '%' => Token::AnyRun,
            '_' => Token::AnyOne,
            LIKE_ESCAPE => Token::Literal(chars.next().unwrap_or(LIKE_ESCAPE)),
            other => Token::Literal(other),
        };
        tokens.push(token);
    }
    tokens
}

/// Greedy wildcard matching with single-point backtracking.
fn match_tokens(tokens: &[Token], text: &[char]) -> bool {
    let (mut t, mut s) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while s < text.len() {
        match tokens.get(t) {
            Some(Token::AnyOne) => {
                t += 1;
                s += 1;
            }
            Some(Token::Literal(c)) if *c == text[s] => {
                t += 1;
                s += 1;
            }
            Some(Token::AnyRun) => {
                star = Some((t, s));
                t += 1;
            }
            _ => match star {
                Some((star_t, star_s)) => {
                    t = star_t + 1;
                    s = star_s + 1;
                    star = Some((star_t, star_s + 1));
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|tok| *tok == Token::AnyRun)
}
