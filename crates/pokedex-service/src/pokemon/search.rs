//! Search matcher: case-insensitive substring match over every name language.

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::{LIKE_ESCAPE, LikePattern, Predicate};
use pokedex_entity::Language;

/// Escape `LIKE` metacharacters so `term` matches only itself.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// `%term%` with the term escaped.
pub fn contains_pattern(term: &str) -> LikePattern {
    LikePattern::new(format!("%{}%", escape_like(term)))
}

/// Predicate matching records whose name contains `term` in any language.
///
/// A missing or empty term is a validation error.
pub fn name_predicate(term: Option<&str>) -> AppResult<Predicate> {
    let term = term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::missing_parameter("name"))?;

    let pattern = contains_pattern(term);
    Ok(Predicate::Or(
        Language::ALL
            .iter()
            .map(|language| Predicate::ilike(language.path(), pattern.clone()))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::error::ErrorKind;

    #[test]
    fn test_escape_metacharacters() {
        assert_eq!(escape_like("char"), "char");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn test_escaped_pattern_is_literal() {
        let pattern = contains_pattern("a_b");
        assert!(pattern.matches_ignore_case("xA_Bx"));
        assert!(!pattern.matches_ignore_case("xacbx"));

        let percent = contains_pattern("%");
        assert!(!percent.matches_ignore_case("Pikachu"));
        assert!(percent.matches_ignore_case("100%"));
    }

    #[test]
    fn test_predicate_covers_four_languages() {
        let Predicate::Or(clauses) = name_predicate(Some("char")).unwrap() else {
            panic!("expected a disjunction");
        };
        assert_eq!(clauses.len(), 4);
        assert_eq!(
            clauses[3],
            Predicate::ilike("name.chinese", LikePattern::new("%char%"))
        );
    }

    #[test]
    fn test_missing_term_rejected() {
        assert_eq!(name_predicate(None).unwrap_err().kind, ErrorKind::Validation);
        assert_eq!(name_predicate(Some("")).unwrap_err().kind, ErrorKind::Validation);
    }
}
