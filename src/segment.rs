//! Path segment classification.
//!
//! Several routes share a shape such as `/users/{key}` but mean two
//! different lookups depending on the segment: an integer selects the row
//! by id, anything else selects it by name. [`Segment::classify`] makes
//! that decision once, before any query runs.

use crate::store::UserLookup;

/// A path segment that is either a numeric id or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Id(i32),
    Name(String),
}

impl Segment {
    /// Id if the segment is only ASCII digits and fits an `i32`, name
    /// otherwise. Signs make it a name.
    pub fn classify(raw: &str) -> Self {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Segment::Name(raw.to_string());
        }
        match raw.parse::<i32>() {
            Ok(id) => Segment::Id(id),
            Err(_) => Segment::Name(raw.to_string()),
        }
    }

    /// Lookup used by `/users/{key}`: id, or a `LIKE` match on the name.
    pub fn user_lookup(self) -> UserLookup {
        match self {
            Segment::Id(id) => UserLookup::Id(id),
            Segment::Name(name) => UserLookup::UsernameLike(name),
        }
    }

    /// Lookup used by `/users/{key}/tweets`: id, or an exact match on the
    /// title-cased name.
    pub fn normalized_user_lookup(self) -> UserLookup {
        match self {
            Segment::Id(id) => UserLookup::Id(id),
            Segment::Name(name) => UserLookup::Username(title_case(&name)),
        }
    }
}

/// Lowercases `name`, then uppercases each letter not preceded by a letter.
///
/// `"jEFF"` becomes `"Jeff"` and `"mary-ann"` becomes `"Mary-Ann"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_are_ids() {
        assert_eq!(Segment::classify("42"), Segment::Id(42));
        assert_eq!(Segment::classify("007"), Segment::Id(7));
    }

    #[test]
    fn signed_segments_are_names() {
        assert_eq!(Segment::classify("+1"), Segment::Name("+1".into()));
        assert_eq!(Segment::classify("-3"), Segment::Name("-3".into()));
        assert_eq!(Segment::classify(""), Segment::Name(String::new()));
    }

    #[test]
    fn everything_else_is_a_name() {
        assert_eq!(Segment::classify("Jeff"), Segment::Name("Jeff".into()));
        assert_eq!(Segment::classify("12abc"), Segment::Name("12abc".into()));
        // Out of i32 range falls back to name rather than failing.
        assert_eq!(
            Segment::classify("99999999999"),
            Segment::Name("99999999999".into())
        );
    }

    #[test]
    fn name_variants_pick_different_predicates() {
        let like = Segment::classify("jeff").user_lookup();
        assert_eq!(like, UserLookup::UsernameLike("jeff".into()));

        let exact = Segment::classify("jeff").normalized_user_lookup();
        assert_eq!(exact, UserLookup::Username("Jeff".into()));

        assert_eq!(Segment::classify("7").user_lookup(), UserLookup::Id(7));
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("jEFF"), "Jeff");
        assert_eq!(title_case("RACHEL"), "Rachel");
        assert_eq!(title_case("mary-ann"), "Mary-Ann");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("1abc"), "1Abc");
        assert_eq!(title_case(""), "");
    }
}
