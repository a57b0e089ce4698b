//! Natural-language ordering of table names.
//!
//! A multi-level comparison in the manner of the Unicode collation algorithm:
//!
//! 1. base letters, ignoring case and diacritics (`Überjacke` sorts with `u`)
//! 2. diacritics, unaccented before accented
//! 3. case, lower case before upper case
//!
//! Names equal on all three levels fall back to code point order, so the
//! ordering is total.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .flat_map(|c| match c {
            'ß' => ['s', 's'].into_iter().take(2),
            other => [other, other].into_iter().take(1),
        })
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Compare two names the way a user-facing, locale-aware list orders them
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(collate("coat", "Jacket"), Ordering::Less);
        assert_eq!(collate("shirt", "pants"), Ordering::Greater);
        assert_eq!(collate("pants", "pants"), Ordering::Equal);
    }

    #[test]
    fn test_lower_case_before_upper_case() {
        assert_eq!(collate("jacket", "Jacket"), Ordering::Less);
        assert_eq!(collate("Jacket", "jacket"), Ordering::Greater);
    }

    #[test]
    fn test_diacritics_sort_with_base_letter() {
        assert_eq!(collate("Überjacke", "Weste"), Ordering::Less);
        assert_eq!(collate("shirt", "Überjacke"), Ordering::Less);
        assert_eq!(collate("Äermel", "Bluse"), Ordering::Less);
        // Decomposed input sorts like the precomposed form
        assert_eq!(collate("U\u{308}berjacke", "Weste"), Ordering::Less);
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(collate("rock", "röck"), Ordering::Less);
        assert_eq!(collate("röck", "rocks"), Ordering::Less);
    }

    #[test]
    fn test_sharp_s_expands() {
        assert_eq!(collate("Maß", "Masse"), Ordering::Less);
        assert_eq!(collate("Maß", "Mast"), Ordering::Less);
    }

    #[test]
    fn test_sorts_mixed_names() {
        let mut names = vec!["Weste", "jacket", "Überjacke", "shirt", "Jacket", "Hose"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(
            names,
            vec!["Hose", "jacket", "Jacket", "shirt", "Überjacke", "Weste"]
        );
    }
}
