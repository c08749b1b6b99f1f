//! Slug derivation from human-readable titles.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from a display title.
///
/// Lowercases, folds accented Latin characters to their ASCII base letter,
/// drops everything that is not a letter, digit, space, or hyphen, then
/// collapses whitespace and hyphen runs into single hyphens with no hyphen at
/// either edge.
///
/// The result is either empty or matches `[a-z0-9]+(-[a-z0-9]+)*`. Empty is a
/// legitimate output for all-punctuation input, not an error; callers decide
/// the fallback.
///
/// Examples:
/// - "Limpeza de Pele" -> "limpeza-de-pele"
/// - "Depilação à Laser" -> "depilacao-a-laser"
/// - "Nano-Lips!!" -> "nano-lips"
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();

    // Canonical decomposition splits an accented letter into its base letter
    // plus combining marks; dropping the marks covers the whole accented-Latin
    // range without a lookup table.
    let folded: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let kept: String = folded
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-'
        })
        .collect();

    // Splitting on whitespace and hyphens together collapses runs of either
    // into one separator and trims the edges in a single pass.
    kept.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|seg| !seg.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether `value` is a well-formed non-empty slug: lowercase ASCII letters,
/// digits, and single interior hyphens only.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_plain_titles() {
        assert_eq!(derive_slug("Dermaplaning"), "dermaplaning");
    }

    #[test]
    fn hyphenates_spaces() {
        assert_eq!(derive_slug("Limpeza de Pele"), "limpeza-de-pele");
    }

    #[test]
    fn folds_accents_to_ascii() {
        assert_eq!(derive_slug("Depilação à Laser"), "depilacao-a-laser");
        assert_eq!(derive_slug("Extensão de Cílios"), "extensao-de-cilios");
        assert_eq!(derive_slug("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(derive_slug("Nano-Lips!!"), "nano-lips");
        assert_eq!(derive_slug("Design de Sobrancelhas (novo)"), "design-de-sobrancelhas-novo");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(derive_slug("  Extra   Spaces  "), "extra-spaces");
        assert_eq!(derive_slug("tabs\t\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn collapses_hyphen_runs_and_trims_edges() {
        assert_eq!(derive_slug("--já--pronto--"), "ja-pronto");
        assert_eq!(derive_slug("a - b"), "a-b");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(derive_slug("Peeling 2 em 1"), "peeling-2-em-1");
    }

    #[test]
    fn all_punctuation_yields_empty() {
        assert_eq!(derive_slug("???"), "");
        assert_eq!(derive_slug("!!! ***"), "");
        assert_eq!(derive_slug(""), "");
    }

    #[test]
    fn emoji_is_dropped() {
        assert_eq!(derive_slug("✨ Glow ✨"), "glow");
        assert_eq!(derive_slug("💫"), "");
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        for title in ["Limpeza de Pele", "Nano-Lips!!", "Depilação à Laser"] {
            let once = derive_slug(title);
            assert_eq!(derive_slug(&once), once);
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(derive_slug("Hidra Gloss"), derive_slug("Hidra Gloss"));
    }

    #[test]
    fn output_matches_slug_format() {
        for title in [
            "Limpeza de Pele",
            "Depilação à Laser",
            "Nano-Lips!!",
            "  Extra   Spaces  ",
            "Peeling 2 em 1",
        ] {
            let slug = derive_slug(title);
            assert!(is_valid_slug(&slug), "bad slug {slug:?} from {title:?}");
        }
    }

    #[test]
    fn validates_slug_shape() {
        assert!(is_valid_slug("design-de-sobrancelhas"));
        assert!(is_valid_slug("peeling2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("UpperCase"));
        assert!(!is_valid_slug("acentuação"));
    }
}
