//! Display-name cleanup for album titles shown on tiles.
//!
//! The passes run in a fixed order and each one looks at the output of the
//! previous pass: notes, known suffixes, edition descriptors, then the first
//! spaced hyphen becomes an en dash.

use std::sync::OnceLock;

use regex::Regex;

/// Suffix phrases stripped from album titles, applied in this order.
pub const KNOWN_SUFFIXES: [&str; 2] = [" - EP", " - Single"];

const NOTE_OPENER: char = '(';
const SPACED_HYPHEN: &str = " - ";
const SPACED_EN_DASH: &str = " \u{2013} ";

fn edition_pattern() -> &'static Regex {
    static EDITION_PATTERN: OnceLock<Regex> = OnceLock::new();
    EDITION_PATTERN.get_or_init(|| {
        Regex::new(r" - \S* Edition").expect("edition pattern should compile")
    })
}

/// A match at the very start of the title is never treated as strippable.
fn is_leading_match(position: usize) -> bool {
    position == 0
}

fn truncate_at_match(name: &str, position: Option<usize>) -> String {
    match position {
        Some(position) if !is_leading_match(position) => name[..position].to_string(),
        _ => name.to_string(),
    }
}

/// Removes a parenthetical note such as `(Remastered)` and everything after it.
///
/// A title that itself starts with `(` keeps that parenthesis; only an opener
/// after the first character counts as a note.
pub fn strip_note(name: &str) -> String {
    let note_start = name
        .char_indices()
        .skip(1)
        .find(|(_, ch)| *ch == NOTE_OPENER)
        .map(|(index, _)| index);
    truncate_at_match(name, note_start)
}

/// Cuts the title at the first occurrence of each of [`KNOWN_SUFFIXES`].
pub fn strip_suffixes(name: &str) -> String {
    KNOWN_SUFFIXES
        .iter()
        .fold(name.to_string(), |current, suffix| {
            let suffix_start = current.find(suffix);
            truncate_at_match(&current, suffix_start)
        })
}

/// Removes an edition descriptor like ` - Deluxe Edition`.
pub fn strip_edition(name: &str) -> String {
    let edition_start = edition_pattern().find(name).map(|found| found.start());
    truncate_at_match(name, edition_start)
}

/// Replaces the first ` - ` with ` – `.
pub fn substitute_dash(name: &str) -> String {
    name.replacen(SPACED_HYPHEN, SPACED_EN_DASH, 1)
}

/// Returns the cleaned display name for an album title.
pub fn optimize_album_name(name: &str) -> String {
    let name = strip_note(name);
    let name = strip_suffixes(&name);
    let name = strip_edition(&name);
    substitute_dash(&name)
}

#[cfg(test)]
mod tests {
    use super::{optimize_album_name, strip_edition, strip_note, strip_suffixes, substitute_dash};

    #[test]
    fn test_empty_title_stays_empty() {
        assert_eq!(optimize_album_name(""), "");
    }

    #[test]
    fn test_note_is_cut_without_trimming() {
        assert_eq!(optimize_album_name("Album (Remastered)"), "Album ");
        assert_eq!(optimize_album_name("Album(Live)"), "Album");
    }

    #[test]
    fn test_leading_parenthesis_is_kept() {
        assert_eq!(optimize_album_name("(Untitled)"), "(Untitled)");
        assert_eq!(
            strip_note("(What's the Story) Morning Glory?"),
            "(What's the Story) Morning Glory?"
        );
    }

    #[test]
    fn test_note_after_leading_parenthesis_is_cut() {
        assert_eq!(strip_note("(A) B (Deluxe)"), "(A) B ");
    }

    #[test]
    fn test_note_search_handles_multibyte_first_char() {
        assert_eq!(strip_note("Ä(b)"), "Ä");
        assert_eq!(strip_note("Élan (Live)"), "Élan ");
    }

    #[test]
    fn test_known_suffixes_are_removed() {
        assert_eq!(optimize_album_name("My Album - EP"), "My Album");
        assert_eq!(optimize_album_name("My Album - Single"), "My Album");
    }

    #[test]
    fn test_both_suffixes_apply_in_sequence() {
        assert_eq!(strip_suffixes("A - Single - EP"), "A");
        assert_eq!(strip_suffixes("A - EPilogue"), "A");
    }

    #[test]
    fn test_suffix_at_start_is_kept() {
        assert_eq!(strip_suffixes(" - EP"), " - EP");
        assert_eq!(strip_suffixes(" - Single"), " - Single");
        // only the first occurrence is considered
        assert_eq!(strip_suffixes(" - EP and - EP"), " - EP and - EP");
    }

    #[test]
    fn test_suffix_matching_is_case_sensitive() {
        assert_eq!(strip_suffixes("My Album - ep"), "My Album - ep");
    }

    #[test]
    fn test_edition_descriptor_is_removed() {
        assert_eq!(optimize_album_name("My Album - Deluxe Edition"), "My Album");
        assert_eq!(strip_edition("My Album -  Edition"), "My Album");
        assert_eq!(strip_edition("Title - 25th Edition Remaster"), "Title");
    }

    #[test]
    fn test_edition_requires_single_word_and_exact_case() {
        assert_eq!(
            strip_edition("My Album - Super Deluxe Edition"),
            "My Album - Super Deluxe Edition"
        );
        assert_eq!(
            strip_edition("My Album - Deluxe edition"),
            "My Album - Deluxe edition"
        );
    }

    #[test]
    fn test_edition_at_start_is_kept() {
        assert_eq!(strip_edition(" - Deluxe Edition"), " - Deluxe Edition");
    }

    #[test]
    fn test_suffix_runs_before_edition() {
        assert_eq!(optimize_album_name("My Album - EP - Deluxe Edition"), "My Album");
    }

    #[test]
    fn test_only_first_dash_is_substituted() {
        assert_eq!(optimize_album_name("Side A - Side B"), "Side A \u{2013} Side B");
        assert_eq!(substitute_dash("A - B - C"), "A \u{2013} B - C");
        assert_eq!(substitute_dash("A-B"), "A-B");
    }

    #[test]
    fn test_untouched_titles_pass_through() {
        for title in ["Abbey Road", "OK Computer", "Kid-A", "  spaced  ", "Fünf"] {
            assert_eq!(optimize_album_name(title), title);
        }
    }

    #[test]
    fn test_repeated_application_converges() {
        for title in [
            "A - B - C",
            "Album (Remastered)",
            "My Album - EP - Deluxe Edition",
            "(Untitled) - Live - Single",
        ] {
            let once = optimize_album_name(title);
            let twice = optimize_album_name(&once);
            let thrice = optimize_album_name(&twice);
            assert_eq!(twice, thrice, "title {title:?} did not converge");
        }
    }

    #[test]
    fn test_idempotent_once_markers_are_gone() {
        for title in ["Album (Remastered)", "My Album - Single", "Side A - Side B"] {
            let once = optimize_album_name(title);
            assert_eq!(optimize_album_name(&once), once);
        }
    }
}
