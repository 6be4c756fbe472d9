//! URL slugs for games, sessions, tournaments, albums and players.
//!
//! Generation is pure. Uniqueness against stored rows is handled by
//! `db::slugs`.

use crate::core::clock;
use crate::models::MatchStage;
use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub const NO_DATE: &str = "no-date";
pub const NO_OPPONENT: &str = "opponent";
pub const NO_TOURNAMENT: &str = "tournament";

/// Latin spelling of a lowercase Cyrillic letter (Serbian and Russian
/// alphabets). Soft and hard signs have no spelling.
fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'ђ' => "dj",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'ј' => "j",
        'к' => "k",
        'л' => "l",
        'љ' => "lj",
        'м' => "m",
        'н' => "n",
        'њ' => "nj",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'ћ' => "c",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'џ' => "dz",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // No canonical decomposition for these two.
        'đ' => "dj",
        'ß' => "ss",
        _ => return None,
    };
    Some(s)
}

/// Normalize free text into a slug: lowercase ASCII letters and digits
/// separated by single hyphens. Never fails; all-symbol input gives "".
pub fn slugify(text: &str) -> String {
    let mut latin = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        match transliterate(c) {
            Some(t) => latin.push_str(t),
            None => latin.push(c),
        }
    }

    let mut out = String::with_capacity(latin.len());
    let mut pending_hyphen = false;

    for c in latin.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Inputs for [`build_match_slug`].
#[derive(Debug, Clone, Default)]
pub struct MatchSlugParts<'a> {
    /// `YYYY-MM-DD`, a local `YYYY-MM-DDTHH:MM`, or an RFC 3339 instant.
    pub date: Option<&'a str>,
    pub opponent_name: &'a str,
    pub tournament_name: &'a str,
    pub stage: MatchStage,
}

/// `<date>-<opponent>-<tournament>-<stage>`, each part falling back to a
/// fixed token when missing.
pub fn build_match_slug(parts: &MatchSlugParts<'_>) -> String {
    let date = parts
        .date
        .and_then(slug_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_DATE.to_string());

    let opponent = non_empty_or(slugify(parts.opponent_name), NO_OPPONENT);
    let tournament = non_empty_or(slugify(parts.tournament_name), NO_TOURNAMENT);

    format!("{date}-{opponent}-{tournament}-{}", parts.stage.tag())
}

fn non_empty_or(s: String, fallback: &str) -> String {
    if s.is_empty() { fallback.to_string() } else { s }
}

/// Calendar date of a slug. An instant with an offset is moved to
/// Belgrade first so late-evening games keep their local date.
fn slug_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    if let Some(local) = clock::parse_local_input(input) {
        return Some(local.date());
    }
    clock::parse_utc(input).map(clock::belgrade_date)
}
