//! Turns raw profile-page markup into a `PlayerRecord`.
//!
//! Extraction never fails: a missing or malformed structure degrades to the
//! sentinel name and `Unrated` fields, so one bad profile cannot take the
//! batch down.

use tracing::warn;

use crate::markup::{class_block, inner, text_content};
use crate::types::{PlayerRecord, Rating};

const TITLE_CLASS: &str = "profile-top-title";
const RATINGS_CONTAINER_CLASS: &str = "profile-top-rating-dataCont";
const RATING_ENTRY_CLASS: &str = "profile-top-rating-data";
const RATING_LABEL_CLASS: &str = "profile-top-rating-dataDesc";

pub fn extract_profile(markup: &str, fide_id: &str) -> PlayerRecord {
    // No title element means the profile does not exist.
    let Some((title_s, title_e)) = class_block(markup, "div", TITLE_CLASS, 0) else {
        warn!(fide_id, "profile title not found, treating player as unknown");
        return PlayerRecord::placeholder(fide_id);
    };
    // A present-but-empty title yields the empty name; only a missing title
    // gets the sentinel label.
    let name = text_content(inner(&markup[title_s..title_e]));

    let mut record = PlayerRecord {
        fide_id: fide_id.to_string(),
        name,
        standard: Rating::Unrated,
        rapid: Rating::Unrated,
        blitz: Rating::Unrated,
    };

    let Some((cont_s, cont_e)) = class_block(markup, "div", RATINGS_CONTAINER_CLASS, 0) else {
        return record;
    };
    let container = &markup[cont_s..cont_e];

    let mut pos = 0usize;
    while let Some((entry_s, entry_e)) = class_block(container, "div", RATING_ENTRY_CLASS, pos) {
        let entry = &container[entry_s..entry_e];
        pos = entry_e;

        let label = class_block(entry, "span", RATING_LABEL_CLASS, 0)
            .map(|(s, e)| text_content(inner(&entry[s..e])))
            .unwrap_or_default();
        let value = rating_from_entry(entry);

        // Case-sensitive substring match; duplicate labels are
        // last-write-wins, no aggregation.
        if label.contains("std") {
            record.standard = value;
        } else if label.contains("rapid") {
            record.rapid = value;
        } else if label.contains("blitz") {
            record.blitz = value;
        }
    }

    record
}

/// The rating value is the last whitespace-delimited token of the entry's
/// visible text; the label precedes the number.
fn rating_from_entry(entry: &str) -> Rating {
    let text = text_content(inner(entry));
    match text.split_whitespace().last() {
        Some(token) => parse_rating_token(token),
        None => Rating::Unrated,
    }
}

/// "Not rated" / "Unrated" markers, unparseable tokens and negative numbers
/// all map to `Unrated`. FIDE ratings are non-negative; a negative or
/// non-numeric value is never displayed as a number.
fn parse_rating_token(token: &str) -> Rating {
    if token.to_ascii_lowercase().contains("rated") {
        return Rating::Unrated;
    }
    match token.parse::<i64>() {
        Ok(v) if (0..=u32::MAX as i64).contains(&v) => Rating::Rated(v as u32),
        Ok(_) | Err(_) => Rating::Unrated,
    }
}
