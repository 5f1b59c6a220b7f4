//! Text cleaning for attachment titles and captions
//!
//! Filenames uploaded to the media library usually become titles like
//! `sunset-over-the-bay_2` or `IMG-0042 (copy)`. Cleaning turns them into
//! something usable as alt text.

/// Clean a title or caption
///
/// **Algorithm:**
/// 1. Replace every `-` with a space
/// 2. Drop every character that is not an ASCII letter, ASCII digit or space
/// 3. Upper-case the first character only (the rest is left untouched)
///
/// ASCII-only on purpose: no locale handling, no Unicode normalization.
/// The output only contains ASCII, so cleaning is idempotent.
pub fn clean(text: &str) -> String {
    let mut cleaned: String = text
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    if let Some(first) = cleaned.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    cleaned
}
