//! Casing rules for names, destinations and purposes

/// Upper-case each letter that starts a word and lower-case the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"o'neil"` becomes `"O'Neil"` and `"3rd"` becomes `"3Rd"`. Combining
/// marks belong to the letter before them and never start or end a word.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for ch in text.chars() {
        if is_combining_mark(ch) {
            out.push(ch);
        } else if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut out, ch);
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }

    out
}

/// Title-case the first character and lower-case everything after it
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len());
    if let Some(first) = chars.next() {
        push_titlecase(&mut out, first);
        out.extend(chars.flat_map(char::to_lowercase));
    }
    out
}

/// Titlecase form of one character.
///
/// Only the first character of a multi-character upper-case expansion stays
/// upper-case (`ß` becomes `Ss`); the Latin digraphs have their own
/// titlecase letters (`ǆ` becomes `ǅ`).
fn push_titlecase(out: &mut String, ch: char) {
    if let Some(title) = digraph_titlecase(ch) {
        out.push(title);
        return;
    }

    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

fn digraph_titlecase(ch: char) -> Option<char> {
    match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}
