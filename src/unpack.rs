//! Reading extraction
//!
//! Dictionary imports land in one composite field: an expression line
//! carrying the reading, then the meaning text. Unpacking splits the two,
//! trying one grammar per known dictionary format against the expression
//! line and stopping at the first match.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters a reading token may draw from: alphanumerics, kana with the
/// prolonged-sound mark, the iteration mark and the CJK ideographs.
const TOKEN: &str = r"[0-9A-Za-zぁ-ゖァ-ヺー々\x{4E00}-\x{9FFF}]+";

/// Line-break marker used inside field values
const LINE_BREAK: &str = "<br>";

lazy_static! {
    // Legacy bracket form, e.g. "たる【足る】 ★★★★": reading right before the
    // bracketed headword
    static ref RE_READING_BRACKET: Regex =
        Regex::new(&format!("({})【[^】]*】", TOKEN)).expect("bracket grammar");

    // Parenthesis form, e.g. "足る（たる） ★★★★": reading inside the parens,
    // full-width or ASCII
    static ref RE_READING_PAREN: Regex =
        Regex::new(&format!("[（(]({})[）)]", TOKEN)).expect("paren grammar");

    // Plain form: bare tokens anywhere on the line
    static ref RE_READING_TOKEN: Regex = Regex::new(TOKEN).expect("token grammar");
}

/// Unpack a composite dictionary field into reading and meaning.
///
/// The first line is the expression line; the grammars above run against it
/// in order. On a match, the expression line and the blank lines directly
/// under it are dropped and the rest is the meaning. When nothing matches,
/// the reading comes back empty and the content unchanged. That pair is the
/// failure signal.
pub fn unpack_reading(content: &str) -> (String, String) {
    let lines: Vec<&str> = content.split(LINE_BREAK).collect();

    let reading = match extract_reading(lines[0]) {
        Some(token) => token.to_string(),
        None => return (String::new(), content.to_string()),
    };

    // Skip the blank run under the expression line
    let mut rest = 1;
    while rest < lines.len() && lines[rest].trim().is_empty() {
        rest += 1;
    }
    let meaning = lines[rest..].join(LINE_BREAK);

    (reading, meaning)
}

fn extract_reading(expression: &str) -> Option<&str> {
    if let Some(caps) = RE_READING_BRACKET.captures(expression) {
        return caps.get(1).map(|m| m.as_str());
    }
    if let Some(caps) = RE_READING_PAREN.captures(expression) {
        return caps.get(1).map(|m| m.as_str());
    }
    longest_token(expression)
}

/// Longest token on the line; the first one wins a tie
fn longest_token(expression: &str) -> Option<&str> {
    let mut longest: Option<&str> = None;
    let mut longest_chars = 0;

    for token in RE_READING_TOKEN.find_iter(expression) {
        let chars = token.as_str().chars().count();
        if chars > longest_chars {
            longest = Some(token.as_str());
            longest_chars = chars;
        }
    }

    longest
}
