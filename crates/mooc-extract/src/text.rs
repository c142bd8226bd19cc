/// Cleaning of free-text course descriptions.
///
/// `normalize` is a composition of three independent steps:
/// tag stripping, entity decoding, whitespace collapsing. All of them are total
/// over arbitrary input, malformed markup included.
use std::sync::LazyLock;

use regex::Regex;

/// Normalized text shorter than this is replaced by [`DEFAULT_INTRO`].
pub const MIN_INTRO_CHARS: usize = 30;
pub const MAX_INTRO_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";
pub const DEFAULT_INTRO: &str = "本课程提供系统化的学习内容，帮助学生掌握核心知识与技能。";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strip markup, decode entities and collapse whitespace.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    let stripped = strip_tags(raw);
    let decoded = decode_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Remove every `<...>` run. Purely lexical, no notion of nesting.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Decode character references the way an HTML5 parser does in text content:
/// legacy named references may omit the `;`, and invalid code points become U+FFFD.
pub fn decode_entities(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Apply the intro length policy to already-normalized text.
///
/// Lengths are counted in characters. Short text is replaced with
/// [`DEFAULT_INTRO`]; long text keeps its first 200 characters plus an ellipsis.
pub fn truncate_intro(normalized: &str) -> String {
    let len = normalized.chars().count();
    if len < MIN_INTRO_CHARS {
        return DEFAULT_INTRO.to_string();
    }
    if len > MAX_INTRO_CHARS {
        let mut out: String = normalized.chars().take(MAX_INTRO_CHARS).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        normalized.to_string()
    }
}

/// `normalize` followed by `truncate_intro`.
pub fn course_intro(about: Option<&str>) -> String {
    truncate_intro(&normalize(about))
}
