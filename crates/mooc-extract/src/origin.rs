/// Extraction of the origin (issuing platform/institution) token from course ids.
///
/// Ids come in two shapes:
/// - edX style: `C_course-v1:TsinghuaX+60240013X+2018_T1`
/// - plain: `C_MITx_6.00`
///
/// The edX form must be tried first: its ids also start with `C_`, so the looser
/// pattern would yield `course-v1:TsinghuaX+...` instead of `TsinghuaX`.
use std::sync::LazyLock;

use mooc_catalog::Catalog;
use regex::Regex;

pub const UNKNOWN_ORIGIN: &str = "Unknown";

static EDX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"course-v1:([^+]+)").expect("valid regex"));
static PLAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"C_([^_]+)").expect("valid regex"));

pub fn extract_origin(course_id: &str) -> &str {
    [&*EDX_RE, &*PLAIN_RE]
        .into_iter()
        .find_map(|re| re.captures(course_id).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
        .unwrap_or(UNKNOWN_ORIGIN)
}

/// Institution name for an origin, or the origin itself when the catalog has no entry.
pub fn resolve_school<'a>(catalog: &'a Catalog, origin: &'a str) -> &'a str {
    catalog.school_for(origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edx_style_ids() {
        assert_eq!(extract_origin("course-v1:TsinghuaX+60240013X+..."), "TsinghuaX");
        assert_eq!(
            extract_origin("C_course-v1:PekingX+04830050x+2018_T1"),
            "PekingX"
        );
    }

    #[test]
    fn plain_ids() {
        assert_eq!(extract_origin("C_MITx_6.00"), "MITx");
        assert_eq!(extract_origin("prefix-C_HarvardX_CS50"), "HarvardX");
        assert_eq!(extract_origin("C_EPFLx"), "EPFLx");
    }

    #[test]
    fn edx_marker_wins_over_plain_pattern() {
        assert_eq!(extract_origin("C_course-v1:UQx+Think101x"), "UQx");
    }

    #[test]
    fn unknown_ids() {
        assert_eq!(extract_origin("opaque-id-no-pattern"), UNKNOWN_ORIGIN);
        assert_eq!(extract_origin(""), UNKNOWN_ORIGIN);
        assert_eq!(extract_origin("C_"), UNKNOWN_ORIGIN);
        assert_eq!(extract_origin("course-v1:+x"), UNKNOWN_ORIGIN);
    }

    #[test]
    fn school_resolution_degrades_to_origin() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_school(&catalog, "TsinghuaX"), "清华大学");
        assert_eq!(resolve_school(&catalog, "SomeX"), "SomeX");
        assert_eq!(resolve_school(&catalog, UNKNOWN_ORIGIN), UNKNOWN_ORIGIN);
    }
}
