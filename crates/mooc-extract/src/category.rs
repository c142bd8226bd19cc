/// Per-course category resolution from the course-concept relation file.
///
/// A course is linked to many concepts, each of which names a coarse category in
/// its last `_` segment. The course's category is the most frequent token among
/// its concepts; ties go to the token seen first.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::input::for_each_line;
use crate::model::RelationPair;

/// Resolved `course_id -> category`, in first-seen course order.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    entries: IndexMap<String, String>,
}

impl CategoryMap {
    pub fn get(&self, course_id: &str) -> Option<&str> {
        self.entries.get(course_id).map(String::as_str)
    }

    /// The resolved category, or `default` for courses without one.
    pub fn category_or<'a>(&'a self, course_id: &str, default: &'a str) -> &'a str {
        self.get(course_id).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one relation line: `course_id<TAB>concept_id[<TAB>...]`.
///
/// Returns `None` for lines with fewer than two columns, an empty course id, or
/// a concept id without any `_`.
pub fn parse_relation_line(line: &str) -> Option<RelationPair> {
    let mut columns = line.trim().split('\t');
    let course_id = columns.next()?.trim();
    let concept_id = columns.next()?.trim();
    if course_id.is_empty() {
        return None;
    }
    let pair = RelationPair {
        course_id: course_id.to_string(),
        concept_id: concept_id.to_string(),
    };
    pair.category_token().is_some().then_some(pair)
}

pub fn build_category_map<I>(pairs: I) -> CategoryMap
where
    I: IntoIterator<Item = RelationPair>,
{
    // course -> (token -> count), both levels in insertion order
    let mut votes: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
    for pair in pairs {
        let Some(token) = pair.category_token() else {
            continue;
        };
        let token = token.to_string();
        *votes
            .entry(pair.course_id)
            .or_default()
            .entry(token)
            .or_insert(0) += 1;
    }

    let entries = votes
        .into_iter()
        .filter_map(|(course_id, counts)| majority(counts).map(|category| (course_id, category)))
        .collect();
    CategoryMap { entries }
}

/// Most frequent key; the earliest-inserted one among equals.
fn majority(counts: IndexMap<String, usize>) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (token, count) in counts {
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((token, count));
        }
    }
    best.map(|(token, _)| token)
}

/// Read and resolve the relation file at `path`.
///
/// A missing or unreadable file is not fatal: it is logged and yields an empty
/// map, so every course falls back to the default category.
pub fn load_category_map(path: &Path) -> CategoryMap {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "relation file unavailable, using default category for all courses"
            );
            return CategoryMap::default();
        }
    };

    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for_each_line(BufReader::new(file), path, |line_number, line| {
        match parse_relation_line(line) {
            Some(pair) => pairs.push(pair),
            None => {
                skipped += 1;
                debug!(line_number, "malformed relation line, skipping");
            }
        }
    });

    let relations = pairs.len();
    let map = build_category_map(pairs);
    info!(
        path = %path.display(),
        relations,
        skipped,
        courses = map.len(),
        "relation file loaded"
    );
    map
}
