use std::path::PathBuf;

use crate::error::AppError;
use crate::select::DEFAULT_PER_CATEGORY;

const DEFAULT_COURSE_FILE: &str = "data/MOOCCube/entities/course.json";
const DEFAULT_RELATION_FILE: &str = "data/MOOCCube/relations/course-concept.json";
const DEFAULT_OUTPUT_FILE: &str = "entry/src/main/resources/rawfile/mooc_data.json";
const DEFAULT_TARGET_COUNT: usize = 50;

/// Extraction settings, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-lines course entity file.
    pub course_file: PathBuf,
    /// Tab-delimited course-concept relation file.
    pub relation_file: PathBuf,
    pub output_file: PathBuf,
    /// Maximum number of courses written to the output.
    pub target_count: usize,
    /// How many courses each category contributes before the fill pass.
    pub per_category: usize,
    /// Optional JSON file merged over the built-in lookup tables.
    pub catalog_file: Option<PathBuf>,
}

impl Config {
    /// All variables are optional:
    /// - `MOOC_COURSE_FILE` (default: "data/MOOCCube/entities/course.json")
    /// - `MOOC_RELATION_FILE` (default: "data/MOOCCube/relations/course-concept.json")
    /// - `MOOC_OUTPUT_FILE` (default: "entry/src/main/resources/rawfile/mooc_data.json")
    /// - `MOOC_TARGET_COUNT` (default: 50)
    /// - `MOOC_PER_CATEGORY` (default: 2)
    /// - `MOOC_CATALOG_FILE`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_or = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        let target_count = parse_count(&lookup, "MOOC_TARGET_COUNT", DEFAULT_TARGET_COUNT)?;
        let per_category = parse_count(&lookup, "MOOC_PER_CATEGORY", DEFAULT_PER_CATEGORY)?;
        if per_category == 0 {
            return Err(AppError::Config(
                "MOOC_PER_CATEGORY must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            course_file: path_or("MOOC_COURSE_FILE", DEFAULT_COURSE_FILE),
            relation_file: path_or("MOOC_RELATION_FILE", DEFAULT_RELATION_FILE),
            output_file: path_or("MOOC_OUTPUT_FILE", DEFAULT_OUTPUT_FILE),
            target_count,
            per_category,
            catalog_file: lookup("MOOC_CATALOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> Result<usize, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::Config(format!("{key} must be a non-negative integer, got {raw:?}"))
        }),
    }
}
