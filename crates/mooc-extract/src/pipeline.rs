/// End-to-end extraction run.
///
/// relation file -> category map; course file + category map -> enriched records;
/// records -> stratified selection -> pretty-printed JSON array.
///
/// Missing inputs never abort the run. Without relations every course gets the
/// default category; without courses an empty array is still written.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use mooc_catalog::Catalog;
use tracing::{debug, error, info, warn};

use crate::category::load_category_map;
use crate::config::Config;
use crate::error::AppError;
use crate::input::for_each_line;
use crate::model::EnrichedCourse;
use crate::record::{parse_course_line, RecordBuilder};
use crate::select::StratifiedSelector;

/// Counts reported after a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Courses with a resolved category in the relation file.
    pub categories_loaded: usize,
    /// Valid course records before selection.
    pub courses_loaded: usize,
    pub courses_selected: usize,
    /// Selected courses per category, largest first.
    pub distribution: Vec<(String, usize)>,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    catalog: &'a Catalog,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn run(&self) -> Result<RunSummary, AppError> {
        let categories = load_category_map(&self.config.relation_file);
        if categories.is_empty() {
            warn!(
                default_category = self.catalog.default_category(),
                "no course categories resolved"
            );
        } else {
            info!(courses = categories.len(), "category map ready");
        }

        let builder = RecordBuilder::new(self.catalog, &categories);
        let records = load_courses(&self.config.course_file, &builder);
        let courses_loaded = records.len();

        let selector = StratifiedSelector::new(self.config.target_count, self.config.per_category);
        let selected = selector.select(records);
        info!(
            loaded = courses_loaded,
            selected = selected.len(),
            target = self.config.target_count,
            "courses selected"
        );

        let distribution = category_distribution(&selected);
        for (category, count) in &distribution {
            info!(category = %category, count, "category distribution");
        }

        write_output(&self.config.output_file, &selected)?;
        info!(
            path = %self.config.output_file.display(),
            courses = selected.len(),
            "output written"
        );

        Ok(RunSummary {
            categories_loaded: categories.len(),
            courses_loaded,
            courses_selected: selected.len(),
            distribution,
        })
    }
}

/// Read the course file and build every valid record, in file order.
///
/// A missing course file is logged as an error and yields no records.
pub fn load_courses(path: &Path, builder: &RecordBuilder<'_>) -> Vec<EnrichedCourse> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!(path = %path.display(), error = %e, "course file unavailable, nothing to extract");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for_each_line(BufReader::new(file), path, |line_number, line| {
        match parse_course_line(line).and_then(|raw| builder.build(&raw)) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                debug!(line_number, "unusable course line, skipping");
            }
        }
    });

    info!(path = %path.display(), courses = records.len(), skipped, "course file loaded");
    records
}

/// Count per category, largest first; equal counts keep first-seen order.
pub fn category_distribution(records: &[EnrichedCourse]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }
    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}

/// Write `records` as a 2-space indented JSON array, without a trailing newline.
pub fn write_output(path: &Path, records: &[EnrichedCourse]) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| AppError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, &bytes).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path, target_count: usize) -> Config {
        Config {
            course_file: dir.join("course.json"),
            relation_file: dir.join("course-concept.json"),
            output_file: dir.join("out").join("mooc_data.json"),
            target_count,
            per_category: 2,
            catalog_file: None,
        }
    }

    fn course_line(id: &str, name: &str) -> String {
        serde_json::json!({
            "id": id,
            "name": name,
            "about": "<p>This course walks through the fundamentals step by step &amp; with exercises.</p>",
        })
        .to_string()
    }

    fn read_output(path: &Path) -> (String, Vec<EnrichedCourse>) {
        let text = std::fs::read_to_string(path).expect("output exists");
        let records = serde_json::from_str(&text).expect("output is a JSON array");
        (text, records)
    }

    #[test]
    fn end_to_end_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), 6);

        let mut courses = Vec::new();
        let mut relations = Vec::new();
        // 5 math, 3 physics, 1 history, interleaved
        let plan = [
            ("m1", "数学"),
            ("p1", "物理"),
            ("m2", "数学"),
            ("m3", "数学"),
            ("h1", "历史"),
            ("p2", "物理"),
            ("m4", "数学"),
            ("p3", "物理"),
            ("m5", "数学"),
        ];
        for (suffix, category) in plan {
            let id = format!("C_course-v1:TsinghuaX+{suffix}+2018_T1");
            courses.push(course_line(&id, &format!("课程 {suffix}")));
            relations.push(format!("{id}\tK_concept_{category}"));
            relations.push(format!("{id}\tK_other_{category}"));
        }
        courses.insert(3, "{broken json".to_string());
        courses.insert(5, r#"{"id": "C_MITx_1", "name": "  "}"#.to_string());
        relations.push("garbage".to_string());
        std::fs::write(&config.course_file, courses.join("\n")).expect("write courses");
        std::fs::write(&config.relation_file, relations.join("\n")).expect("write relations");

        let catalog = Catalog::builtin();
        let summary = Pipeline::new(&config, &catalog).run().expect("run succeeds");
        assert_eq!(summary.categories_loaded, 9);
        assert_eq!(summary.courses_loaded, 9);
        assert_eq!(summary.courses_selected, 6);
        assert_eq!(
            summary.distribution,
            vec![
                ("数学".to_string(), 3),
                ("物理".to_string(), 2),
                ("历史".to_string(), 1),
            ]
        );

        let (text, records) = read_output(&config.output_file);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "C_course-v1:TsinghuaX+m1+2018_T1",
                "C_course-v1:TsinghuaX+m2+2018_T1",
                "C_course-v1:TsinghuaX+p1+2018_T1",
                "C_course-v1:TsinghuaX+p2+2018_T1",
                "C_course-v1:TsinghuaX+h1+2018_T1",
                "C_course-v1:TsinghuaX+m3+2018_T1",
            ]
        );
        assert!(records.iter().all(|r| r.school == "清华大学" && r.teacher == r.school));
        assert_eq!(records[4].image, "cat_history.png");
        assert!(records[0].intro.contains("fundamentals step by step & with"));

        // unescaped non-ASCII, 2-space indent, fixed field order
        assert!(text.contains("\"school\": \"清华大学\""));
        assert!(text.starts_with("[\n  {\n    \"id\": "));
        let first = &text[..text.find('}').expect("object end")];
        let keys = [
            "\"id\"",
            "\"name\"",
            "\"school\"",
            "\"teacher\"",
            "\"intro\"",
            "\"category\"",
            "\"image\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| first.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.ends_with("  }\n]"));
    }

    #[test]
    fn missing_relation_file_uses_default_category() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), 10);
        std::fs::write(
            &config.course_file,
            format!("{}\n{}\n", course_line("C_MITx_6.00", "Intro CS"), course_line("x", "Other")),
        )
        .expect("write courses");

        let catalog = Catalog::builtin();
        let summary = Pipeline::new(&config, &catalog).run().expect("run succeeds");
        assert_eq!(summary.categories_loaded, 0);
        assert_eq!(summary.courses_selected, 2);

        let (_, records) = read_output(&config.output_file);
        assert!(records.iter().all(|r| r.category == "通识" && r.image == "cat_default.png"));
        assert_eq!(records[0].school, "麻省理工学院");
        assert_eq!(records[1].school, "Unknown");
    }

    #[test]
    fn missing_course_file_writes_empty_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config(dir.path(), 50);

        let catalog = Catalog::builtin();
        let summary = Pipeline::new(&config, &catalog).run().expect("run succeeds");
        assert_eq!(summary.courses_loaded, 0);
        assert_eq!(summary.courses_selected, 0);
        assert!(summary.distribution.is_empty());

        let (text, records) = read_output(&config.output_file);
        assert!(records.is_empty());
        assert_eq!(text, "[]");
    }

    #[test]
    fn distribution_orders_by_count_then_first_seen() {
        let record = |category: &str| EnrichedCourse {
            id: "id".to_string(),
            name: "n".to_string(),
            school: "s".to_string(),
            teacher: "s".to_string(),
            intro: String::new(),
            category: category.to_string(),
            image: String::new(),
        };
        let records = vec![record("B"), record("A"), record("C"), record("A"), record("C")];
        assert_eq!(
            category_distribution(&records),
            vec![("A".to_string(), 2), ("C".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn output_layout_matches_json_dump() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mooc_data.json");
        let record = EnrichedCourse {
            id: "C_MITx_6.00".to_string(),
            name: "算法".to_string(),
            school: "麻省理工学院".to_string(),
            teacher: "麻省理工学院".to_string(),
            intro: "a \"quoted\" intro".to_string(),
            category: "计算机".to_string(),
            image: "cat_cs.png".to_string(),
        };
        write_output(&path, &[record]).expect("write succeeds");

        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"id\": \"C_MITx_6.00\",\n",
            "    \"name\": \"算法\",\n",
            "    \"school\": \"麻省理工学院\",\n",
            "    \"teacher\": \"麻省理工学院\",\n",
            "    \"intro\": \"a \\\"quoted\\\" intro\",\n",
            "    \"category\": \"计算机\",\n",
            "    \"image\": \"cat_cs.png\"\n",
            "  }\n",
            "]"
        );
        assert_eq!(std::fs::read_to_string(&path).expect("read"), expected);
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").expect("write");
        let err = write_output(&blocker.join("out.json"), &[]).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
