use mooc_catalog::Catalog;

use crate::category::CategoryMap;
use crate::model::{EnrichedCourse, RawCourse};
use crate::origin::{extract_origin, resolve_school};
use crate::text::course_intro;

/// Joins raw course entries with their category and catalog lookups.
pub struct RecordBuilder<'a> {
    catalog: &'a Catalog,
    categories: &'a CategoryMap,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(catalog: &'a Catalog, categories: &'a CategoryMap) -> Self {
        Self {
            catalog,
            categories,
        }
    }

    /// Build the output record, or `None` when the id or trimmed name is empty.
    pub fn build(&self, course: &RawCourse) -> Option<EnrichedCourse> {
        let id = course.id.as_deref().filter(|id| !id.is_empty())?;
        let name = course
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())?;

        let school = resolve_school(self.catalog, extract_origin(id)).to_string();
        let category = self
            .categories
            .category_or(id, self.catalog.default_category());

        Some(EnrichedCourse {
            id: id.to_string(),
            name: name.to_string(),
            teacher: school.clone(),
            school,
            intro: course_intro(course.about.as_deref()),
            category: category.to_string(),
            image: self.catalog.icon_for(category).to_string(),
        })
    }
}

/// Decode one course line. Anything that is not a JSON object with string
/// (or null/absent) `id`, `name` and `about` fields is rejected.
pub fn parse_course_line(line: &str) -> Option<RawCourse> {
    let value: serde_json::Value = serde_json::from_str(line).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}
