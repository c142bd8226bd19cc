use serde::{Deserialize, Serialize};

/// One line of the course entity file. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCourse {
    /// Composite course identifier, e.g. "C_course-v1:TsinghuaX+60240013X+sp"
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Course description, usually HTML
    #[serde(default)]
    pub about: Option<String>,
}

/// One line of the course-concept relation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPair {
    pub course_id: String,
    /// Concept identifier whose last `_` segment names a category, e.g. "K_limit_数学"
    pub concept_id: String,
}

/// A cleaned course as written to the output file.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCourse {
    pub id: String,
    pub name: String,
    pub school: String,
    /// No teacher data exists in the source; always equal to `school`.
    pub teacher: String,
    pub intro: String,
    pub category: String,
    /// Icon filename derived from `category`
    pub image: String,
}

impl RelationPair {
    /// Trailing `_`-delimited segment of the concept id, `None` when there is no `_`.
    ///
    /// A concept ending in `_` yields `Some("")`, which counts as a vote like any other token.
    pub fn category_token(&self) -> Option<&str> {
        self.concept_id.rsplit_once('_').map(|(_, token)| token)
    }
}
