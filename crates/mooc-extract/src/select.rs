/// Two-pass stratified selection.
///
/// Pass 1 takes the first `per_category` records of every category, categories in
/// first-seen order. Pass 2 fills up to `target_count` with the records pass 1 did
/// not take, in arrival order. The result is then cut to `target_count`.
///
/// Records are tracked by arrival position, not by value: two identical input
/// records are distinct candidates and either or both may be selected.
use indexmap::IndexMap;

use crate::model::EnrichedCourse;

pub const DEFAULT_PER_CATEGORY: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct StratifiedSelector {
    target_count: usize,
    per_category: usize,
}

impl StratifiedSelector {
    pub fn new(target_count: usize, per_category: usize) -> Self {
        Self {
            target_count,
            per_category,
        }
    }

    pub fn select(&self, records: Vec<EnrichedCourse>) -> Vec<EnrichedCourse> {
        let picked = self.pick(&records);
        let mut slots: Vec<Option<EnrichedCourse>> = records.into_iter().map(Some).collect();
        picked
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect()
    }

    /// Arrival positions of the selected records, in output order.
    fn pick(&self, records: &[EnrichedCourse]) -> Vec<usize> {
        let mut by_category: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, record) in records.iter().enumerate() {
            by_category
                .entry(record.category.as_str())
                .or_default()
                .push(index);
        }

        let mut taken = vec![false; records.len()];
        let mut selected: Vec<usize> = Vec::new();
        for indices in by_category.values() {
            for &index in indices.iter().take(self.per_category) {
                taken[index] = true;
                selected.push(index);
            }
        }

        let missing = self.target_count.saturating_sub(selected.len());
        selected.extend(
            (0..records.len())
                .filter(|&index| !taken[index])
                .take(missing),
        );
        selected.truncate(self.target_count);
        selected
    }
}
