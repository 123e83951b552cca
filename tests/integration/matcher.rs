use merge_selector::engine::core::MergeSelection;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Len,
    Ids,
    Sizes,
    TotalSize,
    Score,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MatcherValue {
    Number(f64),
    Multiple(Vec<u64>),
}

#[derive(Debug, Deserialize)]
pub struct Matcher {
    pub kind: MatcherKind,
    pub value: MatcherValue,
}

impl Matcher {
    pub fn matches(&self, actual: &MergeSelection) -> bool {
        debug!("Matching {:?} against selection {:?}", self, actual);
        match (&self.kind, &self.value) {
            (MatcherKind::Len, MatcherValue::Number(n)) => actual.len() as f64 == *n,
            (MatcherKind::TotalSize, MatcherValue::Number(n)) => actual.total_size() as f64 == *n,
            (MatcherKind::Score, MatcherValue::Number(n)) => (actual.score - n).abs() < 1e-6,
            (MatcherKind::Ids, MatcherValue::Multiple(ids)) => {
                actual.part_ids().iter().map(|id| id.0).collect::<Vec<_>>() == *ids
            }
            (MatcherKind::Sizes, MatcherValue::Multiple(sizes)) => {
                actual.parts.iter().map(|p| p.size).collect::<Vec<_>>() == *sizes
            }
            (kind, value) => panic!("Matcher {:?} does not accept {:?}", kind, value),
        }
    }
}
