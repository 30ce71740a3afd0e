use std::fmt;

use crate::image_pipeline::classify::labels::LabelTable;

/// One reported classification result.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Class index as reported by the model
    pub id: String,
    /// Label for the class, when the label table has one
    pub title: Option<String>,
    pub confidence: f32,
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.id)?;
        if let Some(title) = &self.title {
            write!(f, "{title} ")?;
        }
        write!(f, "({:.1}%)", self.confidence * 100.0)
    }
}

/// Keeps scores strictly above `threshold`, highest first, at most
/// `max_results` of them. Order among equal scores is unspecified.
pub fn select_top(
    scores: &[f32],
    labels: Option<&LabelTable>,
    threshold: f32,
    max_results: usize,
) -> Vec<Recognition> {
    let mut candidates: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, confidence)| confidence > threshold)
        .collect();

    candidates.sort_unstable_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(max_results);

    candidates
        .into_iter()
        .map(|(index, confidence)| Recognition {
            id: index.to_string(),
            title: labels.and_then(|l| l.get(index)).map(str::to_owned),
            confidence,
        })
        .collect()
}
