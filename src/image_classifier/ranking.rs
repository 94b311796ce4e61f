use crate::image_classifier::interface::Prediction;
use std::collections::HashSet;

const DISTRIBUTION_TOLERANCE: f32 = 1e-3;

/// Turns raw model scores into predictions sorted by confidence.
///
/// Scores that are already a probability distribution are kept as is,
/// anything else (logits) goes through softmax first. Ties keep label
/// order and repeated labels keep their first occurrence.
pub fn rank(
    labels: &[String],
    scores: &[f32],
) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
    if labels.len() != scores.len() {
        return Err(format!(
            "model produced {} scores for {} labels",
            scores.len(),
            labels.len()
        )
        .into());
    }

    if scores.iter().any(|score| !score.is_finite()) {
        return Err("model produced a non-finite score".into());
    }

    let probabilities = if is_distribution(scores) {
        scores.to_vec()
    } else {
        softmax(scores)
    };

    let mut ranked: Vec<(usize, f32)> = probabilities.into_iter().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut seen = HashSet::new();
    let predictions = ranked
        .into_iter()
        .filter(|(index, _)| seen.insert(labels[*index].as_str()))
        .map(|(index, confidence)| Prediction {
            label: labels[index].clone(),
            confidence: confidence.clamp(0.0, 1.0),
        })
        .collect();

    Ok(predictions)
}

fn is_distribution(scores: &[f32]) -> bool {
    let in_range = scores.iter().all(|score| (0.0..=1.0).contains(score));
    let sum: f32 = scores.iter().sum();
    in_range && (sum - 1.0).abs() <= DISTRIBUTION_TOLERANCE
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|score| (score - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|value| value / sum).collect()
}
