use crate::models::{AveragePoint, MoodData, MoodEntry};

/// One point per day record, in stored order. A record with no entries
/// produces `None` rather than a non-JSON float.
pub fn daily_averages(data: &MoodData) -> Vec<AveragePoint> {
    data.days
        .iter()
        .map(|day| AveragePoint {
            date: day.date.clone(),
            average: mean_mood(&day.entries),
        })
        .collect()
}

fn mean_mood(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let sum: f64 = entries.iter().map(|entry| entry.mood).sum();
    Some(round2(sum / entries.len() as f64))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
