use crate::errors::AppError;
use crate::models::MoodData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("MOOD_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/mood.json"))
}

/// Fail-soft load: a missing file yields the seeded starter collection,
/// anything unreadable or unparsable yields an empty one.
pub async fn load_data(path: &Path) -> MoodData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse mood data file, resetting to empty: {err}");
                MoodData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MoodData::seeded(),
        Err(err) => {
            error!("failed to read mood data file: {err}");
            MoodData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &MoodData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRecord, MoodEntry};

    fn temp_data_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        env::temp_dir().join(format!(
            "mood_journal_{tag}_{}_{nanos}.json",
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = temp_data_path("roundtrip");
        let data = MoodData {
            days: vec![
                DayRecord {
                    date: "2024-10-09".to_string(),
                    entries: vec![
                        MoodEntry::new("20:00".to_string(), 5.0, String::new()),
                        MoodEntry::new("21:30".to_string(), 7.5, "walked home".to_string()),
                    ],
                },
                DayRecord {
                    date: "2024-10-11".to_string(),
                    entries: vec![MoodEntry::new("09:15".to_string(), 3.0, "rough night".to_string())],
                },
            ],
        };

        persist_data(&path, &data).await.expect("persist failed");
        let loaded = load_data(&path).await;
        assert_eq!(loaded, data);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_file_yields_seeded_collection() {
        let path = temp_data_path("missing");
        let loaded = load_data(&path).await;
        assert_eq!(loaded.days.len(), 1);
        assert_eq!(loaded.days[0].date, "2024-10-09");
        assert_eq!(loaded.days[0].entries.len(), 1);
        assert_eq!(loaded.days[0].entries[0].mood, 5.0);
    }

    #[tokio::test]
    async fn corrupt_file_yields_empty_collection() {
        let path = temp_data_path("corrupt");
        std::fs::write(&path, b"{ not json at all").unwrap();

        let loaded = load_data(&path).await;
        assert!(loaded.days.is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
