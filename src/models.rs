use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub time: String,
    pub mood: f64,
    pub notes: String,
}

impl MoodEntry {
    pub fn new(time: String, mood: f64, notes: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            mood,
            notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub entries: Vec<MoodEntry>,
}

/// The whole journal, persisted as a bare JSON array of day records.
/// At most one record exists per date; records keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodData {
    pub days: Vec<DayRecord>,
}

impl MoodData {
    /// Starter collection written on first run, when no data file exists yet.
    pub fn seeded() -> Self {
        Self {
            days: vec![DayRecord {
                date: "2024-10-09".to_string(),
                entries: vec![MoodEntry::new("20:00".to_string(), 5.0, String::new())],
            }],
        }
    }

    pub fn day(&self, date: &str) -> Option<&DayRecord> {
        self.days.iter().find(|day| day.date == date)
    }

    pub fn day_mut(&mut self, date: &str) -> Option<&mut DayRecord> {
        self.days.iter_mut().find(|day| day.date == date)
    }

    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    pub date: String,
    pub time: String,
    pub mood: f64,
    #[serde(default)]
    pub notes: String,
    pub edit_date: Option<String>,
    pub edit_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct DayPageQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    pub date: Option<String>,
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragePoint {
    pub date: String,
    pub average: Option<f64>,
}
