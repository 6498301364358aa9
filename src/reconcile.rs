use crate::models::{DayRecord, MoodData, MoodEntry};
use tracing::warn;
use uuid::Uuid;

/// Request-scoped reference to the entry being edited. It rides the form
/// round trip and is never written to the data file.
#[derive(Debug, Clone)]
pub struct EditTarget {
    pub date: String,
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct EntrySubmission {
    pub date: String,
    pub time: String,
    pub mood: f64,
    pub notes: String,
    pub edit: Option<EditTarget>,
}

#[derive(Debug)]
pub struct ReconcileOutcome {
    pub day: DayRecord,
    pub edited: bool,
}

/// Applies a submitted entry to the collection: overwrite in place when the
/// edit target matches the submitted date and still resolves, otherwise
/// append (creating the day record on first entry for a date).
pub fn reconcile(data: &mut MoodData, submission: EntrySubmission) -> ReconcileOutcome {
    let EntrySubmission {
        date,
        time,
        mood,
        notes,
        edit,
    } = submission;

    if let Some(target) = edit {
        if target.date == date {
            if let Some(day) = data.day_mut(&date) {
                if let Some(position) = day.entries.iter().position(|entry| entry.id == target.id)
                {
                    let entry = &mut day.entries[position];
                    entry.time = time;
                    entry.mood = mood;
                    entry.notes = notes;
                    return ReconcileOutcome {
                        day: day.clone(),
                        edited: true,
                    };
                }
            }
            // Stale target: the record or entry is gone. Keep the submission
            // as a new entry rather than dropping it.
            warn!(date = %date, id = %target.id, "stale edit target, saving as new entry");
        }
    }

    let entry = MoodEntry::new(time, mood, notes);
    if let Some(day) = data.day_mut(&date) {
        day.entries.push(entry);
        return ReconcileOutcome {
            day: day.clone(),
            edited: false,
        };
    }

    let record = DayRecord {
        date,
        entries: vec![entry],
    };
    data.days.push(record.clone());
    ReconcileOutcome {
        day: record,
        edited: false,
    }
}
