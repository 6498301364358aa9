use crate::errors::AppError;
use crate::models::{
    AveragePoint, DayPageQuery, DayQuery, DayRecord, EditQuery, SaveEntryRequest,
};
use crate::reconcile::{reconcile, EditTarget, EntrySubmission};
use crate::state::AppState;
use crate::stats::daily_averages;
use crate::storage::persist_data;
use crate::ui::{render_day, render_edit_form, render_entry_form, render_index, render_missing_day};
use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let averages = daily_averages(&data);
    let latest = averages.iter().rev().find_map(|point| point.average);
    Html(render_index(data.days.len(), data.entry_count(), latest))
}

pub async fn day_page(
    State(state): State<AppState>,
    Query(query): Query<DayPageQuery>,
) -> Html<String> {
    let Some(date) = query.date else {
        return Html(render_missing_day());
    };

    let data = state.data.lock().await;
    match data.day(&date) {
        Some(day) => Html(render_day(day)),
        None => Html(render_missing_day()),
    }
}

pub async fn entry_form(
    State(state): State<AppState>,
    Query(query): Query<EditQuery>,
) -> Html<String> {
    if let (Some(date), Some(id)) = (query.date.as_deref(), query.id) {
        let data = state.data.lock().await;
        if let Some(entry) = data
            .day(date)
            .and_then(|day| day.entries.iter().find(|entry| entry.id == id))
        {
            return Html(render_edit_form(date, entry));
        }
        warn!(date = %date, id = %id, "edit target not found, showing blank form");
    }

    let now = Local::now();
    let date = now.date_naive().to_string();
    let time = now.format("%H:%M").to_string();
    Html(render_entry_form(&date, &time))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Form(form): Form<SaveEntryRequest>,
) -> Result<Redirect, AppError> {
    apply_save(&state, form).await?;
    Ok(Redirect::to("/?notice=saved"))
}

pub async fn get_averages(State(state): State<AppState>) -> Json<Vec<AveragePoint>> {
    let data = state.data.lock().await;
    Json(daily_averages(&data))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayRecord>, AppError> {
    let data = state.data.lock().await;
    match data.day(&query.date) {
        Some(day) => Ok(Json(day.clone())),
        None => Err(AppError::not_found(format!(
            "no entries for {}",
            query.date
        ))),
    }
}

pub async fn post_entry(
    State(state): State<AppState>,
    Json(payload): Json<SaveEntryRequest>,
) -> Result<Json<DayRecord>, AppError> {
    let day = apply_save(&state, payload).await?;
    Ok(Json(day))
}

async fn apply_save(state: &AppState, request: SaveEntryRequest) -> Result<DayRecord, AppError> {
    let date = request.date.trim().to_string();
    let time = request.time.trim().to_string();
    if date.is_empty() {
        return Err(AppError::bad_request("date is required"));
    }
    if time.is_empty() {
        return Err(AppError::bad_request("time is required"));
    }

    let edit = match (request.edit_date, request.edit_id) {
        (Some(edit_date), Some(id)) => Some(EditTarget {
            date: edit_date,
            id,
        }),
        _ => None,
    };

    let submission = EntrySubmission {
        date,
        time,
        mood: request.mood,
        notes: request.notes,
        edit,
    };

    let mut data = state.data.lock().await;
    let outcome = reconcile(&mut data, submission);
    persist_data(&state.data_path, &data).await?;

    Ok(outcome.day)
}
