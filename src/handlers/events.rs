use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};

use crate::{
    auth::{resolve_owner, Claims},
    error::AppError,
    models::event::{
        EventCreated, EventDeleted, EventFetched, EventPayload, EventRow, EventUpdated,
    },
    AppState,
};

/// Insert unconditionally; the `(name, owner_id)` uniqueness constraint
/// catches duplicates at the store.
pub async fn create_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<EventCreated>, AppError> {
    let Json(event) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let owner_id = resolve_owner(&state.db, &claims)
        .await
        .ok_or(AppError::NoIdentity)?;

    sqlx::query("INSERT INTO events (name, message, date, owner_id) VALUES (?, ?, ?, ?)")
        .bind(&event.name)
        .bind(&event.message)
        .bind(&event.date)
        .bind(owner_id)
        .execute(&state.db)
        .await?;

    Ok(Json(EventCreated {
        status: "created",
        event_name: event.name,
        message: "Event created successfully",
    }))
}

pub async fn get_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(name): Path<String>,
) -> Result<Json<EventFetched>, AppError> {
    // An unresolvable identity matches no rows, so the lookup reads as
    // not-found rather than a server error.
    let owner_id = resolve_owner(&state.db, &claims)
        .await
        .ok_or(AppError::RecordNotFound)?;

    let row = fetch_scoped(&state, &name, owner_id)
        .await?
        .ok_or(AppError::RecordNotFound)?;

    Ok(Json(EventFetched {
        status: "fetched",
        event_id: row.id,
        details: EventPayload {
            name: row.name,
            date: row.date,
            message: row.message,
        },
        message: "Event fetched successfully",
    }))
}

/// Partial update: fetch the scoped row, overwrite only the non-empty
/// patch fields, and write back keyed by the internal id so a rename
/// lands on the same row.
pub async fn update_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(name): Path<String>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<EventUpdated>, AppError> {
    let Json(patch) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let owner_id = resolve_owner(&state.db, &claims)
        .await
        .ok_or(AppError::RecordNotFound)?;

    let row = fetch_scoped(&state, &name, owner_id)
        .await?
        .ok_or(AppError::RecordNotFound)?;

    let merged = row.apply(patch);

    sqlx::query("UPDATE events SET name = ?, message = ?, date = ? WHERE id = ?")
        .bind(&merged.name)
        .bind(&merged.message)
        .bind(&merged.date)
        .bind(merged.id)
        .execute(&state.db)
        .await?;

    Ok(Json(EventUpdated {
        status: "updated",
        event_id: merged.id,
        message: "Event updated successfully",
    }))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(name): Path<String>,
) -> Result<Json<EventDeleted>, AppError> {
    let owner_id = resolve_owner(&state.db, &claims)
        .await
        .ok_or(AppError::RecordNotFound)?;

    let result = sqlx::query("DELETE FROM events WHERE name = ? AND owner_id = ?")
        .bind(&name)
        .bind(owner_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::RecordNotFound);
    }

    Ok(Json(EventDeleted {
        status: "deleted",
        event_name: name,
        message: "Event deleted successfully",
    }))
}

async fn fetch_scoped(
    state: &AppState,
    name: &str,
    owner_id: i64,
) -> Result<Option<EventRow>, AppError> {
    let row = sqlx::query_as::<_, EventRow>(
        "SELECT id, name, message, date FROM events WHERE name = ? AND owner_id = ?",
    )
    .bind(name)
    .bind(owner_id)
    .fetch_optional(&state.db)
    .await?;

    Ok(row)
}
