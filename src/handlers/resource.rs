//! CRUD endpoints shared by every resource.
//!
//! Each resource supplies its repository and the fixed sentences returned to
//! the client; the handlers here do the rest. Success answers 200, every
//! failure answers 400 with the endpoint's failure message.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::constants::API_NAME;
use crate::error::{ApiFailure, OrFail};
use crate::models::Record;
use crate::repository::CrudRepository;
use crate::state::AppState;

/// Client-facing sentences for one resource.
pub struct Messages {
    pub list_failed: &'static str,
    pub find_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub removed: &'static str,
    pub remove_failed: &'static str,
}

pub trait Resource: Record + Serialize {
    const MESSAGES: Messages;

    fn repository(state: &AppState) -> Arc<dyn CrudRepository<Self>>;
}

pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/{id}", get(find::<R>).put(update::<R>).delete(remove::<R>))
}

fn message(text: &'static str) -> Json<Value> {
    Json(json!({ "message": text }))
}

async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiFailure> {
    let rows = R::repository(&state)
        .list()
        .await
        .or_fail(R::MESSAGES.list_failed)?;

    tracing::debug!("{} Listed {} {} rows", API_NAME, rows.len(), R::ENTITY);
    Ok(Json(rows))
}

async fn find<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<R>, ApiFailure> {
    let Path(id) = id.or_fail(R::MESSAGES.find_failed)?;

    let row = R::repository(&state)
        .find(id)
        .await
        .or_fail(R::MESSAGES.find_failed)?;

    Ok(Json(row))
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<Value>, ApiFailure> {
    let Json(input) = payload.or_fail(R::MESSAGES.create_failed)?;

    let created = R::repository(&state)
        .create(&input)
        .await
        .or_fail(R::MESSAGES.create_failed)?;

    tracing::info!("{} Created {} with id {}", API_NAME, R::ENTITY, created.id());
    Ok(message(R::MESSAGES.created))
}

async fn update<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<Value>, ApiFailure> {
    let Path(id) = id.or_fail(R::MESSAGES.update_failed)?;
    let Json(input) = payload.or_fail(R::MESSAGES.update_failed)?;

    R::repository(&state)
        .update(id, &input)
        .await
        .or_fail(R::MESSAGES.update_failed)?;

    tracing::info!("{} Updated {} with id {}", API_NAME, R::ENTITY, id);
    Ok(message(R::MESSAGES.updated))
}

async fn remove<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiFailure> {
    let Path(id) = id.or_fail(R::MESSAGES.remove_failed)?;

    R::repository(&state)
        .remove(id)
        .await
        .or_fail(R::MESSAGES.remove_failed)?;

    tracing::info!("{} Removed {} with id {}", API_NAME, R::ENTITY, id);
    Ok(message(R::MESSAGES.removed))
}
