//! Routes for the editor namespace.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use gazette_core::editor::{Editor, EditorId};
use gazette_core::error::{AgencyError, Entity};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::routes::MessageBody;
use crate::routes::newspaper::{IssueDto, IssuesEnvelope};
use crate::state::AppState;

/// Request body for creating or updating an editor.
#[derive(Debug, Deserialize)]
pub struct EditorBody {
    /// Requested identity; on create the registry probes upward from here.
    #[serde(default)]
    pub id: EditorId,
    pub name: String,
    pub address: String,
}

/// Wire view of an editor.
#[derive(Debug, Serialize)]
pub struct EditorDto {
    pub id: EditorId,
    pub name: String,
    pub address: String,
}

impl From<&Editor> for EditorDto {
    fn from(editor: &Editor) -> Self {
        Self {
            id: editor.id,
            name: editor.name.clone(),
            address: editor.address.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorEnvelope {
    pub editor: EditorDto,
}

#[derive(Debug, Serialize)]
pub struct EditorsEnvelope {
    pub editors: Vec<EditorDto>,
}

/// POST /editor/
#[instrument(skip(state, body), fields(name = %body.name))]
async fn create_editor(
    State(state): State<AppState>,
    Json(body): Json<EditorBody>,
) -> Result<Json<EditorEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let id = agency.next_editor_id(body.id)?;
    let created = agency.add_editor(Editor::new(id, body.name, body.address))?;
    info!(editor_id = id, "editor created");
    Ok(Json(EditorEnvelope {
        editor: created.into(),
    }))
}

/// GET /editor/
async fn list_editors(State(state): State<AppState>) -> Json<EditorsEnvelope> {
    let agency = state.agency.read().await;
    Json(EditorsEnvelope {
        editors: agency.editors().iter().map(Into::into).collect(),
    })
}

/// GET /editor/{editor_id}
async fn get_editor(
    State(state): State<AppState>,
    Path(editor_id): Path<EditorId>,
) -> Result<Json<EditorEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    let editor = agency.editor(editor_id).ok_or(AgencyError::NotFound {
        entity: Entity::Editor,
        id: editor_id,
    })?;
    Ok(Json(EditorEnvelope {
        editor: editor.into(),
    }))
}

/// POST /editor/{editor_id}
#[instrument(skip(state, body))]
async fn update_editor(
    State(state): State<AppState>,
    Path(editor_id): Path<EditorId>,
    Json(body): Json<EditorBody>,
) -> Result<Json<EditorEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let updated = agency.update_editor(editor_id, Editor::new(editor_id, body.name, body.address))?;
    info!(editor_id, "editor updated");
    Ok(Json(EditorEnvelope {
        editor: updated.into(),
    }))
}

/// DELETE /editor/{editor_id}
#[instrument(skip(state))]
async fn delete_editor(
    State(state): State<AppState>,
    Path(editor_id): Path<EditorId>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut agency = state.agency.write().await;
    agency.remove_editor(editor_id)?;
    info!(editor_id, "editor removed");
    Ok(Json(MessageBody {
        message: format!("editor with ID {editor_id} was removed"),
    }))
}

/// GET /editor/{editor_id}/issues
async fn editor_issues(
    State(state): State<AppState>,
    Path(editor_id): Path<EditorId>,
) -> Result<Json<IssuesEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    let issues = agency.editor_issues(editor_id)?;
    Ok(Json(IssuesEnvelope {
        issues: issues.into_iter().map(IssueDto::from).collect(),
    }))
}

/// Returns the router for the editor namespace.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_editor).get(list_editors))
        .route(
            "/{editor_id}",
            get(get_editor).post(update_editor).delete(delete_editor),
        )
        .route("/{editor_id}/issues", get(editor_issues))
}
