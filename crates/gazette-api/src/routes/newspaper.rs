//! Routes for the newspaper namespace, including per-paper issues.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use chrono::NaiveDate;
use gazette_core::editor::EditorId;
use gazette_core::error::{AgencyError, Entity};
use gazette_core::issue::{Issue, IssueId};
use gazette_core::newspaper::{Newspaper, PaperId};
use gazette_core::reports::NewspaperStats;
use gazette_core::subscriber::SubscriberId;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::routes::MessageBody;
use crate::state::AppState;

/// Request body for creating or updating a newspaper.
#[derive(Debug, Deserialize)]
pub struct NewspaperBody {
    /// Requested identity; on create the registry probes upward from here.
    #[serde(default)]
    pub paper_id: PaperId,
    pub name: String,
    /// Publication interval in days.
    pub frequency: u32,
    /// Monthly price.
    pub price: f64,
}

/// Request body for creating or updating an issue.
#[derive(Debug, Deserialize)]
pub struct IssueBody {
    /// Requested identity; on create the registry probes upward from here.
    #[serde(default)]
    pub issue_id: IssueId,
    pub release_date: NaiveDate,
    /// Editor identity; `0` means unassigned.
    #[serde(default)]
    pub editor_id: EditorId,
    pub pages: u32,
}

/// Request body carrying a single referenced identity (editor for
/// assignment, subscriber for delivery).
#[derive(Debug, Deserialize)]
pub struct IdBody {
    pub id: u32,
}

/// Wire view of a newspaper (relationship lists are not exposed here).
#[derive(Debug, Serialize)]
pub struct NewspaperDto {
    pub paper_id: PaperId,
    pub name: String,
    pub frequency: u32,
    pub price: f64,
}

impl From<&Newspaper> for NewspaperDto {
    fn from(paper: &Newspaper) -> Self {
        Self {
            paper_id: paper.paper_id,
            name: paper.name.clone(),
            frequency: paper.frequency,
            price: paper.price,
        }
    }
}

/// Wire view of an issue. `editor_id` is `0` while unassigned.
#[derive(Debug, Serialize)]
pub struct IssueDto {
    pub issue_id: IssueId,
    pub release_date: NaiveDate,
    pub released: bool,
    pub editor_id: EditorId,
    pub pages: u32,
    pub newspaper_id: PaperId,
}

impl From<&Issue> for IssueDto {
    fn from(issue: &Issue) -> Self {
        Self {
            issue_id: issue.issue_id,
            release_date: issue.release_date,
            released: issue.released,
            editor_id: issue.editor_id.unwrap_or(0),
            pages: issue.pages,
            newspaper_id: issue.newspaper_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewspaperEnvelope {
    pub newspaper: NewspaperDto,
}

#[derive(Debug, Serialize)]
pub struct NewspapersEnvelope {
    pub newspapers: Vec<NewspaperDto>,
}

#[derive(Debug, Serialize)]
pub struct IssueEnvelope {
    pub issue: IssueDto,
}

#[derive(Debug, Serialize)]
pub struct IssuesEnvelope {
    pub issues: Vec<IssueDto>,
}

fn unset_to_none(editor_id: EditorId) -> Option<EditorId> {
    (editor_id != 0).then_some(editor_id)
}

/// POST /newspaper/
#[instrument(skip(state, body), fields(name = %body.name))]
async fn create_newspaper(
    State(state): State<AppState>,
    Json(body): Json<NewspaperBody>,
) -> Result<Json<NewspaperEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let paper_id = agency.next_paper_id(body.paper_id)?;
    let created =
        agency.add_newspaper(Newspaper::new(paper_id, body.name, body.frequency, body.price))?;
    info!(paper_id, "newspaper created");
    Ok(Json(NewspaperEnvelope {
        newspaper: created.into(),
    }))
}

/// GET /newspaper/
async fn list_newspapers(State(state): State<AppState>) -> Json<NewspapersEnvelope> {
    let agency = state.agency.read().await;
    Json(NewspapersEnvelope {
        newspapers: agency.newspapers().iter().map(Into::into).collect(),
    })
}

/// GET /newspaper/{paper_id}
async fn get_newspaper(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
) -> Result<Json<NewspaperEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    let paper = agency.newspaper(paper_id).ok_or(AgencyError::NotFound {
        entity: Entity::Newspaper,
        id: paper_id,
    })?;
    Ok(Json(NewspaperEnvelope {
        newspaper: paper.into(),
    }))
}

/// POST /newspaper/{paper_id}
#[instrument(skip(state, body))]
async fn update_newspaper(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
    Json(body): Json<NewspaperBody>,
) -> Result<Json<NewspaperEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let updated = agency.update_newspaper(
        paper_id,
        Newspaper::new(paper_id, body.name, body.frequency, body.price),
    )?;
    info!(paper_id, "newspaper updated");
    Ok(Json(NewspaperEnvelope {
        newspaper: updated.into(),
    }))
}

/// DELETE /newspaper/{paper_id}
#[instrument(skip(state))]
async fn delete_newspaper(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut agency = state.agency.write().await;
    agency.remove_newspaper(paper_id)?;
    info!(paper_id, "newspaper removed");
    Ok(Json(MessageBody {
        message: format!("newspaper with ID {paper_id} was removed"),
    }))
}

/// GET /newspaper/{paper_id}/stats
async fn newspaper_stats(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
) -> Result<Json<NewspaperStats>, ApiError> {
    let agency = state.agency.read().await;
    Ok(Json(agency.newspaper_stats(paper_id)?))
}

/// GET /newspaper/{paper_id}/issue
async fn list_issues(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
) -> Result<Json<IssuesEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    let paper = agency.newspaper(paper_id).ok_or(AgencyError::NotFound {
        entity: Entity::Newspaper,
        id: paper_id,
    })?;
    Ok(Json(IssuesEnvelope {
        issues: paper.issues.iter().map(Into::into).collect(),
    }))
}

/// POST /newspaper/{paper_id}/issue
#[instrument(skip(state, body))]
async fn create_issue(
    State(state): State<AppState>,
    Path(paper_id): Path<PaperId>,
    Json(body): Json<IssueBody>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let issue_id = agency.next_issue_id(paper_id, body.issue_id)?;
    // New issues always start unreleased.
    let issue = Issue::new(
        issue_id,
        body.release_date,
        unset_to_none(body.editor_id),
        body.pages,
        paper_id,
    );
    let created = agency.add_issue(paper_id, issue)?;
    info!(paper_id, issue_id, "issue created");
    Ok(Json(IssueEnvelope {
        issue: created.into(),
    }))
}

/// GET /newspaper/{paper_id}/issue/{issue_id}
async fn get_issue(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    agency.newspaper(paper_id).ok_or(AgencyError::NotFound {
        entity: Entity::Newspaper,
        id: paper_id,
    })?;
    let issue = agency.issue(paper_id, issue_id).ok_or(AgencyError::NotFound {
        entity: Entity::Issue,
        id: issue_id,
    })?;
    Ok(Json(IssueEnvelope {
        issue: issue.into(),
    }))
}

/// POST /newspaper/{paper_id}/issue/{issue_id}
#[instrument(skip(state, body))]
async fn update_issue(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
    Json(body): Json<IssueBody>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let replacement = Issue::new(
        issue_id,
        body.release_date,
        unset_to_none(body.editor_id),
        body.pages,
        paper_id,
    );
    let updated = agency.update_issue(paper_id, issue_id, replacement)?;
    info!(paper_id, issue_id, "issue updated");
    Ok(Json(IssueEnvelope {
        issue: updated.into(),
    }))
}

/// DELETE /newspaper/{paper_id}/issue/{issue_id}
#[instrument(skip(state))]
async fn delete_issue(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut agency = state.agency.write().await;
    agency.remove_issue(paper_id, issue_id)?;
    info!(paper_id, issue_id, "issue removed");
    Ok(Json(MessageBody {
        message: format!("issue with ID {issue_id} was removed"),
    }))
}

/// POST /newspaper/{paper_id}/issue/{issue_id}/release
#[instrument(skip(state))]
async fn release_issue(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let released = agency.release_issue(paper_id, issue_id)?;
    info!(paper_id, issue_id, "issue released");
    Ok(Json(IssueEnvelope {
        issue: released.into(),
    }))
}

/// POST /newspaper/{paper_id}/issue/{issue_id}/editor
#[instrument(skip(state, body), fields(editor_id = body.id))]
async fn assign_editor(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
    Json(body): Json<IdBody>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let assigned = agency.assign_editor(paper_id, issue_id, body.id)?;
    info!(paper_id, issue_id, editor_id = body.id, "editor assigned");
    Ok(Json(IssueEnvelope {
        issue: assigned.into(),
    }))
}

/// POST /newspaper/{paper_id}/issue/{issue_id}/deliver
#[instrument(skip(state, body), fields(subscriber_id = body.id))]
async fn deliver_issue(
    State(state): State<AppState>,
    Path((paper_id, issue_id)): Path<(PaperId, IssueId)>,
    Json(body): Json<IdBody>,
) -> Result<Json<MessageBody>, ApiError> {
    let subscriber_id: SubscriberId = body.id;
    let mut agency = state.agency.write().await;
    agency.deliver_issue(subscriber_id, paper_id, issue_id)?;
    info!(paper_id, issue_id, subscriber_id, "issue delivered");
    Ok(Json(MessageBody {
        message: format!(
            "issue {issue_id} of newspaper {paper_id} delivered to subscriber {subscriber_id}"
        ),
    }))
}

/// Returns the router for the newspaper namespace.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_newspaper).get(list_newspapers))
        .route(
            "/{paper_id}",
            get(get_newspaper).post(update_newspaper).delete(delete_newspaper),
        )
        .route("/{paper_id}/stats", get(newspaper_stats))
        .route("/{paper_id}/issue", get(list_issues).post(create_issue))
        .route(
            "/{paper_id}/issue/{issue_id}",
            get(get_issue).post(update_issue).delete(delete_issue),
        )
        .route("/{paper_id}/issue/{issue_id}/release", post(release_issue))
        .route("/{paper_id}/issue/{issue_id}/editor", post(assign_editor))
        .route("/{paper_id}/issue/{issue_id}/deliver", post(deliver_issue))
}
