//! Routes for the subscriber namespace, including subscription and report
//! endpoints.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use gazette_core::error::{AgencyError, Entity};
use gazette_core::newspaper::PaperId;
use gazette_core::reports::{MissingIssues, SubscriberStats};
use gazette_core::subscriber::{Subscriber, SubscriberId};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::routes::MessageBody;
use crate::state::AppState;

/// Request body for creating or updating a subscriber.
#[derive(Debug, Deserialize)]
pub struct SubscriberBody {
    /// Requested identity; on create the registry probes upward from here.
    #[serde(default)]
    pub id: SubscriberId,
    pub name: String,
    pub address: String,
}

/// Request body naming the paper to subscribe to.
#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub paper_id: PaperId,
}

/// Wire view of a subscriber.
#[derive(Debug, Serialize)]
pub struct SubscriberDto {
    pub id: SubscriberId,
    pub name: String,
    pub address: String,
    pub subscriptions: Vec<PaperId>,
}

impl From<&Subscriber> for SubscriberDto {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            id: subscriber.id,
            name: subscriber.name.clone(),
            address: subscriber.address.clone(),
            subscriptions: subscriber.subscriptions.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscriberEnvelope {
    pub subscriber: SubscriberDto,
}

#[derive(Debug, Serialize)]
pub struct SubscribersEnvelope {
    pub subscribers: Vec<SubscriberDto>,
}

#[derive(Debug, Serialize)]
pub struct MissingIssuesEnvelope {
    pub missing: Vec<MissingIssues>,
}

/// POST /subscriber/
#[instrument(skip(state, body), fields(name = %body.name))]
async fn create_subscriber(
    State(state): State<AppState>,
    Json(body): Json<SubscriberBody>,
) -> Result<Json<SubscriberEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let id = agency.next_subscriber_id(body.id)?;
    let created = agency.add_subscriber(Subscriber::new(id, body.name, body.address))?;
    info!(subscriber_id = id, "subscriber created");
    Ok(Json(SubscriberEnvelope {
        subscriber: created.into(),
    }))
}

/// GET /subscriber/
async fn list_subscribers(State(state): State<AppState>) -> Json<SubscribersEnvelope> {
    let agency = state.agency.read().await;
    Json(SubscribersEnvelope {
        subscribers: agency.subscribers().iter().map(Into::into).collect(),
    })
}

/// GET /subscriber/{subscriber_id}
async fn get_subscriber(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
) -> Result<Json<SubscriberEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    let subscriber = agency.subscriber(subscriber_id).ok_or(AgencyError::NotFound {
        entity: Entity::Subscriber,
        id: subscriber_id,
    })?;
    Ok(Json(SubscriberEnvelope {
        subscriber: subscriber.into(),
    }))
}

/// POST /subscriber/{subscriber_id}
#[instrument(skip(state, body))]
async fn update_subscriber(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
    Json(body): Json<SubscriberBody>,
) -> Result<Json<SubscriberEnvelope>, ApiError> {
    let mut agency = state.agency.write().await;
    let updated = agency.update_subscriber(
        subscriber_id,
        Subscriber::new(subscriber_id, body.name, body.address),
    )?;
    info!(subscriber_id, "subscriber updated");
    Ok(Json(SubscriberEnvelope {
        subscriber: updated.into(),
    }))
}

/// DELETE /subscriber/{subscriber_id}
#[instrument(skip(state))]
async fn delete_subscriber(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut agency = state.agency.write().await;
    agency.remove_subscriber(subscriber_id)?;
    info!(subscriber_id, "subscriber removed");
    Ok(Json(MessageBody {
        message: format!("subscriber with ID {subscriber_id} was removed"),
    }))
}

/// POST /subscriber/{subscriber_id}/subscribe
#[instrument(skip(state, body), fields(paper_id = body.paper_id))]
async fn subscribe(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut agency = state.agency.write().await;
    agency.subscribe(subscriber_id, body.paper_id)?;
    info!(subscriber_id, paper_id = body.paper_id, "subscribed");
    Ok(Json(MessageBody {
        message: format!(
            "subscriber {subscriber_id} subscribed to newspaper {}",
            body.paper_id
        ),
    }))
}

/// GET /subscriber/{subscriber_id}/stats
async fn subscriber_stats(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
) -> Result<Json<SubscriberStats>, ApiError> {
    let agency = state.agency.read().await;
    Ok(Json(agency.subscriber_stats(subscriber_id)?))
}

/// GET /subscriber/{subscriber_id}/missingissues
async fn missing_issues(
    State(state): State<AppState>,
    Path(subscriber_id): Path<SubscriberId>,
) -> Result<Json<MissingIssuesEnvelope>, ApiError> {
    let agency = state.agency.read().await;
    Ok(Json(MissingIssuesEnvelope {
        missing: agency.missing_issues(subscriber_id)?,
    }))
}

/// Returns the router for the subscriber namespace.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subscriber).get(list_subscribers))
        .route(
            "/{subscriber_id}",
            get(get_subscriber)
                .post(update_subscriber)
                .delete(delete_subscriber),
        )
        .route("/{subscriber_id}/subscribe", post(subscribe))
        .route("/{subscriber_id}/stats", get(subscriber_stats))
        .route("/{subscriber_id}/missingissues", get(missing_issues))
}
