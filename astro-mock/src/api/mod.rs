//! HTTP routes of the mock backend

mod auth;
mod rooms;
mod users;

use axum::{
    Json, Router,
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use shared::client::MessageBody;
use tower_http::trace::TraceLayer;

use crate::state::{FaultBody, RequestRecord, SharedState};

/// Full application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .merge(auth::router())
        .merge(rooms::router())
        .merge(users::router())
        .layer(middleware::from_fn_with_state(state.clone(), intercept))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Records every request and answers with an injected fault when one is queued
async fn intercept(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    state
        .record(RequestRecord {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            authorization,
        })
        .await;

    if let Some(fault) = state.take_fault().await {
        tracing::debug!(status = %fault.status, path = %req.uri().path(), "Injected fault");
        return match fault.body {
            FaultBody::Error(msg) => (fault.status, Json(MessageBody::error(msg))).into_response(),
            FaultBody::Raw(raw) => (fault.status, Body::from(raw)).into_response(),
        };
    }

    next.run(req).await
}
