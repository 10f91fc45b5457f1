use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use chirpy_core::{Chirpy, ChirpyResult, LoginSession};
use chirpy_types::{Chirp, ChirpId, UserProfile};
use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChirpParams {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct CredentialParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

fn payload<T>(body: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    body.map(|Json(value)| value)
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

/// Run a core call that hashes or persists on the blocking pool.
async fn blocking<T, F>(state: &AppState, f: F) -> ServerResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Chirpy) -> ChirpyResult<T> + Send + 'static,
{
    let chirpy = Arc::clone(&state.chirpy);
    let out = tokio::task::spawn_blocking(move || f(&chirpy))
        .await
        .map_err(|e| ServerError::Internal(format!("blocking task failed: {e}")))??;
    Ok(out)
}

const TEXT: [(&str, &str); 1] = [("content-type", "text/plain; charset=utf-8")];

/// Liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, TEXT, "OK")
}

pub async fn list_chirps(State(state): State<AppState>) -> ServerResult<Json<Vec<Chirp>>> {
    Ok(Json(state.chirpy.list_chirps()?))
}

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<Chirp>> {
    let id: ChirpId = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid chirp id: {raw_id}")))?;
    Ok(Json(state.chirpy.get_chirp(id)?))
}

pub async fn create_chirp(
    State(state): State<AppState>,
    body: Result<Json<ChirpParams>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Chirp>)> {
    let params = payload(body)?;
    let chirp = blocking(&state, move |chirpy| chirpy.create_chirp(&params.body)).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CredentialParams>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<UserProfile>)> {
    let params = payload(body)?;
    let profile = blocking(&state, move |chirpy| {
        chirpy.create_user(&params.email, &params.password)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Update the caller's own email and password. Requires an access token.
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CredentialParams>, JsonRejection>,
) -> ServerResult<Json<UserProfile>> {
    let identity = state
        .auth
        .authenticate(&Credentials::from_headers(&headers))
        .await?;
    let params = payload(body)?;
    let profile = blocking(&state, move |chirpy| {
        chirpy.update_user(identity.user_id, &params.email, &params.password)
    })
    .await?;
    Ok(Json(profile))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialParams>, JsonRejection>,
) -> ServerResult<Json<LoginSession>> {
    let params = payload(body)?;
    let session = blocking(&state, move |chirpy| {
        chirpy.login(&params.email, &params.password)
    })
    .await?;
    Ok(Json(session))
}

/// Exchange the bearer refresh token for a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<TokenResponse>> {
    let credentials = Credentials::from_headers(&headers);
    let token = state.chirpy.refresh(credentials.bearer()?)?;
    Ok(Json(TokenResponse { token }))
}

/// Revoke the bearer token. Always succeeds.
pub async fn revoke(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Credentials::Bearer(token) = Credentials::from_headers(&headers) {
        state.chirpy.revoke(&token);
    }
    (StatusCode::OK, TEXT)
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, TEXT, format!("Hits: {}", state.hits.get()))
}

pub async fn reset_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.hits.reset();
    (StatusCode::OK, TEXT, "Hits have been reset")
}

pub async fn reset_database(State(state): State<AppState>) -> ServerResult<impl IntoResponse> {
    blocking(&state, |chirpy| chirpy.reset()).await?;
    Ok((StatusCode::OK, TEXT, "Database has been reset"))
}
