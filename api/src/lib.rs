//! This crate contains the shared domain types and all fullstack server functions.

pub mod config;
pub mod history;
pub mod medicine_request;
pub mod pharmacy_response;
#[cfg(not(target_arch = "wasm32"))]
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;
pub mod timestamp;
pub mod user;

use dioxus::prelude::*;
use history::HistoryItem;
use user::AuthUser;

#[cfg(not(target_arch = "wasm32"))]
use store::DocumentStore;

pub type ApiError = anyhow::Error;

/// Returns the signed-in user, or `None` when nobody is signed in.
#[post("/api/current_user")]
pub async fn current_user() -> Result<Option<AuthUser>, ApiError> {
    let store = store::ConfiguredStore::from_env();
    let user = session::global().await.current_user(&store).await?;
    Ok(user)
}

/// Signs in the user with the given id. Fails if the store has no such user.
#[post("/api/sign_in")]
pub async fn sign_in(uid: String) -> Result<AuthUser, ApiError> {
    let store = store::ConfiguredStore::from_env();
    let user = session::global().await.sign_in(&store, &uid).await?;
    Ok(user)
}

#[post("/api/sign_out")]
pub async fn sign_out() -> Result<(), ApiError> {
    session::global().await.sign_out().await;
    Ok(())
}

/// Returns every response the pharmacy `uid` has given, newest first, each
/// paired with the request it answered.
#[post("/api/pharmacy_response_history")]
pub async fn pharmacy_response_history(uid: String) -> Result<Vec<HistoryItem>, ApiError> {
    let snapshot = store::ConfiguredStore::from_env().snapshot().await?;
    Ok(snapshot.pharmacy_response_history(&uid))
}

/// Returns request `request_id` with the pharmacy's response to it, if the
/// pharmacy `uid` has answered it.
#[post("/api/pharmacy_request")]
pub async fn pharmacy_request(
    uid: String,
    request_id: String,
) -> Result<Option<HistoryItem>, ApiError> {
    let snapshot = store::ConfiguredStore::from_env().snapshot().await?;
    Ok(snapshot.pharmacy_request(&uid, &request_id))
}
