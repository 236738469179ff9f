//! User lookups for the Twitter API.

use log::info;
use reqwest::Method;

use crate::error::{CliError, Result};

use super::api::XClient;
use super::types::UserProfile;

/// Fields requested for the authenticated user.
const USER_FIELDS: &str = "id,name,username,public_metrics";

/// Fetches the authenticated user via `GET /2/users/me`.
///
/// Used both by `whoami` and to resolve the handle for building tweet URLs.
pub async fn fetch_current_user(client: &XClient) -> Result<UserProfile> {
    info!("Fetching authenticated user");
    let request_builder =
        client.signed_request(Method::GET, "/users/me", &[("user.fields", USER_FIELDS)]);

    let user: UserProfile = client
        .send::<UserProfile>(request_builder, "get_current_user")
        .await?
        .ok_or(CliError::MissingData("get_current_user"))?;

    info!("Authenticated as @{} ({})", user.username, user.id);
    Ok(user)
}
