//! Plan Commands

use crate::error::ApiError;
use crate::models::StatusResponse;
use super::{check_status, post_empty};

/// Commit the draft plan. A rejection carries the server's message.
pub async fn finalise_plan(url: &str) -> Result<(), ApiError> {
    let reply: StatusResponse = post_empty(url).await?;
    check_status(reply)
}
