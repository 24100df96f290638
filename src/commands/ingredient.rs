//! Ingredient Commands
//!
//! Category updates for a single ingredient.

use crate::error::ApiError;
use crate::models::{StatusResponse, UpdateCategoryArgs};
use super::{check_status, post_json};

/// `POST {name, category}`; succeeds only on `status == "success"`
pub async fn update_ingredient_category(url: &str, args: &UpdateCategoryArgs) -> Result<(), ApiError> {
    let reply: StatusResponse = post_json(url, args).await?;
    check_status(reply)
}
