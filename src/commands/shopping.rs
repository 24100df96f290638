//! Shopping List Commands

use crate::error::ApiError;
use crate::models::ShoppingListResponse;
use super::get_json;

pub async fn fetch_shopping_list(url: &str) -> Result<ShoppingListResponse, ApiError> {
    get_json(url).await
}
