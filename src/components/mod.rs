//! UI Components
//!
//! Planner dialogs rendered over the server-rendered page.

mod modal;
mod shopping_list_modal;
mod reclassify_modal;
mod finalise_modal;
mod recipe_search_modal;
mod toast;

pub use modal::{Modal, ModalHeader};
pub use shopping_list_modal::ShoppingListModal;
pub use reclassify_modal::{IngredientReclassifyModal, RecipeReclassifyModal};
pub use finalise_modal::FinaliseModal;
pub use recipe_search_modal::RecipeSearchModal;
pub use toast::SuccessToast;
