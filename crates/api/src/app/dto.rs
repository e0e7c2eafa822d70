use serde::{Deserialize, Serialize};

use crate::app::notice::Notice;

// -------------------------
// Form bodies (page)
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    #[serde(default)]
    pub product_input: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveProductForm {
    pub name: String,
}

// -------------------------
// JSON bodies (/api)
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}
