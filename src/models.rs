use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a priced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PricedItemPayload {
    pub name: String,
    pub price: f64,
}

/// A stored priced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PricedItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl PricedItem {
    pub fn from_payload(id: i64, payload: PricedItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
        }
    }
}

/// Request body for creating or replacing a titled item
///
/// `description` may be omitted or `null`; on replace an omitted
/// description clears the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TitledItemPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A stored titled item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TitledItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// `{"ok": true}` acknowledgement
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
