// src/shared/api/query.rs
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

/// `?id=<uuid>` used by the update/delete routes that address a row by query.
#[derive(Debug, Deserialize, IntoParams)]
pub struct IdQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}
