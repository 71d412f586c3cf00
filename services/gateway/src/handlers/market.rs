use crate::auth::MaybePrincipal;
use crate::error::AppError;
use crate::models::{BulkResponse, OkResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use market_data::{BulkRequest, EntryDraft, ItemPatch};
use types::ids::ItemId;
use types::market::MarketItem;

pub async fn list_items(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
) -> Result<Json<Vec<MarketItem>>, AppError> {
    let market = state.market.read().await;
    Ok(Json(market.list_items(principal.as_ref())?))
}

pub async fn create_item(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
    Json(draft): Json<EntryDraft>,
) -> Result<(StatusCode, Json<MarketItem>), AppError> {
    let mut market = state.market.write().await;
    let item = market.create_item(principal.as_ref(), &draft)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<MarketItem>, AppError> {
    let id = parse_item_id(&id)?;
    let mut market = state.market.write().await;
    Ok(Json(market.update_item(principal.as_ref(), id, &patch)?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, AppError> {
    let id = parse_item_id(&id)?;
    let mut market = state.market.write().await;
    market.delete_item(principal.as_ref(), id)?;
    Ok(Json(OkResponse { ok: true }))
}

pub async fn bulk_import(
    State(state): State<AppState>,
    MaybePrincipal(principal): MaybePrincipal,
    Json(request): Json<BulkRequest>,
) -> Result<Json<BulkResponse>, AppError> {
    let mut market = state.market.write().await;
    let outcome = market.bulk_import(principal.as_ref(), &request)?;
    if outcome.rejected > 0 {
        tracing::warn!(rejected = outcome.rejected, "bulk import skipped rows");
    }
    Ok(Json(BulkResponse {
        added: outcome.added,
    }))
}

// An id that does not even parse cannot name a known item.
fn parse_item_id(raw: &str) -> Result<ItemId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("no market item with id {}", raw)))
}
