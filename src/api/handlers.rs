use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Category, Item, Outcome, PairRecommendation, Preferences};
use crate::services::advice::{answer_question, AdvisorAnswer};
use crate::services::OutfitEngine;

use super::AppState;

/// Multipart field holding the uploaded photo
const FILE_FIELD: &str = "file";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct OutfitRequest {
    #[serde(default)]
    pub wardrobe: Vec<Item>,
    #[serde(flatten)]
    pub preferences: Preferences,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct TipRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdvisorRequest {
    #[serde(default)]
    pub question: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Three-slot outfit generation, supplemented from the virtual catalog
pub async fn generate_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<OutfitRequest>,
) -> Json<Outcome> {
    tracing::info!(
        request_id = %request_id,
        wardrobe_size = request.wardrobe.len(),
        occasion = %request.preferences.occasion,
        "Processing outfit request"
    );

    let wardrobe = state.tagger.tag(request.wardrobe).await;
    let outcome = OutfitEngine::new(&request.preferences).generate_outfit(&wardrobe);

    tracing::info!(
        request_id = %request_id,
        user_items = outcome.user_items.len(),
        suggested_items = outcome.suggested_items.len(),
        score = outcome.score,
        "Outfit generated"
    );

    Json(outcome)
}

/// Two-slot top/bottom recommendation from the user's own wardrobe
pub async fn recommend_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<OutfitRequest>,
) -> Json<PairRecommendation> {
    tracing::info!(
        request_id = %request_id,
        wardrobe_size = request.wardrobe.len(),
        occasion = %request.preferences.occasion,
        "Processing pair recommendation"
    );

    let wardrobe = state.tagger.tag(request.wardrobe).await;
    let selected_outfit_ids = OutfitEngine::new(&request.preferences).recommend_pair(&wardrobe);

    Json(PairRecommendation {
        selected_outfit_ids,
    })
}

/// Classifies an uploaded garment photo
pub async fn predict_category(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> AppResult<Json<CategoryResponse>> {
    let image = read_file_field(&mut multipart).await?;
    let classifier = state
        .classifier
        .as_ref()
        .ok_or(AppError::ClassifierUnavailable)?;

    let category = classifier.classify(&image).await?;

    tracing::info!(
        request_id = %request_id,
        bytes = image.len(),
        category = %category,
        "Predicted category"
    );

    Ok(Json(CategoryResponse { category }))
}

/// Sustainability tips for a garment category or material
pub async fn sustainability_tip(
    State(state): State<AppState>,
    Json(request): Json<TipRequest>,
) -> Json<TipsResponse> {
    let tips = state.tips.lookup(&request.category, &request.material);
    Json(TipsResponse { tips })
}

/// Canned garment-care advice
pub async fn ask_advisor(Json(request): Json<AdvisorRequest>) -> Json<AdvisorAnswer> {
    Json(answer_question(&request.question))
}

async fn read_file_field(multipart: &mut Multipart) -> AppResult<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;

        if bytes.is_empty() {
            return Err(AppError::InvalidInput("Uploaded file is empty".to_string()));
        }

        return Ok(bytes.to_vec());
    }

    Err(AppError::InvalidInput("No file provided".to_string()))
}
