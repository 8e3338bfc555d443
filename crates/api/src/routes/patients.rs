//! Patient CRUD and sorting endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::{PatientCollection, PatientId, PatientRecord};
use domain::{NewPatient, PatientService, PatientUpdate, PatientView, SortField, SortOrder};
use patient_store::PatientStore;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery};

/// Shared application state accessible from all handlers.
pub struct AppState<S: PatientStore> {
    pub patients: PatientService<S>,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: String,
    pub order: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Patients keyed by identifier, serialized as a JSON object in collection
/// order.
pub struct PatientMap(Vec<(PatientId, PatientView)>);

impl From<PatientCollection> for PatientMap {
    fn from(collection: PatientCollection) -> Self {
        Self(
            collection
                .into_iter()
                .map(|(id, record)| (id, PatientView::from(record)))
                .collect(),
        )
    }
}

impl Serialize for PatientMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, view)| (id.as_str(), view)))
    }
}

#[derive(Serialize)]
pub struct PatientListResponse {
    pub patients: PatientMap,
}

#[derive(Serialize)]
pub struct PatientResponse {
    pub patient: PatientView,
}

/// One `[id, record]` pair of a sorted listing.
pub type SortedEntry = (String, PatientView);

fn sorted_entry((id, record): (PatientId, PatientRecord)) -> SortedEntry {
    (id.into(), PatientView::from(record))
}

// -- Handlers --

/// GET /view: list every patient.
#[tracing::instrument(skip(state))]
pub async fn list<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<PatientListResponse>, ApiError> {
    let collection = state.patients.list().await?;
    Ok(Json(PatientListResponse {
        patients: collection.into(),
    }))
}

/// GET /patient/{id}: fetch one patient. The identifier is case-insensitive.
#[tracing::instrument(skip(state))]
pub async fn get<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<PatientResponse>, ApiError> {
    let record = state.patients.get(&PatientId::new(id)).await?;
    Ok(Json(PatientResponse {
        patient: record.into(),
    }))
}

/// GET /sort?sort_by=&order=: list patients ordered by one attribute.
#[tracing::instrument(skip(state))]
pub async fn sort<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppQuery(params): AppQuery<SortParams>,
) -> Result<Json<Vec<SortedEntry>>, ApiError> {
    let field: SortField = params.sort_by.parse()?;
    let order = match params.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };

    let sorted = state.patients.sorted(field, order).await?;
    Ok(Json(sorted.into_iter().map(sorted_entry).collect()))
}

/// POST /create: store a new patient.
#[tracing::instrument(skip(state, patient))]
pub async fn create<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppJson(patient): AppJson<NewPatient>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.patients.create(patient).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Patient created successfully")),
    ))
}

/// PUT /update/{id}: apply a partial update to a patient.
#[tracing::instrument(skip(state, update))]
pub async fn update<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<String>,
    AppJson(update): AppJson<PatientUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.patients.update(&PatientId::new(id), update).await?;
    Ok(Json(MessageResponse::new("Patient updated successfully")))
}

/// DELETE /delete/{id}: remove a patient.
#[tracing::instrument(skip(state))]
pub async fn delete<S: PatientStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.patients.delete(&PatientId::new(id)).await?;
    Ok(Json(MessageResponse::new("Patient deleted successfully")))
}
