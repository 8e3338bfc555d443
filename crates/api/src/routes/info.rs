//! Static informational endpoints.

use axum::Json;

use super::patients::MessageResponse;

/// GET /: service banner.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Patient Management System API"))
}

/// GET /about: service description.
pub async fn about() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "This is a Patient Management System API for storing patient records \
         and classifying their body-mass index.",
    ))
}
