use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::ApiError,
    handlers::collection_dtos::{
        Collection, ConsultationRequest, ContactRequest, InquiryRequest, InsertResponse,
    },
    AppState,
};

fn decode<T: DeserializeOwned>(record: Value) -> Result<T, ApiError> {
    serde_json::from_value(record).map_err(|e| ApiError::MalformedRecord(e.to_string()))
}

fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Insert one record into a named collection. One request, one row; nothing is retried.
pub async fn insert_record(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let collection: Collection = collection
        .parse()
        .map_err(ApiError::UnknownCollection)?;
    let Json(record) = payload.map_err(|e| ApiError::MalformedRecord(e.body_text()))?;

    let id = match collection {
        Collection::Inquiries => {
            let request: InquiryRequest = decode(record)?;
            tracing::debug!("New {} inquiry from {}", request.inquiry_type.as_str(), request.email);
            state
                .lead_repository
                .create_inquiry(&request.into_new_inquiry(now_timestamp()))?
        }
        Collection::Contacts => {
            let request: ContactRequest = decode(record)?;
            tracing::debug!("New contact message from {}", request.email);
            state
                .lead_repository
                .create_contact(&request.into_new_contact(now_timestamp()))?
        }
        Collection::Consultations => {
            let request: ConsultationRequest = decode(record)?;
            tracing::debug!("New consultation request for {}", request.name_passport);
            state
                .lead_repository
                .create_consultation(&request.into_new_consultation(now_timestamp()))?
        }
    };

    tracing::info!("Inserted record {} into {}", id, collection);
    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            id,
            collection: collection.to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> (Router, Arc<AppState>) {
        let state = crate::test_state();
        (crate::build_router(state.clone()), state)
    }

    async fn post(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn quick_booking_lands_in_inquiries() {
        let (app, state) = test_app();
        let body = json!({
            "name": "Jane",
            "email": "jane@example.com",
            "passengers": 2,
            "travel_date_from": "2025-03-01",
            "travel_date_to": null,
            "requests": "Arriving on TG 659",
            "type": "quick_booking",
            "service_id": "ultimate-escape",
            "service_title": "The Ultimate Escape"
        });

        let (status, response) = post(app, "/api/collections/inquiries", body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response["collection"], "inquiries");

        let id = response["id"].as_i64().unwrap() as i32;
        let stored = state.lead_repository.find_inquiry(id).unwrap().unwrap();
        assert_eq!(stored.service_title.as_deref(), Some("The Ultimate Escape"));
        assert_eq!(stored.requests.as_deref(), Some("Arriving on TG 659"));
        assert_eq!(state.lead_repository.counts().unwrap(), (1, 0, 0));
    }

    #[tokio::test]
    async fn large_passenger_counts_are_stored_as_sent() {
        let (app, state) = test_app();
        let body = json!({
            "name": "Min",
            "email": "min@example.com",
            "passengers": 3_000_000_000_i64,
            "type": "quick_inquiry"
        });

        let (status, response) = post(app, "/api/collections/inquiries", body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);

        let id = response["id"].as_i64().unwrap() as i32;
        let stored = state.lead_repository.find_inquiry(id).unwrap().unwrap();
        assert_eq!(stored.passengers, Some(3_000_000_000));
    }

    #[tokio::test]
    async fn rows_are_stamped_with_the_full_unix_time() {
        let (app, state) = test_app();
        let before = chrono::Utc::now().timestamp();
        let body = json!({"name": "Sam", "email": "sam@example.com", "message": "Call me"});

        let (_, response) = post(app, "/api/collections/contacts", body.to_string()).await;
        let id = response["id"].as_i64().unwrap() as i32;
        let stored = state.lead_repository.find_contact(id).unwrap().unwrap();
        assert!(stored.created_at >= before);
        assert!(stored.created_at <= chrono::Utc::now().timestamp());
    }

    #[test]
    fn timestamps_past_2038_are_not_truncated() {
        let after_2038 = i64::from(i32::MAX) + 1;
        let request = ContactRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(request.into_new_contact(after_2038).created_at, after_2038);
    }

    #[tokio::test]
    async fn contact_message_lands_in_contacts() {
        let (app, state) = test_app();
        let body = json!({"name": "Sam", "email": "sam@example.com", "message": "Call me"});

        let (status, _) = post(app, "/api/collections/contacts", body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(state.lead_repository.counts().unwrap(), (0, 1, 0));
    }

    #[tokio::test]
    async fn consultation_keeps_derived_label_arrays() {
        let (app, state) = test_app();
        let body = json!({
            "name_passport": "KIM MINJI",
            "dob": "1990-04-12",
            "nationality": "Korean",
            "passport_number": "",
            "phone_kakaotalk": "minji_k",
            "food_allergies": "yes",
            "food_allergies_specify": "Shellfish",
            "bed_config": "twin",
            "health_conditions": ["Diabetes"],
            "travel_styles": [],
            "accommodation_types": ["Private villa", "Boutique hotel"]
        });

        let (status, response) = post(app, "/api/collections/consultations", body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);

        let id = response["id"].as_i64().unwrap() as i32;
        let stored = state.lead_repository.find_consultation(id).unwrap().unwrap();
        assert_eq!(stored.food_allergies, "yes");
        assert_eq!(stored.bed_config, "twin");
        assert_eq!(stored.passport_number, None);
        assert_eq!(stored.health_conditions, r#"["Diabetes"]"#);
        assert_eq!(stored.travel_styles, "[]");
        assert_eq!(stored.accommodation_types, r#"["Private villa","Boutique hotel"]"#);
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found_and_writes_nothing() {
        let (app, state) = test_app();
        let body = json!({"name": "Sam", "email": "sam@example.com", "message": "hi"});

        let (status, response) = post(app, "/api/collections/users", body.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(response["error"].as_str().unwrap().contains("users"));
        assert_eq!(state.lead_repository.counts().unwrap(), (0, 0, 0));
    }

    #[tokio::test]
    async fn malformed_records_are_rejected() {
        let (app, state) = test_app();

        let (status, _) = post(app.clone(), "/api/collections/contacts", json!({"name": "Sam"}).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post(app, "/api/collections/contacts", "not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(state.lead_repository.counts().unwrap(), (0, 0, 0));
    }

    #[tokio::test]
    async fn health_check_answers() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
