//! HTTP request handlers for the booking API.
//!
//! This module contains the handler functions for all API endpoints.
//! Booking creation and the availability queries go through the
//! [`BookingManager`](crate::service::BookingManager); everything else is a
//! direct call into the matching repository.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::availability::validate_query_range;
use crate::error::BookingError;
use crate::models::{Booking, BookingDetails, Entity};
use crate::store::Repository;

use super::request::{
    CreateBookingRequest, CustomerRequest, DateRangeQuery, RoomRequest, UpdateBookingRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/available-room", get(available_room))
        .route("/bookings/occupied-dates", get(occupied_dates))
        .route(
            "/bookings/:id",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/rooms", get(list_rooms).post(create_room))
        .route(
            "/rooms/:id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(state)
}

// =============================================================================
// Bookings
// =============================================================================

async fn list_bookings(State(state): State<AppState>) -> HandlerResult {
    list(state.bookings(), Uuid::new_v4())
}

/// Handler for GET /bookings/{id}.
///
/// Returns the booking with its room and customer looked up by id.
async fn get_booking(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let booking = fetch(state.bookings(), id, correlation_id)?;
    let rooms = state.rooms().get_all().map_err(|e| fail(correlation_id, e))?;
    let customers = state
        .customers()
        .get_all()
        .map_err(|e| fail(correlation_id, e))?;

    Ok(json(
        StatusCode::OK,
        &BookingDetails::resolve(booking, &rooms, &customers),
    ))
}

/// Handler for POST /bookings.
///
/// Responds 201 with the stored booking, 409 when every room is taken and
/// 400 for unusable dates.
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking request");

    let request = parse_body(payload, correlation_id)?;
    if let Some(room_id) = request.room_id {
        info!(
            correlation_id = %correlation_id,
            requested_room = room_id,
            "Requested room is advisory and may be reassigned"
        );
    }

    let span = info_span!("book", correlation_id = %correlation_id);
    match span
        .in_scope(|| state.manager().book(request.into()))
        .map_err(|e| fail(correlation_id, e))?
    {
        Some(booking) => Ok(json(StatusCode::CREATED, &booking)),
        None => Err(ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::no_room_available(),
        )),
    }
}

/// Handler for PUT /bookings/{id}.
///
/// Replaces dates, active flag, customer and room. The new range must be
/// ordered but is not checked for overlap.
async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let booking: Booking = parse_body(payload, correlation_id)?.into_booking(id);
    validate_query_range(booking.start_date, booking.end_date)
        .map_err(|e| fail(correlation_id, e))?;

    state
        .bookings()
        .edit(booking.clone())
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        booking_id = id,
        state = ?booking.state(),
        "Booking updated"
    );
    Ok(json(StatusCode::OK, &booking))
}

async fn delete_booking(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    remove(state.bookings(), id, Uuid::new_v4())
}

/// Handler for GET /bookings/available-room.
async fn available_room(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let range = parse_query(query, correlation_id)?;

    let room_id = state
        .manager()
        .find_available_room(range.start_date, range.end_date)
        .map_err(|e| fail(correlation_id, e))?;

    Ok(json(
        StatusCode::OK,
        &serde_json::json!({ "room_id": room_id }),
    ))
}

/// Handler for GET /bookings/occupied-dates.
async fn occupied_dates(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let range = parse_query(query, correlation_id)?;

    let dates = state
        .manager()
        .get_fully_occupied_dates(range.start_date, range.end_date)
        .map_err(|e| fail(correlation_id, e))?;

    Ok(json(StatusCode::OK, &dates))
}

// =============================================================================
// Rooms
// =============================================================================

async fn list_rooms(State(state): State<AppState>) -> HandlerResult {
    list(state.rooms(), Uuid::new_v4())
}

async fn get_room(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    let room = fetch(state.rooms(), id, Uuid::new_v4())?;
    Ok(json(StatusCode::OK, &room))
}

async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let room = parse_body(payload, correlation_id)?
        .into_room(0)
        .map_err(|e| fail(correlation_id, e))?;
    let room = state.rooms().add(room).map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, room_id = room.id, "Room created");
    Ok(json(StatusCode::CREATED, &room))
}

async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<RoomRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let room = parse_body(payload, correlation_id)?
        .into_room(id)
        .map_err(|e| fail(correlation_id, e))?;
    state
        .rooms()
        .edit(room.clone())
        .map_err(|e| fail(correlation_id, e))?;
    Ok(json(StatusCode::OK, &room))
}

async fn delete_room(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    remove(state.rooms(), id, Uuid::new_v4())
}

// =============================================================================
// Customers
// =============================================================================

async fn list_customers(State(state): State<AppState>) -> HandlerResult {
    list(state.customers(), Uuid::new_v4())
}

async fn get_customer(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    let customer = fetch(state.customers(), id, Uuid::new_v4())?;
    Ok(json(StatusCode::OK, &customer))
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let customer = parse_body(payload, correlation_id)?
        .into_customer(0)
        .map_err(|e| fail(correlation_id, e))?;
    let customer = state
        .customers()
        .add(customer)
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        customer_id = customer.id,
        "Customer created"
    );
    Ok(json(StatusCode::CREATED, &customer))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let customer = parse_body(payload, correlation_id)?
        .into_customer(id)
        .map_err(|e| fail(correlation_id, e))?;
    state
        .customers()
        .edit(customer.clone())
        .map_err(|e| fail(correlation_id, e))?;
    Ok(json(StatusCode::OK, &customer))
}

async fn delete_customer(State(state): State<AppState>, Path(id): Path<i64>) -> HandlerResult {
    remove(state.customers(), id, Uuid::new_v4())
}

// =============================================================================
// Shared plumbing
// =============================================================================

fn list<T: Entity + Serialize>(repo: &dyn Repository<T>, correlation_id: Uuid) -> HandlerResult {
    let records = repo.get_all().map_err(|e| fail(correlation_id, e))?;
    Ok(json(StatusCode::OK, &records))
}

fn fetch<T: Entity>(
    repo: &dyn Repository<T>,
    id: i64,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    repo.get(id)
        .map_err(|e| fail(correlation_id, e))?
        .ok_or_else(|| fail(correlation_id, BookingError::NotFound { entity: T::KIND, id }))
}

/// Deletes a record. Non-positive ids are rejected without touching the store.
fn remove<T: Entity>(repo: &dyn Repository<T>, id: i64, correlation_id: Uuid) -> HandlerResult {
    if id <= 0 {
        warn!(correlation_id = %correlation_id, kind = T::KIND, id, "Rejected delete");
        return Err(ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::invalid_id(id),
        ));
    }

    repo.remove(id).map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, kind = T::KIND, id, "Record deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, Json(body)).into_response()
}

fn fail(correlation_id: Uuid, error: BookingError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}

fn parse_query<T>(
    query: Result<Query<T>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    query.map(|Query(q)| q).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Query string error"
        );
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(rejection.body_text()),
        )
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{Request, header};
    use chrono::NaiveDate;
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Customer, Room};
    use crate::store::InMemoryRepository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    fn create_test_state() -> AppState {
        let rooms = InMemoryRepository::with_records(vec![Room::new(1, "A"), Room::new(2, "B")])
            .unwrap();
        let customers = InMemoryRepository::with_records(vec![
            Customer::new(1, "A", "A@A.com"),
            Customer::new(2, "B", "B@B.com"),
        ])
        .unwrap();
        AppState::new(
            Arc::new(rooms),
            Arc::new(customers),
            Arc::new(InMemoryRepository::<Booking>::new()),
            Arc::new(FixedClock::new(today())),
        )
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.oneshot(request).await.unwrap()
    }

    async fn read_error(response: Response) -> ApiError {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_booking_returns_201() {
        let router = create_router(create_test_state());
        let body = r#"{"start_date": "2026-01-12", "end_date": "2026-01-13", "customer_id": 1}"#;

        let response = send(router, "POST", "/bookings", Some(body)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let booking: Booking = serde_json::from_slice(&body).unwrap();
        assert_eq!(booking.id, 1);
        assert_eq!(booking.room_id, 1);
        assert!(booking.is_active);
    }

    /// Counts events whose message matches, and whether they ran inside a span.
    struct MessageCounter {
        message: &'static str,
        seen: Arc<AtomicUsize>,
        in_span: Arc<AtomicUsize>,
    }

    struct MessageVisitor(Option<String>);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S> Layer<S> for MessageCounter
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if visitor.0.as_deref() == Some(self.message) {
                self.seen.fetch_add(1, Ordering::SeqCst);
                if ctx.event_span(event).is_some() {
                    self.in_span.fetch_add(1, Ordering::SeqCst);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_booking_created_is_logged_once_inside_request_span() {
        let seen = Arc::new(AtomicUsize::new(0));
        let in_span = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(MessageCounter {
            message: "Booking created",
            seen: seen.clone(),
            in_span: in_span.clone(),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let router = create_router(create_test_state());
        let body = r#"{"start_date": "2026-01-12", "end_date": "2026-01-13", "customer_id": 1}"#;
        let response = send(router, "POST", "/bookings", Some(body)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(in_span.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_booking_starting_today_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"start_date": "2026-01-10", "end_date": "2026-01-11", "customer_id": 1}"#;

        let response = send(router, "POST", "/bookings", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "INVALID_DATE_RANGE");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/bookings", Some("{ not json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"start_date": "2026-01-12", "end_date": "2026-01-13"}"#;

        let response = send(router, "POST", "/bookings", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = read_error(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("customer_id"));
    }

    #[tokio::test]
    async fn test_delete_non_positive_id_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "DELETE", "/rooms/0", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "INVALID_ID");
    }

    #[tokio::test]
    async fn test_get_missing_customer_returns_404() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/customers/9", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_error(response).await.message, "customer 9 not found");
    }

    #[tokio::test]
    async fn test_occupied_dates_missing_query_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/bookings/occupied-dates", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.code, "VALIDATION_ERROR");
    }
}
