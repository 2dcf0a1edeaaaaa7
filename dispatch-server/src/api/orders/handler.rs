//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{OrderCreate, OrderDetail, OrderUpdate};

use crate::api::{IdParam, Payload};
use crate::core::ServerState;
use crate::db::Session;
use crate::db::repository::employee;
use crate::db::repository::order::{self, NewOrder};
use crate::utils::validation::{Patch, Required};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_create(payload: OrderCreate) -> AppResult<NewOrder> {
    let mut required = Required::default();
    let start_time = required.value("startTime", payload.start_time);
    let end_time = required.value("endTime", payload.end_time);
    let price = required.value("price", payload.price);
    let employee_id = required.value("employeeId", payload.employee_id);
    let start_city = required.text("startCity", payload.start_city);
    let destination = required.text("destination", payload.destination);

    match (start_time, end_time, price, employee_id, start_city, destination) {
        (
            Some(start_time),
            Some(end_time),
            Some(price),
            Some(employee_id),
            Some(start_city),
            Some(destination),
        ) => Ok(NewOrder {
            start_time,
            end_time,
            price,
            start_city,
            destination,
            employee_id,
        }),
        _ => Err(required.into_error()),
    }
}

/// The referenced employee has to exist; a dangling reference is a client error
async fn ensure_employee(session: &mut Session, employee_id: i64) -> AppResult<()> {
    if employee::find_by_id(session, employee_id).await?.is_none() {
        tracing::error!(employee_id, "Referenced employee does not exist");
        return Err(AppError::validation(format!(
            "Could not find employee with id: {employee_id}."
        )));
    }
    Ok(())
}

/// GET /orders[?id=] - all orders, or the one matching `id`, with employees
pub async fn list(
    State(state): State<ServerState>,
    IdParam(filter): IdParam,
) -> AppResult<Json<Vec<OrderDetail>>> {
    tracing::info!(id = ?filter, "Fetching orders");
    let orders = state
        .db
        .with_read_session(|session| Box::pin(async move { order::list(session, filter).await }))
        .await?;

    if orders.is_empty() {
        tracing::info!("There were no orders to return");
        return Err(AppError::not_found(match filter {
            Some(id) => format!("Could not find order with id: {id}."),
            None => "There are no orders.".to_string(),
        }));
    }

    tracing::info!(count = orders.len(), "Returning orders");
    Ok(Json(orders))
}

/// POST /orders - create an order for an existing employee
pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<OrderCreate>,
) -> AppResult<StatusCode> {
    let data = validate_create(payload)?;

    let created = state
        .db
        .with_session(|session| {
            Box::pin(async move {
                ensure_employee(session, data.employee_id).await?;
                let created = order::insert(session, data).await?;
                Ok::<_, AppError>(created)
            })
        })
        .await?;

    tracing::info!(order_id = created.id, employee_id = created.employee_id, "Order created");
    Ok(StatusCode::OK)
}

/// PUT /orders?id= - sparse update
///
/// A new `employeeId` is checked before any field is applied.
pub async fn update(
    State(state): State<ServerState>,
    id: IdParam,
    Payload(payload): Payload<OrderUpdate>,
) -> AppResult<StatusCode> {
    let id = id.require("Order id has to be provided.")?;

    let changed = state
        .db
        .with_session(|session| {
            Box::pin(async move {
                let mut existing = order::find_by_id(session, id).await?.ok_or_else(|| {
                    tracing::error!(order_id = id, "Order does not exist");
                    AppError::with_message(
                        ErrorCode::OrderNotFound,
                        format!("Could not find order with id: {id}."),
                    )
                })?;

                if let Some(employee_id) = payload.employee_id {
                    ensure_employee(session, employee_id).await?;
                }

                let mut patch = Patch::default();
                patch.value("startTime", &mut existing.start_time, payload.start_time);
                patch.value("endTime", &mut existing.end_time, payload.end_time);
                patch.value("price", &mut existing.price, payload.price);
                patch.value("employeeId", &mut existing.employee_id, payload.employee_id);
                patch.text("startCity", &mut existing.start_city, payload.start_city);
                patch.text("destination", &mut existing.destination, payload.destination);

                order::update(session, &existing).await?;
                Ok::<_, AppError>(patch)
            })
        })
        .await?;

    tracing::info!(order_id = id, changed = ?changed.changed(), "Order updated");
    Ok(StatusCode::OK)
}

/// DELETE /orders?id=
pub async fn delete(State(state): State<ServerState>, id: IdParam) -> AppResult<StatusCode> {
    let id = id.require("Order id has to be provided.")?;

    state
        .db
        .with_session(|session| {
            Box::pin(async move {
                if order::find_by_id(session, id).await?.is_none() {
                    tracing::error!(order_id = id, "Order does not exist");
                    return Err(AppError::with_message(
                        ErrorCode::OrderNotFound,
                        format!("Order with id {id} could not be found."),
                    ));
                }
                order::delete(session, id).await?;
                Ok::<_, AppError>(())
            })
        })
        .await?;

    tracing::info!(order_id = id, "Order removed");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn full_payload() -> OrderCreate {
        OrderCreate {
            start_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).single(),
            end_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).single(),
            price: Some(Decimal::new(125050, 2)),
            employee_id: Some(1),
            start_city: Some("Brno".into()),
            destination: Some("Praha".into()),
        }
    }

    #[test]
    fn test_validate_create_complete() {
        let data = validate_create(full_payload()).unwrap();
        assert_eq!(data.employee_id, 1);
        assert_eq!(data.price, Decimal::new(125050, 2));
        assert_eq!(data.destination, "Praha");
    }

    #[test]
    fn test_validate_create_lists_missing_fields() {
        let payload = OrderCreate {
            price: None,
            start_city: Some("  ".into()),
            ..full_payload()
        };

        let err = validate_create(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let missing = err.details.unwrap()["missingFields"].clone();
        assert_eq!(missing, serde_json::json!(["price", "startCity"]));
    }
}
