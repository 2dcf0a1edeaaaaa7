//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::{IdParam, Payload};
use crate::core::ServerState;
use crate::db::repository::employee::{self, NewEmployee};
use crate::db::repository::order;
use crate::utils::validation::{Patch, Required};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_create(payload: EmployeeCreate) -> AppResult<NewEmployee> {
    let mut required = Required::default();
    let first_name = required.text("firstName", payload.first_name);
    let last_name = required.text("lastName", payload.last_name);
    let birth_date = required.value("birthDate", payload.birth_date);
    let car_registration_number =
        required.text("carRegistrationNumber", payload.car_registration_number);

    match (first_name, last_name, birth_date, car_registration_number) {
        (Some(first_name), Some(last_name), Some(birth_date), Some(car_registration_number)) => {
            Ok(NewEmployee {
                first_name,
                last_name,
                birth_date,
                car_registration_number,
            })
        }
        _ => Err(required.into_error()),
    }
}

fn employee_not_found(id: i64) -> AppError {
    tracing::error!(employee_id = id, "Employee does not exist");
    AppError::with_message(
        ErrorCode::EmployeeNotFound,
        format!("Could not find employee with id: {id}."),
    )
}

/// GET /employees[?id=] - all employees, or the one matching `id`
pub async fn list(
    State(state): State<ServerState>,
    IdParam(filter): IdParam,
) -> AppResult<Json<Vec<Employee>>> {
    tracing::info!(id = ?filter, "Fetching employees");
    let employees = state
        .db
        .with_read_session(|session| Box::pin(async move { employee::list(session, filter).await }))
        .await?;

    if employees.is_empty() {
        tracing::info!("There were no employees to return");
        return Err(AppError::not_found(match filter {
            Some(id) => format!("Could not find employee with id: {id}."),
            None => "There are no employees.".to_string(),
        }));
    }

    tracing::info!(count = employees.len(), "Returning employees");
    Ok(Json(employees))
}

/// POST /employees - create an employee (all fields required)
pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<EmployeeCreate>,
) -> AppResult<StatusCode> {
    let data = validate_create(payload)?;

    let created = state
        .db
        .with_session(|session| Box::pin(async move { employee::insert(session, data).await }))
        .await?;

    tracing::info!(employee_id = created.id, "Employee created");
    Ok(StatusCode::OK)
}

/// PUT /employees?id= - sparse update, blank or absent fields are kept
pub async fn update(
    State(state): State<ServerState>,
    id: IdParam,
    Payload(payload): Payload<EmployeeUpdate>,
) -> AppResult<StatusCode> {
    let id = id.require("Employee id has to be provided.")?;

    let changed = state
        .db
        .with_session(|session| {
            Box::pin(async move {
                let mut existing = employee::find_by_id(session, id)
                    .await?
                    .ok_or_else(|| employee_not_found(id))?;

                let mut patch = Patch::default();
                patch.text("firstName", &mut existing.first_name, payload.first_name);
                patch.text("lastName", &mut existing.last_name, payload.last_name);
                patch.value("birthDate", &mut existing.birth_date, payload.birth_date);
                patch.text(
                    "carRegistrationNumber",
                    &mut existing.car_registration_number,
                    payload.car_registration_number,
                );

                employee::update(session, &existing).await?;
                Ok::<_, AppError>(patch)
            })
        })
        .await?;

    tracing::info!(employee_id = id, changed = ?changed.changed(), "Employee updated");
    Ok(StatusCode::OK)
}

/// DELETE /employees?id= - refused while any order references the employee
pub async fn delete(State(state): State<ServerState>, id: IdParam) -> AppResult<StatusCode> {
    let id = id.require("Employee id has to be provided.")?;

    state
        .db
        .with_session(|session| {
            Box::pin(async move {
                if employee::find_by_id(session, id).await?.is_none() {
                    tracing::error!(employee_id = id, "Employee does not exist");
                    return Err(AppError::with_message(
                        ErrorCode::EmployeeNotFound,
                        format!("Employee with id {id} could not be found."),
                    ));
                }

                let blocking: Vec<i64> = order::list_by_employee(session, id)
                    .await?
                    .into_iter()
                    .map(|o| o.id)
                    .collect();
                if !blocking.is_empty() {
                    let listed = blocking
                        .iter()
                        .map(|order_id| order_id.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    tracing::warn!(employee_id = id, orders = %listed, "Employee still has orders");
                    return Err(AppError::with_message(
                        ErrorCode::EmployeeHasOrders,
                        format!(
                            "Employee with id {id} cannot be deleted while orders reference it: {listed}."
                        ),
                    )
                    .with_detail("orderIds", blocking));
                }

                employee::delete(session, id).await?;
                Ok::<_, AppError>(())
            })
        })
        .await?;

    tracing::info!(employee_id = id, "Employee removed");
    Ok(StatusCode::OK)
}
