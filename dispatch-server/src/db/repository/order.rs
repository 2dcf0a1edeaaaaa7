//! Order Repository
//!
//! Prices are stored as decimal text and parsed back into `Decimal`, so rows
//! are read through private row types rather than straight into the models.

use super::{RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::models::{Employee, Order, OrderDetail};
use sqlx::SqliteConnection;
use std::str::FromStr;

/// Validated order ready for insertion
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Decimal,
    pub start_city: String,
    pub destination: String,
    pub employee_id: i64,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    price: String,
    start_city: String,
    destination: String,
    employee_id: i64,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: row.id,
            start_time: row.start_time,
            end_time: row.end_time,
            price: parse_price(row.id, &row.price)?,
            start_city: row.start_city,
            destination: row.destination,
            employee_id: row.employee_id,
        })
    }
}

/// Order joined with its employee
#[derive(sqlx::FromRow)]
struct OrderDetailRow {
    #[sqlx(flatten)]
    order: OrderRow,
    employee_first_name: String,
    employee_last_name: String,
    employee_birth_date: NaiveDate,
    employee_car_registration_number: String,
}

impl TryFrom<OrderDetailRow> for OrderDetail {
    type Error = RepoError;

    fn try_from(row: OrderDetailRow) -> Result<Self, Self::Error> {
        let employee = Employee {
            id: row.order.employee_id,
            first_name: row.employee_first_name,
            last_name: row.employee_last_name,
            birth_date: row.employee_birth_date,
            car_registration_number: row.employee_car_registration_number,
        };
        Ok(OrderDetail {
            order: Order::try_from(row.order)?,
            employee,
        })
    }
}

fn parse_price(order_id: i64, raw: &str) -> RepoResult<Decimal> {
    Decimal::from_str(raw).map_err(|e| {
        RepoError::Database(format!("Order {order_id} has an unreadable price '{raw}': {e}"))
    })
}

/// All orders (or the one matching `filter_id`) with their employee resolved
pub async fn list(
    conn: &mut SqliteConnection,
    filter_id: Option<i64>,
) -> RepoResult<Vec<OrderDetail>> {
    let rows = sqlx::query_as::<_, OrderDetailRow>(
        r#"SELECT o.id, o.start_time, o.end_time, o.price, o.start_city, o.destination, o.employee_id,
                  e.first_name AS employee_first_name,
                  e.last_name AS employee_last_name,
                  e.birth_date AS employee_birth_date,
                  e.car_registration_number AS employee_car_registration_number
           FROM orders o
           JOIN employees e ON e.id = o.employee_id
           WHERE (?1 IS NULL OR o.id = ?1)
           ORDER BY o.id"#,
    )
    .bind(filter_id)
    .fetch_all(&mut *conn)
    .await?;

    rows.into_iter().map(OrderDetail::try_from).collect()
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(
        "SELECT id, start_time, end_time, price, start_city, destination, employee_id FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(Order::try_from).transpose()
}

/// Orders that reference `employee_id` (the employee delete guard)
pub async fn list_by_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> RepoResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        "SELECT id, start_time, end_time, price, start_city, destination, employee_id FROM orders WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(&mut *conn)
    .await?;

    rows.into_iter().map(Order::try_from).collect()
}

pub async fn insert(conn: &mut SqliteConnection, data: NewOrder) -> RepoResult<Order> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO orders (start_time, end_time, price, start_city, destination, employee_id) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.start_time)
    .bind(data.end_time)
    .bind(data.price.to_string())
    .bind(&data.start_city)
    .bind(&data.destination)
    .bind(data.employee_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(Order {
        id,
        start_time: data.start_time,
        end_time: data.end_time,
        price: data.price,
        start_city: data.start_city,
        destination: data.destination,
        employee_id: data.employee_id,
    })
}

/// Persist every column of an already loaded (and mutated) order
pub async fn update(conn: &mut SqliteConnection, order: &Order) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE orders SET start_time = ?1, end_time = ?2, price = ?3, start_city = ?4, destination = ?5, employee_id = ?6 WHERE id = ?7",
    )
    .bind(order.start_time)
    .bind(order.end_time)
    .bind(order.price.to_string())
    .bind(&order.start_city)
    .bind(&order.destination)
    .bind(order.employee_id)
    .bind(order.id)
    .execute(&mut *conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {} not found", order.id)));
    }
    Ok(())
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    Ok(())
}
