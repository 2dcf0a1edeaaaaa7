//! Employee Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::Employee;
use sqlx::SqliteConnection;

/// Validated employee ready for insertion
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub car_registration_number: String,
}

/// All employees, or only the one matching `filter_id`
pub async fn list(conn: &mut SqliteConnection, filter_id: Option<i64>) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, birth_date, car_registration_number FROM employees WHERE (?1 IS NULL OR id = ?1) ORDER BY id",
    )
    .bind(filter_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, birth_date, car_registration_number FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(employee)
}

pub async fn insert(conn: &mut SqliteConnection, data: NewEmployee) -> RepoResult<Employee> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employees (first_name, last_name, birth_date, car_registration_number) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(data.birth_date)
    .bind(&data.car_registration_number)
    .fetch_one(&mut *conn)
    .await?;

    Ok(Employee {
        id,
        first_name: data.first_name,
        last_name: data.last_name,
        birth_date: data.birth_date,
        car_registration_number: data.car_registration_number,
    })
}

/// Persist every column of an already loaded (and mutated) employee
pub async fn update(conn: &mut SqliteConnection, employee: &Employee) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE employees SET first_name = ?1, last_name = ?2, birth_date = ?3, car_registration_number = ?4 WHERE id = ?5",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(employee.birth_date)
    .bind(&employee.car_registration_number)
    .bind(employee.id)
    .execute(&mut *conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {} not found", employee.id)));
    }
    Ok(())
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}
