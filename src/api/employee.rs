use crate::{
    error::ApiError,
    model::employee::{Employee, lenient_id},
    utils::validation::{is_valid_email, require_fields},
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(example = "EMP-001", value_type = String)]
    pub emp_id: Option<String>,
    #[serde(default)]
    #[schema(example = "John Doe", value_type = String)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "Engineering", value_type = String)]
    pub department: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateEmployee {
    #[serde(default)]
    #[schema(example = "John Doe", value_type = String)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "Finance", value_type = String)]
    pub department: Option<String>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 400, description = "Missing field or invalid email", body = Object, example = json!({
            "error": "All fields required"
        })),
        (status = 500, description = "Database error, driver message passed through", body = Object)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let [emp_id, name, email, department] = require_fields([
        &payload.emp_id,
        &payload.name,
        &payload.email,
        &payload.department,
    ])?;

    if !is_valid_email(email) {
        return Err(ApiError::bad_request("Invalid email"));
    }

    sqlx::query(
        r#"
        INSERT INTO employees (emp_id, name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(emp_id)
    .bind(name)
    .bind(email)
    .bind(department)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, emp_id = %emp_id, "Failed to create employee");
        ApiError::Database(e.to_string())
    })?;

    info!(emp_id = %emp_id, "Employee created");

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, unpaginated", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<MySqlPool>) -> Result<impl Responder, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT emp_id, name, email, department FROM employees",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch employees");
        ApiError::Internal
    })?;

    debug!(count = employees.len(), "Fetched employees");

    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee
///
/// Full overwrite of name, email and department. Reports success even when
/// no row carries the given id.
#[utoipa::path(
    put,
    path = "/employees/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Object, example = json!({
            "message": "Employee updated"
        })),
        (status = 400, description = "Missing field", body = Object, example = json!({
            "error": "All fields required"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
    body: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let emp_id = path.into_inner();

    let [name, email, department] = require_fields([&body.name, &body.email, &body.department])?;

    let result = sqlx::query(
        r#"
        UPDATE employees
        SET name = ?, email = ?, department = ?
        WHERE emp_id = ?
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(department)
    .bind(&emp_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, emp_id = %emp_id, "Failed to update employee");
        ApiError::Internal
    })?;

    debug!(emp_id = %emp_id, rows = result.rows_affected(), "Employee update executed");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated"
    })))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let emp_id = path.into_inner();

    let result = sqlx::query("DELETE FROM employees WHERE emp_id = ?")
        .bind(&emp_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, emp_id = %emp_id, "Failed to delete employee");
            ApiError::Internal
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Employee not found"));
    }

    info!(emp_id = %emp_id, "Employee deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted"
    })))
}
