use crate::{
    error::ApiError,
    model::{attendance::AttendanceEntry, employee::lenient_id},
    utils::validation::require_fields,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(example = "EMP-001", value_type = String)]
    pub emp_id: Option<String>,
    #[serde(default)]
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: Option<String>,
    #[serde(default)]
    #[schema(example = "Present", value_type = String)]
    pub status: Option<String>,
}

/// Mark attendance
///
/// Appends a row; the same employee may be marked any number of times for
/// the same day. The date goes to MySQL as sent, so a value the DATE column
/// refuses comes back as the driver error.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Object, example = json!({
            "message": "Attendance marked"
        })),
        (status = 400, description = "Missing field", body = Object, example = json!({
            "error": "All fields required"
        })),
        (status = 500, description = "Database error, driver message passed through")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let [emp_id, date, status] = require_fields([&payload.emp_id, &payload.date, &payload.status])?;

    sqlx::query(
        r#"
        INSERT INTO attendance (emp_id, date, status)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(emp_id)
    .bind(date)
    .bind(status)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, emp_id = %emp_id, date, "Failed to mark attendance");
        ApiError::Database(e.to_string())
    })?;

    info!(emp_id = %emp_id, date, status, "Attendance marked");

    Ok(HttpResponse::Created().json(json!({
        "message": "Attendance marked"
    })))
}

#[utoipa::path(
    get,
    path = "/attendance/{emp_id}",
    params(
        ("emp_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Every attendance row of the employee, storage order", body = [AttendanceEntry]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let emp_id = path.into_inner();

    let entries = sqlx::query_as::<_, AttendanceEntry>(
        "SELECT date, status FROM attendance WHERE emp_id = ?",
    )
    .bind(&emp_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, emp_id = %emp_id, "Failed to fetch attendance");
        ApiError::Internal
    })?;

    debug!(emp_id = %emp_id, count = entries.len(), "Fetched attendance");

    Ok(HttpResponse::Ok().json(entries))
}
