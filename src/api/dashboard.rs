use crate::{error::ApiError, model::attendance::AttendanceStatus};
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 12,
    "total_attendance": 340,
    "present_today": 10,
    "absent_today": 1
}))]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub total_attendance: i64,
    pub present_today: i64,
    pub absent_today: i64,
}

async fn count(pool: &MySqlPool, sql: &str) -> Result<i64, ApiError> {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            error!(error = %e, sql, "Dashboard count failed");
            ApiError::Internal
        })
}

async fn count_status_on(
    pool: &MySqlPool,
    day: NaiveDate,
    status: AttendanceStatus,
) -> Result<i64, ApiError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
        .bind(day)
        .bind(status.as_ref())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            error!(error = %e, %day, %status, "Dashboard status count failed");
            ApiError::Internal
        })
}

/// Four independent counts; nothing is cached between requests.
pub async fn summarize(pool: &MySqlPool, today: NaiveDate) -> Result<DashboardSummary, ApiError> {
    let total_employees = count(pool, "SELECT COUNT(*) FROM employees").await?;
    let total_attendance = count(pool, "SELECT COUNT(*) FROM attendance").await?;
    let present_today = count_status_on(pool, today, AttendanceStatus::Present).await?;
    let absent_today = count_status_on(pool, today, AttendanceStatus::Absent).await?;

    Ok(DashboardSummary {
        total_employees,
        total_attendance,
        present_today,
        absent_today,
    })
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Headcount and attendance counts for today", body = DashboardSummary),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(pool: web::Data<MySqlPool>) -> Result<HttpResponse, ApiError> {
    let today = Local::now().date_naive();
    let summary = summarize(pool.get_ref(), today).await?;

    debug!(%today, ?summary, "Dashboard computed");

    Ok(HttpResponse::Ok().json(summary))
}
