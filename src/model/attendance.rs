use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// One stored attendance row as returned for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceEntry {
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,
}

/// Status labels the dashboard counts. Stored statuses are free text; only
/// these exact spellings are tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum AttendanceStatus {
    Present,
    Absent,
}
