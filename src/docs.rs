use crate::api::attendance::MarkAttendance;
use crate::api::dashboard::DashboardSummary;
use crate::api::employee::{CreateEmployee, UpdateEmployee};
use crate::model::attendance::AttendanceEntry;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Attendance API",
        version = "0.1.0",
        description = r#"
## Employee & Attendance administration

A small administrative service over two tables.

### Features
- **Employees**: add, list, full update and delete by `emp_id`
- **Attendance**: mark a daily status and read an employee's history
- **Dashboard**: headcount, attendance rows and today's present/absent counts

### Response format
- Success bodies carry `message`, failures carry `error`
- Lists are returned whole, without pagination

No authentication is applied to any endpoint.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,

        crate::api::dashboard::dashboard
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            MarkAttendance,
            AttendanceEntry,
            DashboardSummary
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Summary counts"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/employees",
            "/employees/{emp_id}",
            "/attendance",
            "/attendance/{emp_id}",
            "/dashboard",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
