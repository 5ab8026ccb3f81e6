//! # Staff Actors
//!
//! Two stores: employees, and their daily attendance. The attendance store depends on
//! the employee store, so it is started with an [`EmployeeClient`](crate::clients::EmployeeClient)
//! as context:
//!
//! ```rust,ignore
//! let (employee_actor, employees) = staff_actor::new_employees(32);
//! let (attendance_actor, attendance) = staff_actor::new_attendance(32);
//!
//! tokio::spawn(employee_actor.run(()));
//! tokio::spawn(attendance_actor.run(employees.clone()));
//! ```

pub mod attendance;
pub mod employee;
pub mod error;

pub use attendance::AttendanceAction;
pub use error::*;

use crate::clients::{AttendanceClient, EmployeeClient};
use crate::model::{AttendanceRecord, Employee};
use cafe_actors::ResourceActor;

/// Creates a new Employee actor and its client.
pub fn new_employees(buffer_size: usize) -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, EmployeeClient::new(generic_client))
}

/// Creates a new Attendance actor and its client. Run it with an `EmployeeClient`.
pub fn new_attendance(buffer_size: usize) -> (ResourceActor<AttendanceRecord>, AttendanceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AttendanceClient::new(generic_client))
}
