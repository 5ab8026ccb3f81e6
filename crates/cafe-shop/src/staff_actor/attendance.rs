//! [`ActorEntity`] implementation for [`AttendanceRecord`].
//!
//! The attendance store is started with an [`EmployeeClient`] as its context, so every
//! mark checks that the employee exists and is active.
//!
//! A record's slot is its (employee, date) pair. Marking a day that already has a record
//! is a create that the actor folds into the stored record, so the store never holds two
//! records for one employee and day.

use super::error::StaffError;
use crate::clients::EmployeeClient;
use crate::model::{AttendanceCreate, AttendanceFilter, AttendanceId, AttendanceRecord, EmployeeId};
use async_trait::async_trait;
use cafe_actors::{ActorClient, ActorEntity};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceAction {
    /// Stamps the check-out of a present record.
    CheckOut { at: DateTime<Utc> },
}

async fn ensure_active(employees: &EmployeeClient, id: EmployeeId) -> Result<(), StaffError> {
    match employees.get(id).await? {
        Some(employee) if employee.is_active => Ok(()),
        Some(_) => {
            warn!(employee_id = %id, "Attendance refused for inactive employee");
            Err(StaffError::InactiveEmployee(id))
        }
        None => {
            warn!(employee_id = %id, "Attendance refused for unknown employee");
            Err(StaffError::UnknownEmployee(id))
        }
    }
}

#[async_trait]
impl ActorEntity for AttendanceRecord {
    type Id = AttendanceId;
    type Create = AttendanceCreate;
    type Update = ();
    type Action = AttendanceAction;
    type ActionResult = ();
    type Filter = AttendanceFilter;
    type Context = EmployeeClient;
    type Error = StaffError;

    fn from_create_params(id: AttendanceId, params: AttendanceCreate) -> Result<Self, StaffError> {
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, employees: &EmployeeClient) -> Result<(), StaffError> {
        ensure_active(employees, self.employee_id).await
    }

    async fn on_update(&mut self, _update: (), _ctx: &EmployeeClient) -> Result<(), StaffError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AttendanceAction,
        _employees: &EmployeeClient,
    ) -> Result<(), StaffError> {
        match action {
            AttendanceAction::CheckOut { at } => {
                if self.check_in.is_none() {
                    return Err(StaffError::NotCheckedIn(self.employee_id.to_string()));
                }
                self.check_out = Some(at);
                Ok(())
            }
        }
    }

    fn matches(&self, filter: &AttendanceFilter) -> bool {
        filter.date.map_or(true, |date| date == self.date)
            && filter.employee_id.map_or(true, |id| id == self.employee_id)
    }

    fn same_slot(&self, other: &Self) -> bool {
        self.same_day_as(other)
    }

    async fn absorb(&mut self, newer: Self, _employees: &EmployeeClient) -> Result<(), StaffError> {
        debug!(attendance_id = %self.id, previous = %self.status, status = %newer.status, "Re-marking");
        self.replace_mark(newer);
        Ok(())
    }
}
