//! # Staff Clients
//!
//! [`EmployeeClient`] and [`AttendanceClient`] wrap the two staff stores.
use crate::model::{
    AttendanceCreate, AttendanceFilter, AttendanceId, AttendanceRecord, AttendanceStatus,
    Employee, EmployeeCreate, EmployeeFilter, EmployeeId, EmployeeUpdate,
};
use crate::staff_actor::{AttendanceAction, StaffError};
use async_trait::async_trait;
use cafe_actors::{ActorClient, FrameworkError, ResourceClient};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, instrument};

fn map_staff_error(e: FrameworkError) -> StaffError {
    match e.into_entity_error::<StaffError>() {
        Ok(err) => err,
        Err(FrameworkError::NotFound(id)) => StaffError::NotFound(id),
        Err(other) => StaffError::ActorCommunicationError(other.to_string()),
    }
}

/// Client for interacting with the Employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn hire(&self, params: EmployeeCreate) -> Result<EmployeeId, StaffError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(employee_id = %id, "Employee hired");
        Ok(id)
    }

    /// Active employees sorted by name.
    #[instrument(skip(self))]
    pub async fn active_employees(&self) -> Result<Vec<Employee>, StaffError> {
        let mut employees = self.list(EmployeeFilter { active_only: true }).await?;
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, StaffError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Keeps the record but hides it from the active roster.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: EmployeeId) -> Result<Employee, StaffError> {
        let update = EmployeeUpdate {
            is_active: Some(false),
            ..EmployeeUpdate::default()
        };
        let employee = self.update_employee(id, update).await?;
        info!(employee_id = %id, "Employee deactivated");
        Ok(employee)
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = StaffError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_staff_error(e)
    }
}

/// Client for interacting with the Attendance actor.
#[derive(Clone)]
pub struct AttendanceClient {
    inner: ResourceClient<AttendanceRecord>,
}

impl AttendanceClient {
    pub fn new(inner: ResourceClient<AttendanceRecord>) -> Self {
        Self { inner }
    }

    /// Records `status` for `employee` on `date`, replacing any earlier mark for that day.
    ///
    /// `at` becomes the check-in time when the status is `Present`. A day that already
    /// has a record keeps its id; the store folds the new mark into it.
    #[instrument(skip(self))]
    pub async fn mark_attendance(
        &self,
        employee: EmployeeId,
        date: NaiveDate,
        status: AttendanceStatus,
        at: DateTime<Utc>,
    ) -> Result<AttendanceId, StaffError> {
        debug!("Sending request");
        let params = AttendanceCreate {
            employee_id: employee,
            date,
            status,
            at,
            notes: None,
        };
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(attendance_id = %id, employee_id = %employee, %date, %status, "Attendance marked");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn check_out(
        &self,
        employee: EmployeeId,
        date: NaiveDate,
        at: DateTime<Utc>,
    ) -> Result<(), StaffError> {
        let record = self
            .record_for(employee, date)
            .await?
            .ok_or_else(|| StaffError::NotCheckedIn(employee.to_string()))?;
        self.inner
            .perform_action(record.id, AttendanceAction::CheckOut { at })
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }

    /// Every record for `date`, in marking order.
    #[instrument(skip(self))]
    pub async fn attendance_on(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StaffError> {
        self.list(AttendanceFilter {
            date: Some(date),
            employee_id: None,
        })
        .await
    }

    async fn record_for(
        &self,
        employee: EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StaffError> {
        let records = self
            .list(AttendanceFilter {
                date: Some(date),
                employee_id: Some(employee),
            })
            .await?;
        Ok(records.into_iter().next())
    }
}

#[async_trait]
impl ActorClient<AttendanceRecord> for AttendanceClient {
    type Error = StaffError;

    fn inner(&self) -> &ResourceClient<AttendanceRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_staff_error(e)
    }
}
