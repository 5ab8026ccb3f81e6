//! [`ActorEntity`] implementation for [`Employee`].

use super::error::StaffError;
use crate::model::{Employee, EmployeeCreate, EmployeeFilter, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use cafe_actors::ActorEntity;

#[async_trait]
impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = ();
    type ActionResult = ();
    type Filter = EmployeeFilter;
    type Context = ();
    type Error = StaffError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, StaffError> {
        if params.name.trim().is_empty() {
            return Err(StaffError::MissingField("name"));
        }
        if params.position.trim().is_empty() {
            return Err(StaffError::MissingField("position"));
        }
        if !params.email.contains('@') {
            return Err(StaffError::InvalidEmail(params.email));
        }
        Ok(Self::new(id, params))
    }

    /// # Fields Updated
    /// - `phone`, `position`
    /// - `is_active`: deactivation keeps the record so past attendance still resolves
    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &()) -> Result<(), StaffError> {
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), StaffError> {
        Ok(())
    }

    fn matches(&self, filter: &EmployeeFilter) -> bool {
        !filter.active_only || self.is_active
    }
}
