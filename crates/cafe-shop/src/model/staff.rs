//! Employees and their daily attendance.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "employee_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub phone: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub active_only: bool,
}

impl Employee {
    /// New hires start active.
    pub fn new(id: EmployeeId, params: EmployeeCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            position: params.position,
            hire_date: params.hire_date,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttendanceId(pub u32);

impl From<u32> for AttendanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AttendanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attendance_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    Leave,
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half_day",
            AttendanceStatus::Leave => "leave",
        })
    }
}

/// One employee's attendance for one day.
///
/// `check_in` is set only while the status is `Present`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceCreate {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub at: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceFilter {
    pub date: Option<NaiveDate>,
    pub employee_id: Option<EmployeeId>,
}

impl AttendanceRecord {
    pub fn new(id: AttendanceId, params: AttendanceCreate) -> Self {
        let mut record = Self {
            id,
            employee_id: params.employee_id,
            date: params.date,
            status: params.status,
            check_in: None,
            check_out: None,
            notes: params.notes,
        };
        record.mark(params.status, params.at);
        record
    }

    /// Sets the status, stamping or clearing the check-in accordingly.
    pub fn mark(&mut self, status: AttendanceStatus, at: DateTime<Utc>) {
        self.status = status;
        self.check_in = match status {
            AttendanceStatus::Present => Some(at),
            _ => None,
        };
        if self.check_in.is_none() {
            self.check_out = None;
        }
    }

    /// Whether `other` is for the same employee and day.
    pub fn same_day_as(&self, other: &AttendanceRecord) -> bool {
        self.employee_id == other.employee_id && self.date == other.date
    }

    /// Takes over the status and check-in of a newer mark for the same day.
    /// Notes are kept unless the newer mark brings its own.
    pub fn replace_mark(&mut self, newer: AttendanceRecord) {
        self.status = newer.status;
        self.check_in = newer.check_in;
        if self.check_in.is_none() {
            self.check_out = None;
        }
        if newer.notes.is_some() {
            self.notes = newer.notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn check_in_follows_the_status() {
        let nine = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let ten = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
        let mut record = AttendanceRecord::new(
            AttendanceId(1),
            AttendanceCreate {
                employee_id: EmployeeId(1),
                date: nine.date_naive(),
                status: AttendanceStatus::Present,
                at: nine,
                notes: None,
            },
        );
        assert_eq!(record.check_in, Some(nine));

        record.mark(AttendanceStatus::Leave, ten);
        assert_eq!(record.check_in, None);

        record.mark(AttendanceStatus::Present, ten);
        assert_eq!(record.check_in, Some(ten));
    }

    #[test]
    fn newer_mark_replaces_status_and_check_in() {
        let nine = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let day = nine.date_naive();
        let mark = |id, status, notes: Option<&str>| {
            AttendanceRecord::new(
                AttendanceId(id),
                AttendanceCreate {
                    employee_id: EmployeeId(1),
                    date: day,
                    status,
                    at: nine,
                    notes: notes.map(str::to_string),
                },
            )
        };
        let mut record = mark(1, AttendanceStatus::Present, Some("Opened the shop"));
        record.check_out = Some(nine);

        let late = mark(2, AttendanceStatus::Late, None);
        assert!(record.same_day_as(&late));
        record.replace_mark(late);

        assert_eq!(record.id, AttendanceId(1));
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out, None);
        assert_eq!(record.notes.as_deref(), Some("Opened the shop"));

        let mut other_day = mark(3, AttendanceStatus::Present, None);
        other_day.date = day.succ_opt().unwrap();
        assert!(!record.same_day_as(&other_day));
    }

    #[test]
    fn statuses_serialize_in_snake_case() {
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"half_day\"");
        assert_eq!(AttendanceStatus::HalfDay.to_string(), "half_day");
    }
}
