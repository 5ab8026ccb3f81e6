use cafe_actors::mock::MockClient;
use cafe_actors::{ActorClient, FrameworkError};
use cafe_shop::clients::EmployeeClient;
use cafe_shop::model::{AttendanceId, AttendanceStatus, Employee, EmployeeId};
use cafe_shop::staff_actor::StaffError;
use chrono::{NaiveDate, TimeZone, Utc};

fn karim(active: bool) -> Employee {
    Employee {
        id: EmployeeId(7),
        name: "Karim".into(),
        email: "karim@example.com".into(),
        phone: "01900000000".into(),
        position: "Barista".into(),
        hire_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        is_active: active,
    }
}

/// Pattern 2: Actor + Mocks
/// - Real Attendance actor (tests the employee check in on_create)
/// - Mocked Employee client (isolates the employee store)
#[tokio::test]
async fn test_attendance_actor_with_mocked_employees() {
    let mut employee_mock = MockClient::<Employee>::new();

    // AttendanceRecord::on_create looks the employee up once
    employee_mock
        .expect_get(EmployeeId(7))
        .return_ok(Some(karim(true)));

    let employees = EmployeeClient::new(employee_mock.client());
    let (attendance_actor, attendance) = cafe_shop::staff_actor::new_attendance(8);
    let actor_handle = tokio::spawn(attendance_actor.run(employees.clone()));

    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let nine = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let id = attendance
        .mark_attendance(EmployeeId(7), day, AttendanceStatus::Present, nine)
        .await
        .expect("Marking attendance failed");
    assert_eq!(id, AttendanceId(1));

    let record = attendance.get(id).await.unwrap().unwrap();
    assert_eq!(record.employee_id, EmployeeId(7));
    assert_eq!(record.check_in, Some(nine));

    employee_mock.verify();

    drop(attendance);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_employee_is_refused() {
    let mut employee_mock = MockClient::<Employee>::new();
    employee_mock.expect_get(EmployeeId(8)).return_ok(None);

    let (attendance_actor, attendance) = cafe_shop::staff_actor::new_attendance(8);
    tokio::spawn(attendance_actor.run(EmployeeClient::new(employee_mock.client())));

    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let err = attendance
        .mark_attendance(EmployeeId(8), day, AttendanceStatus::Absent, Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err, StaffError::UnknownEmployee(EmployeeId(8)));
    assert!(attendance.attendance_on(day).await.unwrap().is_empty());

    employee_mock.verify();
}

#[tokio::test]
async fn test_re_marking_checks_the_employee_again() {
    let mut employee_mock = MockClient::<Employee>::new();
    employee_mock
        .expect_get(EmployeeId(7))
        .return_ok(Some(karim(true)));
    employee_mock
        .expect_get(EmployeeId(7))
        .return_ok(Some(karim(false)));

    let (attendance_actor, attendance) = cafe_shop::staff_actor::new_attendance(8);
    tokio::spawn(attendance_actor.run(EmployeeClient::new(employee_mock.client())));

    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let nine = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    attendance
        .mark_attendance(EmployeeId(7), day, AttendanceStatus::Present, nine)
        .await
        .unwrap();

    let err = attendance
        .mark_attendance(EmployeeId(7), day, AttendanceStatus::Leave, nine)
        .await
        .unwrap_err();
    assert_eq!(err, StaffError::InactiveEmployee(EmployeeId(7)));

    // the first mark stands
    let records = attendance.attendance_on(day).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);

    employee_mock.verify();
}

#[tokio::test]
async fn test_employee_store_outage_surfaces_as_communication_error() {
    let mut employee_mock = MockClient::<Employee>::new();
    employee_mock
        .expect_get(EmployeeId(7))
        .return_err(FrameworkError::ActorClosed);

    let (attendance_actor, attendance) = cafe_shop::staff_actor::new_attendance(8);
    tokio::spawn(attendance_actor.run(EmployeeClient::new(employee_mock.client())));

    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let err = attendance
        .mark_attendance(EmployeeId(7), day, AttendanceStatus::Present, Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err, StaffError::ActorCommunicationError("Actor closed".into()));

    employee_mock.verify();
}
