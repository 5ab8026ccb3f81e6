use crate::clients::{AttendanceClient, EmployeeClient, EnrollmentClient, OrderClient};
use crate::clock::Clock;
use crate::config::CafeConfig;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The running back-office: every store started and wired.
///
/// # Architecture
///
/// - **Order store**: checkout submissions, admin status changes, sales figures
/// - **Enrollment store**: barista-training applications
/// - **Employee store**: the staff roster
/// - **Attendance store**: daily attendance, started with an `EmployeeClient` so it can
///   refuse marks for unknown or inactive staff
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new(&CafeConfig::from_env()?);
///
/// let mut checkout = CheckoutFlow::new(system.orders.clone());
/// // ...
/// drop(checkout);
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    pub orders: OrderClient,
    pub enrollments: EnrollmentClient,
    pub employees: EmployeeClient,
    pub attendance: AttendanceClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts every store on the wall clock. Must be called inside a Tokio runtime.
    pub fn new(config: &CafeConfig) -> Self {
        Self::with_clock(config, Clock::system())
    }

    /// Starts every store, stamping records from `clock`.
    pub fn with_clock(config: &CafeConfig, clock: Clock) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors (no dependencies)
        let (order_actor, orders) = crate::order_actor::new(buffer);
        let (enrollment_actor, enrollments) = crate::enrollment_actor::new(buffer);
        let (employee_actor, employees) = crate::staff_actor::new_employees(buffer);
        let (attendance_actor, attendance) = crate::staff_actor::new_attendance(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(order_actor.run(clock.clone())),
            tokio::spawn(enrollment_actor.run(clock)),
            tokio::spawn(employee_actor.run(())),
            tokio::spawn(attendance_actor.run(employees.clone())),
        ];
        info!(buffer, "Cafe system started");

        Self {
            orders,
            enrollments,
            employees,
            attendance,
            handles,
        }
    }

    /// Drops the system's clients and waits for every store to stop.
    ///
    /// Clones handed out earlier (to a checkout flow, say) keep their store alive, so
    /// drop them first or this waits for them.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.enrollments);
        drop(self.attendance);
        drop(self.employees);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
