//! Typed clients, one per store. Each wraps a `ResourceClient` and implements
//! [`ActorClient`](cafe_actors::ActorClient) for the shared reads.

pub mod enrollment_client;
pub mod order_client;
pub mod staff_client;

pub use enrollment_client::EnrollmentClient;
pub use order_client::OrderClient;
pub use staff_client::{AttendanceClient, EmployeeClient};
