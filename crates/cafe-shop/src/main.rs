//! # Cafe Shop demo
//!
//! Walks one session end to end:
//! 1. Browse the house [`Menu`] and fill a [`Cart`].
//! 2. Check out through a [`CheckoutFlow`] backed by the order store.
//! 3. Run the back office: move the order along, take an enrollment, mark attendance.
//! 4. Print the dashboard and today's sales.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p cafe-shop
//! ```

use cafe_actors::tracing::setup_tracing;
use cafe_shop::analytics::{dashboard_overview, sales_stats, SalesPeriod};
use cafe_shop::cart::Cart;
use cafe_shop::checkout::CheckoutFlow;
use cafe_shop::config::CafeConfig;
use cafe_shop::lifecycle::CafeSystem;
use cafe_shop::model::{
    AttendanceStatus, EmployeeCreate, EnrollmentCreate, ExperienceLevel, FulfillmentMode, Menu,
    MenuCategory, OrderStatus,
};
use chrono::Utc;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CafeConfig::from_env()?;
    setup_tracing(&config.log_filter);
    let currency = config.currency.as_str();

    info!("Starting cafe system");
    let system = CafeSystem::new(&config);
    let menu = Menu::house();

    // --- Browse ---
    let mut cart = Cart::new();
    for name in ["Espresso", "Latte", "Latte", "Classic Fries"] {
        if let Some(item) = menu.find(name) {
            cart.add_item(item);
        }
    }
    if let Some(burger) = menu.in_category(MenuCategory::Burgers).next() {
        cart.add_item(burger);
        cart.remove_item(burger.name());
    }
    info!(items = cart.count(), total = %cart.total(), currency, "Cart ready");

    // --- Checkout ---
    let mut checkout = CheckoutFlow::new(system.orders.clone());
    checkout.review(&cart)?;
    let draft = checkout.draft_mut();
    draft.customer_name = "Rahim Uddin".into();
    draft.customer_phone = "01700000000".into();
    draft.order_type = FulfillmentMode::Delivery;
    draft.delivery_address = "House 12, Road 5, Dhanmondi".into();

    let order_id = checkout
        .submit(&mut cart)
        .instrument(info_span!("checkout"))
        .await?;
    info!(%order_id, cart_items = cart.count(), "Checkout complete");
    drop(checkout);

    // --- Back office ---
    let orders = &system.orders;
    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        orders.advance(order_id, status).await?;
    }
    let counts = orders.status_counts().await?;
    info!(completed = counts.completed, pending = counts.pending, "Order tabs");

    let enrollment_id = system
        .enrollments
        .submit_enrollment(EnrollmentCreate {
            full_name: "Nadia Islam".into(),
            email: "nadia@example.com".into(),
            phone: "01800000000".into(),
            experience_level: ExperienceLevel::Intermediate,
            message: Some("Weekend batch, please".into()),
        })
        .await?;
    info!(%enrollment_id, "Enrollment received");

    let now = Utc::now();
    let barista = system
        .employees
        .hire(EmployeeCreate {
            name: "Karim".into(),
            email: "karim@example.com".into(),
            phone: "01900000000".into(),
            position: "Barista".into(),
            hire_date: now.date_naive(),
        })
        .await?;
    system
        .attendance
        .mark_attendance(barista, now.date_naive(), AttendanceStatus::Present, now)
        .await?;
    let present = system.attendance.attendance_on(now.date_naive()).await?;
    info!(present = present.len(), "Attendance marked");

    // --- Analytics ---
    let overview = dashboard_overview(&system.orders, &system.enrollments).await?;
    info!(
        total_orders = overview.total_orders,
        total_sales = %overview.total_sales,
        pending = overview.pending_orders,
        enrollments = overview.enrollments,
        currency,
        "Dashboard"
    );
    let today = sales_stats(&system.orders, SalesPeriod::Today, now).await?;
    info!(
        sales = %today.total_sales,
        orders = today.order_count,
        average = %today.average_order_value,
        currency,
        "Today's sales"
    );

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
