//! # Sales Analytics
//!
//! Read-only aggregation over the order store for the admin dashboard.
//!
//! Sales figures count **completed** orders only; the dashboard overview counts every
//! order regardless of status. Periods are resolved against a caller-supplied `now`
//! so reports are reproducible.

use crate::clients::{EnrollmentClient, OrderClient};
use crate::enrollment_actor::EnrollmentError;
use crate::model::{Order, OrderFilter, OrderStatus};
use crate::order_actor::OrderError;
use cafe_actors::ActorClient;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Orders(#[from] OrderError),

    #[error(transparent)]
    Enrollments(#[from] EnrollmentError),
}

/// The reporting window picked on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesPeriod {
    All,
    Today,
    Month,
    Year,
    /// A single calendar day.
    Custom(NaiveDate),
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

impl SalesPeriod {
    /// The half-open UTC window this period covers at `now`. `None` means unbounded.
    pub fn window(&self, now: DateTime<Utc>) -> Option<Range<DateTime<Utc>>> {
        let today = now.date_naive();
        let (start, end) = match *self {
            SalesPeriod::All => return None,
            SalesPeriod::Today => (today, today.succ_opt().unwrap_or(NaiveDate::MAX)),
            SalesPeriod::Custom(day) => (day, day.succ_opt().unwrap_or(NaiveDate::MAX)),
            SalesPeriod::Month => {
                let first = today.with_day(1).unwrap_or(today);
                let next = first.checked_add_months(Months::new(1));
                (first, next.unwrap_or(NaiveDate::MAX))
            }
            SalesPeriod::Year => {
                let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                let next = first.checked_add_months(Months::new(12));
                (first, next.unwrap_or(NaiveDate::MAX))
            }
        };
        Some(midnight(start)..midnight(end))
    }

    fn filter(&self, now: DateTime<Utc>) -> OrderFilter {
        let filter = OrderFilter::with_status(OrderStatus::Completed);
        match self.window(now) {
            Some(window) => filter.placed_between(window.start, window.end),
            None => filter,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesStats {
    pub total_sales: Decimal,
    pub order_count: usize,
    /// Rounded to two places. Zero when there are no orders.
    pub average_order_value: Decimal,
}

impl SalesStats {
    /// Aggregates the completed orders among `orders`.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let (total_sales, order_count) = orders
            .into_iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .fold((Decimal::ZERO, 0usize), |(sum, n), order| {
                (sum.saturating_add(order.total_amount), n + 1)
            });
        let average_order_value = if order_count == 0 {
            Decimal::ZERO
        } else {
            (total_sales / Decimal::from(order_count)).round_dp(2)
        };
        Self {
            total_sales,
            order_count,
            average_order_value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub total_orders: usize,
    /// Sum over every order, whatever its status.
    pub total_sales: Decimal,
    pub pending_orders: usize,
    pub enrollments: usize,
}

impl DashboardOverview {
    pub fn from_records(orders: &[Order], enrollments: usize) -> Self {
        Self {
            total_orders: orders.len(),
            total_sales: orders
                .iter()
                .fold(Decimal::ZERO, |sum, order| sum.saturating_add(order.total_amount)),
            pending_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            enrollments,
        }
    }
}

/// Completed-order sales for `period`, resolved at `now`.
#[instrument(skip(orders))]
pub async fn sales_stats(
    orders: &OrderClient,
    period: SalesPeriod,
    now: DateTime<Utc>,
) -> Result<SalesStats, OrderError> {
    let completed = orders.list(period.filter(now)).await?;
    Ok(SalesStats::from_orders(&completed))
}

#[instrument(skip_all)]
pub async fn dashboard_overview(
    orders: &OrderClient,
    enrollments: &EnrollmentClient,
) -> Result<DashboardOverview, AnalyticsError> {
    let all_orders = orders.list(OrderFilter::all()).await?;
    let enrollment_count = enrollments.list_enrollments(None).await?.len();
    Ok(DashboardOverview::from_records(&all_orders, enrollment_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FulfillmentMode, OrderId};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn order(id: u32, total: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            customer_name: "Rahim".into(),
            customer_phone: "017".into(),
            customer_email: None,
            items: Vec::new(),
            total_amount: Decimal::from(total),
            order_type: FulfillmentMode::Pickup,
            delivery_address: None,
            notes: None,
            status,
            created_at: at(2026, 3, 14, 12),
            updated_at: at(2026, 3, 14, 12),
        }
    }

    #[test]
    fn periods_resolve_to_half_open_windows() {
        let now = at(2026, 3, 14, 15);

        assert_eq!(SalesPeriod::All.window(now), None);
        assert_eq!(
            SalesPeriod::Today.window(now),
            Some(at(2026, 3, 14, 0)..at(2026, 3, 15, 0))
        );
        assert_eq!(
            SalesPeriod::Month.window(now),
            Some(at(2026, 3, 1, 0)..at(2026, 4, 1, 0))
        );
        assert_eq!(
            SalesPeriod::Year.window(now),
            Some(at(2026, 1, 1, 0)..at(2027, 1, 1, 0))
        );

        let day = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(
            SalesPeriod::Custom(day).window(now),
            Some(at(2026, 2, 28, 0)..at(2026, 3, 1, 0))
        );
    }

    #[test]
    fn december_rolls_into_next_year() {
        let now = at(2026, 12, 31, 23);
        assert_eq!(
            SalesPeriod::Month.window(now),
            Some(at(2026, 12, 1, 0)..at(2027, 1, 1, 0))
        );
    }

    #[test]
    fn only_completed_orders_count_as_sales() {
        let orders = vec![
            order(1, 950, OrderStatus::Completed),
            order(2, 500, OrderStatus::Pending),
            order(3, 350, OrderStatus::Completed),
            order(4, 700, OrderStatus::Cancelled),
        ];
        let stats = SalesStats::from_orders(&orders);

        assert_eq!(stats.total_sales, Decimal::from(1300));
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.average_order_value, Decimal::from(650));
    }

    #[test]
    fn average_is_zero_without_orders() {
        assert_eq!(SalesStats::from_orders(&Vec::new()), SalesStats::default());
    }

    #[test]
    fn average_is_rounded_to_cents() {
        let orders = vec![
            order(1, 100, OrderStatus::Completed),
            order(2, 100, OrderStatus::Completed),
            order(3, 150, OrderStatus::Completed),
        ];
        assert_eq!(
            SalesStats::from_orders(&orders).average_order_value,
            Decimal::new(11667, 2)
        );
    }

    #[test]
    fn overview_counts_every_status() {
        let orders = vec![
            order(1, 950, OrderStatus::Completed),
            order(2, 500, OrderStatus::Pending),
            order(3, 250, OrderStatus::Pending),
        ];
        let overview = DashboardOverview::from_records(&orders, 4);
        assert_eq!(
            overview,
            DashboardOverview {
                total_orders: 3,
                total_sales: Decimal::from(1700),
                pending_orders: 2,
                enrollments: 4,
            }
        );
    }
}
