//! [`ActorEntity`] implementation for [`Order`].
//!
//! Submissions are validated in `from_create_params` (the payload alone decides) and
//! timestamped in `on_create` from the injected [`Clock`].

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clock::Clock;
use crate::model::{
    items_total, FulfillmentMode, Order, OrderCreate, OrderFilter, OrderId, OrderStatus,
};
use async_trait::async_trait;
use cafe_actors::ActorEntity;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Rejects submissions the kitchen could not fulfil or bill.
pub fn validate(params: &OrderCreate) -> Result<(), OrderError> {
    if params.customer_name.trim().is_empty() {
        return Err(OrderError::ValidationError("customer name is required".into()));
    }
    if params.customer_phone.trim().is_empty() {
        return Err(OrderError::ValidationError("customer phone is required".into()));
    }
    if params.items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    for item in &params.items {
        if item.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                name: item.name.clone(),
                quantity: item.quantity,
            });
        }
        if item.price < Decimal::ZERO {
            return Err(OrderError::ValidationError(format!(
                "negative price for {}",
                item.name
            )));
        }
    }
    let computed = items_total(&params.items);
    if computed != params.total_amount {
        return Err(OrderError::TotalMismatch {
            submitted: params.total_amount,
            computed,
        });
    }
    if params.order_type == FulfillmentMode::Delivery
        && params
            .delivery_address
            .as_deref()
            .map_or(true, |address| address.trim().is_empty())
    {
        return Err(OrderError::MissingDeliveryAddress);
    }
    if params.status != OrderStatus::Pending {
        return Err(OrderError::ValidationError(format!(
            "new orders start pending, got {}",
            params.status
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Filter = OrderFilter;
    type Context = Clock;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        validate(&params)?;
        // stamped for real in on_create
        Ok(Self::new(id, params, DateTime::<Utc>::default()))
    }

    async fn on_create(&mut self, clock: &Clock) -> Result<(), OrderError> {
        let now = clock.now();
        self.created_at = now;
        self.updated_at = now;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _clock: &Clock) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        clock: &Clock,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::SetStatus(next) => {
                if !self.status.can_advance_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                let previous = std::mem::replace(&mut self.status, next);
                self.updated_at = clock.now();
                Ok(previous)
            }
        }
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.status.map_or(true, |status| status == self.status)
            && filter.placed_from.map_or(true, |from| self.created_at >= from)
            && filter.placed_until.map_or(true, |until| self.created_at < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;

    fn latte_order() -> OrderCreate {
        OrderCreate {
            customer_name: "Rahim".into(),
            customer_phone: "01700000000".into(),
            customer_email: None,
            order_type: FulfillmentMode::Pickup,
            delivery_address: None,
            notes: None,
            items: vec![OrderItem {
                name: "Latte".into(),
                price: Decimal::from(350),
                quantity: 2,
                category: "coffee".into(),
            }],
            total_amount: Decimal::from(700),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn well_formed_orders_pass() {
        assert_eq!(validate(&latte_order()), Ok(()));
    }

    #[test]
    fn empty_orders_are_rejected() {
        let mut order = latte_order();
        order.items.clear();
        order.total_amount = Decimal::ZERO;
        assert_eq!(validate(&order), Err(OrderError::EmptyOrder));
    }

    #[test]
    fn zero_quantities_are_rejected() {
        let mut order = latte_order();
        order.items[0].quantity = 0;
        assert!(matches!(
            validate(&order),
            Err(OrderError::InvalidQuantity { quantity: 0, .. })
        ));
    }

    #[test]
    fn totals_must_add_up() {
        let mut order = latte_order();
        order.total_amount = Decimal::from(350);
        assert_eq!(
            validate(&order),
            Err(OrderError::TotalMismatch {
                submitted: Decimal::from(350),
                computed: Decimal::from(700),
            })
        );
    }

    #[test]
    fn oversized_totals_saturate_instead_of_panicking() {
        let mut order = latte_order();
        order.items[0].price = Decimal::MAX;
        order.total_amount = Decimal::MAX;
        assert_eq!(validate(&order), Ok(()));
    }

    #[test]
    fn delivery_needs_an_address() {
        let mut order = latte_order();
        order.order_type = FulfillmentMode::Delivery;
        assert_eq!(validate(&order), Err(OrderError::MissingDeliveryAddress));

        order.delivery_address = Some("   ".into());
        assert_eq!(validate(&order), Err(OrderError::MissingDeliveryAddress));

        order.delivery_address = Some("House 12, Road 5".into());
        assert_eq!(validate(&order), Ok(()));
    }

    #[test]
    fn new_orders_must_be_pending() {
        let mut order = latte_order();
        order.status = OrderStatus::Completed;
        assert!(matches!(validate(&order), Err(OrderError::ValidationError(_))));
    }
}
