//! [`ActorEntity`] implementation for [`CartLine`].

use super::{CartLineAction, CartLineError};
use crate::model::{CartLine, CartLineCreate, CartLineUpdate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_discount(value: f64) -> Result<(), CartLineError> {
    if value.is_nan() || value <= 0.0 {
        return Err(CartLineError::InvalidDiscount(value));
    }
    Ok(())
}

fn check_total(line: &CartLine) -> Result<(), CartLineError> {
    if !line.line_total().is_finite() {
        return Err(CartLineError::TotalOutOfRange);
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for CartLine {
    type Id = ProductId;
    type Create = CartLineCreate;
    type Update = CartLineUpdate;
    type Action = CartLineAction;
    type ActionResult = f64;
    type Context = ();
    type Error = CartLineError;

    fn from_create_params(params: CartLineCreate) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(CartLineError::InvalidQuantity);
        }
        let line = Self {
            item_id: params.item_id,
            item_name: params.item_name,
            unit_price: params.unit_price,
            quantity: params.quantity,
        };
        check_total(&line)?;
        Ok(line)
    }

    /// A line is keyed by the product it holds.
    fn id(&self) -> ProductId {
        self.item_id
    }

    /// Overwrites the quantity. Stock is not consulted here.
    async fn on_update(
        &mut self,
        update: CartLineUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if update.quantity == 0 {
            return Err(CartLineError::InvalidQuantity);
        }
        self.quantity = update.quantity;
        check_total(self)
    }

    async fn handle_action(
        &mut self,
        action: CartLineAction,
        _ctx: &Self::Context,
    ) -> Result<f64, Self::Error> {
        match action {
            CartLineAction::ApplyPercentageDiscount(pct) => {
                check_discount(pct)?;
                if pct > 100.0 {
                    return Err(CartLineError::PercentageTooLarge(pct));
                }
                self.unit_price -= self.unit_price * pct / 100.0;
            }
            CartLineAction::ApplyFlatDiscount(amount) => {
                check_discount(amount)?;
                self.unit_price -= amount;
            }
        }
        check_total(self)?;
        Ok(self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64) -> CartLine {
        CartLine {
            item_id: ProductId(9),
            item_name: "lamp".into(),
            unit_price: price,
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn test_percentage_discount() {
        let mut l = line(100.0);
        let price = l
            .handle_action(CartLineAction::ApplyPercentageDiscount(20.0), &())
            .await
            .unwrap();
        assert_eq!(price, 80.0);
        assert_eq!(l.unit_price, 80.0);

        let err = l
            .handle_action(CartLineAction::ApplyPercentageDiscount(101.0), &())
            .await
            .unwrap_err();
        assert_eq!(err, CartLineError::PercentageTooLarge(101.0));
    }

    #[tokio::test]
    async fn test_flat_discount_has_no_floor() {
        let mut l = line(50.0);
        let price = l
            .handle_action(CartLineAction::ApplyFlatDiscount(10.0), &())
            .await
            .unwrap();
        assert_eq!(price, 40.0);

        let price = l
            .handle_action(CartLineAction::ApplyFlatDiscount(45.0), &())
            .await
            .unwrap();
        assert_eq!(price, -5.0);
    }

    #[tokio::test]
    async fn test_zero_values_are_rejected() {
        let mut l = line(50.0);
        assert_eq!(
            l.handle_action(CartLineAction::ApplyFlatDiscount(0.0), &()).await,
            Err(CartLineError::InvalidDiscount(0.0))
        );
        assert_eq!(
            l.on_update(CartLineUpdate { quantity: 0 }, &()).await,
            Err(CartLineError::InvalidQuantity)
        );
        assert_eq!(l.quantity, 2);
    }

    #[tokio::test]
    async fn test_unrepresentable_total_is_rejected() {
        // -f64::MAX per unit, two units
        let mut l = line(-10.0);
        assert_eq!(
            l.handle_action(CartLineAction::ApplyFlatDiscount(f64::MAX), &())
                .await,
            Err(CartLineError::TotalOutOfRange)
        );

        let mut pricey = line(f64::MAX / 2.0);
        assert_eq!(
            pricey.on_update(CartLineUpdate { quantity: 3 }, &()).await,
            Err(CartLineError::TotalOutOfRange)
        );
        assert_eq!(
            CartLine::from_create_params(CartLineCreate {
                item_id: ProductId(9),
                item_name: "lamp".into(),
                unit_price: f64::MAX,
                quantity: 2,
            }),
            Err(CartLineError::TotalOutOfRange)
        );
    }
}
