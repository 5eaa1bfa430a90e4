//! Price actions on a cart line. Each answers with the line's new unit price.

#[derive(Debug, Clone, PartialEq)]
pub enum CartLineAction {
    /// Takes `pct` percent off the current unit price.
    ApplyPercentageDiscount(f64),
    /// Subtracts a fixed amount from the current unit price. The result may go below zero.
    ApplyFlatDiscount(f64),
}
