//! # Cart Service
//!
//! The business rules of the cart, written against the [`CatalogStore`] and [`CartStore`]
//! contracts. Each operation validates its input before touching a store and reports the first
//! failed check.
//!
//! `CartService` does not serialize callers on its own. Run it behind a
//! [`CartEngine`](super::CartEngine) so that every operation completes before the next starts.
//!
//! The multi-step operations (`add_item`, `checkout`) are split into a read-only `prepare_*`
//! phase and a `commit_*` phase that performs the writes. The engine checks between the two
//! whether the caller is still waiting.

use super::CartError;
use crate::model::{CartLineCreate, CartView, ProductCreate, ProductId};
use crate::store::{CartStore, CatalogStore, StoreError};
use tracing::{info, instrument, warn};

/// Default cap on distinct products in the cart.
pub const DEFAULT_MAX_UNIQUE_ITEMS: usize = 10;

/// Discount type that takes a percentage off the unit price.
pub const PERCENTAGE: &str = "percentage";
/// Discount type that subtracts a fixed amount from the unit price.
pub const FLAT: &str = "flat";

/// Everything `commit_add` needs, gathered by `prepare_add`.
#[derive(Debug)]
pub(crate) struct AddPlan {
    line: CartLineCreate,
    remaining_stock: u32,
    lines_before: usize,
}

pub struct CartService<C, S> {
    catalog: C,
    cart: S,
    max_unique_items: usize,
}

impl<C: CatalogStore, S: CartStore> CartService<C, S> {
    pub fn new(catalog: C, cart: S) -> Self {
        Self::with_max_unique_items(catalog, cart, DEFAULT_MAX_UNIQUE_ITEMS)
    }

    pub fn with_max_unique_items(catalog: C, cart: S, max_unique_items: usize) -> Self {
        Self {
            catalog,
            cart,
            max_unique_items,
        }
    }

    pub fn max_unique_items(&self) -> usize {
        self.max_unique_items
    }

    /// Adds a product to the catalog.
    #[instrument(skip(self), fields(product_id = %product.product_id))]
    pub async fn register_product(&self, product: ProductCreate) -> Result<(), CartError> {
        if !product.price.is_finite() || product.price <= 0.0 {
            return Err(CartError::invalid("price should be greater than zero"));
        }
        if product.product_name.is_empty() {
            return Err(CartError::invalid("product name should not be empty"));
        }
        if product.stock == 0 {
            return Err(CartError::invalid("stock should be greater than zero"));
        }

        let id = product.product_id;
        self.catalog
            .insert_product(product)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => CartError::DuplicateProduct(id),
                other => CartError::store("insert product")(other),
            })?;
        info!("Product registered");
        Ok(())
    }

    /// Reserves `quantity` units of a product in a new cart line.
    ///
    /// Returns the number of distinct lines in the cart afterwards.
    pub async fn add_item(&self, product_id: ProductId, quantity: u32) -> Result<usize, CartError> {
        let plan = self.prepare_add(product_id, quantity).await?;
        self.commit_add(plan).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn prepare_add(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<AddPlan, CartError> {
        if quantity == 0 {
            return Err(CartError::invalid("quantity must be greater than zero"));
        }

        let product = self
            .catalog
            .fetch_product(product_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => CartError::ProductNotFound(product_id),
                other => CartError::store("fetch product")(other),
            })?;

        let lines_before = self
            .cart
            .count_lines()
            .await
            .map_err(CartError::store("count cart lines"))?;
        if lines_before >= self.max_unique_items {
            return Err(CartError::TooManyUniqueItems {
                max: self.max_unique_items,
            });
        }

        if quantity > product.stock {
            return Err(CartError::InsufficientStock {
                product: product_id,
                requested: quantity,
                available: product.stock,
            });
        }
        if !(f64::from(quantity) * product.price).is_finite() {
            return Err(CartError::TotalOutOfRange);
        }

        Ok(AddPlan {
            remaining_stock: product.stock - quantity,
            line: CartLineCreate {
                item_id: product.id,
                item_name: product.name,
                unit_price: product.price,
                quantity,
            },
            lines_before,
        })
    }

    #[instrument(skip(self), fields(item_id = %plan.line.item_id))]
    pub(crate) async fn commit_add(&self, plan: AddPlan) -> Result<usize, CartError> {
        let id = plan.line.item_id;
        self.cart
            .insert_line(plan.line)
            .await
            .map_err(CartError::store("insert cart line"))?;

        if let Err(e) = self.catalog.set_stock(id, plan.remaining_stock).await {
            // Undo the insert so the failed add leaves nothing behind.
            if let Err(undo) = self.cart.delete_line(id).await {
                warn!(%id, error = %undo, "Could not remove cart line after failed stock write");
            }
            return Err(CartError::store("reserve stock")(e));
        }

        info!(stock = plan.remaining_stock, "Item added");
        Ok(plan.lines_before + 1)
    }

    /// Removes one line. Reserved stock is not given back.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: ProductId) -> Result<(), CartError> {
        let found = self
            .cart
            .exists_line(item_id)
            .await
            .map_err(CartError::store("check cart line"))?;
        if !found {
            return Err(CartError::ItemNotFound(item_id));
        }
        self.cart
            .delete_line(item_id)
            .await
            .map_err(CartError::store("remove cart line"))
    }

    /// Empties the cart. Reserved stock is not given back.
    #[instrument(skip(self))]
    pub async fn remove_all_items(&self) -> Result<(), CartError> {
        self.cart
            .clear_all()
            .await
            .map_err(CartError::store("remove all cart lines"))
    }

    /// Overwrites the quantity of a line without consulting stock.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, item_id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::invalid("quantity must be greater than zero"));
        }
        let found = self
            .cart
            .exists_line(item_id)
            .await
            .map_err(CartError::store("check cart line"))?;
        if !found {
            return Err(CartError::NothingToUpdate(item_id));
        }
        self.cart
            .update_quantity(item_id, quantity)
            .await
            .map_err(|e| match e {
                StoreError::Rejected(_) => CartError::TotalOutOfRange,
                other => CartError::store("update item quantity")(other),
            })
    }

    /// Lowers a line's unit price and returns the stored result.
    #[instrument(skip(self))]
    pub async fn apply_discount(
        &self,
        discount_type: &str,
        value: f64,
        item_id: ProductId,
    ) -> Result<f64, CartError> {
        if value.is_nan() || value <= 0.0 {
            return Err(CartError::invalid(
                "invalid discount value, must be greater than 0",
            ));
        }

        let applied = match discount_type {
            PERCENTAGE => {
                if value > 100.0 {
                    return Err(CartError::invalid(
                        "invalid discount value, percentage discount cannot exceed 100%",
                    ));
                }
                self.cart.apply_percentage_discount(item_id, value).await
            }
            FLAT => self.cart.apply_flat_discount(item_id, value).await,
            other => return Err(CartError::InvalidDiscountType(other.to_string())),
        };
        applied.map_err(|e| match e {
            StoreError::NotFound(_) => CartError::ItemNotFound(item_id),
            StoreError::Rejected(_) => CartError::TotalOutOfRange,
            other => CartError::store("apply discount")(other),
        })?;

        let line = self
            .cart
            .get_line(item_id)
            .await
            .map_err(CartError::store("read discounted item"))?;
        info!(price = line.unit_price, "Discount applied");
        Ok(line.unit_price)
    }

    /// All lines in store order with their total.
    ///
    /// Fails with [`CartError::TotalOutOfRange`] when the lines sum past `f64`.
    #[instrument(skip(self))]
    pub async fn view_cart(&self) -> Result<CartView, CartError> {
        let lines = self
            .cart
            .list_lines()
            .await
            .map_err(CartError::store("list cart lines"))?;
        let view = CartView::from_lines(lines);
        if !view.total_price.is_finite() {
            return Err(CartError::TotalOutOfRange);
        }
        Ok(view)
    }

    /// Validates every line against the catalog, then empties the cart.
    ///
    /// Returns the cart as it was before it was emptied.
    pub async fn checkout(&self) -> Result<CartView, CartError> {
        let view = self.prepare_checkout().await?;
        self.commit_checkout(view).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn prepare_checkout(&self) -> Result<CartView, CartError> {
        let view = self.view_cart().await?;
        if view.is_empty() {
            return Err(CartError::EmptyCart);
        }

        for line in &view.items {
            let product = self
                .catalog
                .fetch_product(line.item_id)
                .await
                .map_err(|e| match e {
                    StoreError::NotFound(_) => CartError::ProductNotFound(line.item_id),
                    other => CartError::store("fetch product")(other),
                })?;
            if product.stock < line.quantity {
                return Err(CartError::InsufficientStock {
                    product: line.item_id,
                    requested: line.quantity,
                    available: product.stock,
                });
            }
        }
        Ok(view)
    }

    #[instrument(skip_all, fields(lines = view.items.len()))]
    pub(crate) async fn commit_checkout(&self, view: CartView) -> Result<CartView, CartError> {
        self.cart
            .clear_all()
            .await
            .map_err(CartError::store("complete checkout"))?;
        info!(total = view.total_price, "Checkout complete");
        Ok(view)
    }
}
