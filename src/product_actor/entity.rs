use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};
use super::dtos::ProductPatch;

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a blank name or a negative price.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        if params.price < Decimal::ZERO {
            return Err(format!("Product price must not be negative: {}", params.price));
        }
        Ok(Self::new(id, name, params.price, params.quantity))
    }

    /// Updates the product's price and/or stock quantity.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if price < Decimal::ZERO {
                return Err(format!("Product price must not be negative: {}", price));
            }
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }
}
