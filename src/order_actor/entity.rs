use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = (); // Orders are immutable once written

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from a validated customer and its line items.
    ///
    /// # Notes
    /// `created_at` is stamped here, when the order is actually stored.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            customer: params.customer,
            items: params.items,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
