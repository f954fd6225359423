use crate::actor_framework::Entity;
use crate::domain::{Customer, CustomerCreate};

impl Entity for Customer {
    type Id = String;
    type CreateParams = CustomerCreate;
    type Patch = (); // Customers are read-only once registered

    fn id(&self) -> &String { &self.id }

    /// Creates a new Customer from registration parameters.
    ///
    /// # Errors
    /// Rejects a blank name or an email address without an `@`.
    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err("Customer name must not be empty".to_string());
        }
        if !params.email.contains('@') {
            return Err(format!("Invalid email address: {}", params.email));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: params.email,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
