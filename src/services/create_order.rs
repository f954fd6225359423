use tracing::{error, info, instrument, warn};

use crate::domain::{CreateOrderRequest, Order, OrderCreate, OrderItem, StockUpdate};
use crate::order_actor::OrderError;
use crate::repository::{CustomerLookup, OrderWriter, ProductLookup, StockUpdater};

/// Validates an order request against customer and product state, decrements
/// stock and writes the order.
///
/// Stock is written before the order. If the order write fails, the stock
/// updates are not rolled back.
#[derive(Clone)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerLookup,
    P: ProductLookup + StockUpdater,
    O: OrderWriter,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self { customers, products, orders }
    }

    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, items = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate customer
        let customer = match self.customers.find_customer_by_id(&request.customer_id).await? {
            Some(customer) => customer,
            None => {
                warn!("Customer not found");
                return Err(OrderError::CustomerNotFound(request.customer_id));
            }
        };
        info!(customer_name = %customer.name, "Customer validation successful");

        // Step 2: Resolve products in one batch, keyed by distinct id
        let mut product_ids: Vec<String> = Vec::with_capacity(request.products.len());
        for item in &request.products {
            if !product_ids.contains(&item.id) {
                product_ids.push(item.id.clone());
            }
        }
        let products = self.products.find_all_products_by_id(&product_ids).await?;
        if products.len() != product_ids.len() {
            warn!(requested = product_ids.len(), found = products.len(), "Product lookup incomplete");
            return Err(OrderError::ProductNotFound);
        }

        // Step 3: Check stock and build line items
        let mut stock_updates = Vec::with_capacity(products.len());
        let mut items = Vec::with_capacity(products.len());
        for product in &products {
            let Some(requested) = request.products.iter().find(|item| item.id == product.id) else {
                warn!(product_id = %product.id, "Lookup returned a product that was not requested");
                return Err(OrderError::ProductNotFound);
            };
            if product.quantity < requested.quantity {
                warn!(
                    product_id = %product.id,
                    available = product.quantity,
                    requested = requested.quantity,
                    "Insufficient stock"
                );
                return Err(OrderError::InsufficientStock {
                    product_name: product.name.clone(),
                    available: product.quantity,
                    requested: requested.quantity,
                });
            }
            stock_updates.push(StockUpdate {
                id: product.id.clone(),
                quantity: product.quantity - requested.quantity,
            });
            items.push(OrderItem {
                product_id: product.id.clone(),
                price: product.price,
                quantity: requested.quantity,
            });
        }

        // Step 4: Decrement stock
        self.products.update_product_quantities(stock_updates.clone()).await?;
        info!(products = stock_updates.len(), "Stock levels updated");

        // Step 5: Write the order
        let customer_id = customer.id.clone();
        match self.orders.create_order(OrderCreate { customer, items }).await {
            Ok(order) => {
                info!(order_id = %order.id, total = %order.total(), "Order created successfully");
                Ok(order)
            }
            Err(e) => {
                error!(
                    error = %e,
                    %customer_id,
                    applied_stock_updates = ?stock_updates,
                    "Order write failed after stock was decremented"
                );
                Err(e.into())
            }
        }
    }
}
