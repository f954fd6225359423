use anyhow::Context;
use rust_decimal_macros::dec;
use tracing::{error, info, Instrument};

use order_service::{
    setup_tracing, AppConfig, CreateOrderRequest, CustomerCreate, OrderSystem, ProductCreate,
    RequestedItem,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    // Setup tracing once for the entire application
    setup_tracing(config.log_format);

    info!("Starting application with complete order system");

    let system = OrderSystem::new(&config);

    let span = tracing::info_span!("catalog_setup");
    let (customer, mouse, keyboard) = async {
        let customer = system
            .customer_client
            .create_customer(CustomerCreate::new("Alice", "alice@example.com"))
            .await?;
        let mouse = system
            .product_client
            .create_product(ProductCreate::new("Mouse", dec!(10), 5))
            .await?;
        let keyboard = system
            .product_client
            .create_product(ProductCreate::new("Keyboard", dec!(49.90), 1))
            .await?;
        anyhow::Ok((customer, mouse, keyboard))
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer.id, "Catalog ready");

    let orders = [
        // Fits in stock
        vec![RequestedItem::new(mouse.id.clone(), 3), RequestedItem::new(keyboard.id.clone(), 1)],
        // Keyboard is now sold out
        vec![RequestedItem::new(keyboard.id.clone(), 1)],
    ];

    for products in orders {
        let request = CreateOrderRequest {
            customer_id: customer.id.clone(),
            products,
        };
        let span = tracing::info_span!("order_processing");
        match system.create_order(request).instrument(span).await {
            Ok(order) => info!(order_id = %order.id, total = %order.total(), "Order processed successfully"),
            Err(e) if e.is_validation() => error!(error = %e, "Order rejected"),
            Err(e) => return Err(e.into()),
        }
    }

    let remaining = system.product_client.check_stock(mouse.id.clone()).await?;
    info!(product_id = %mouse.id, remaining, "Stock after orders");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
