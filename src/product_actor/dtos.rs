use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

impl ProductPatch {
    pub fn quantity(quantity: u32) -> Self {
        Self { price: None, quantity: Some(quantity) }
    }
}
