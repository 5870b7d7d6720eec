use chrono::NaiveDate;
use shared::dates::today;
use shared::{Product, Sale, SalePayload};

use super::EntityForm;

/// Sales are recorded once and never edited, so there is no `EditableForm`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    /// Snapshot of the chosen product, for its price and stock
    pub product: Option<Product>,
    pub quantity: i64,
    pub description: String,
    pub date: NaiveDate,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self {
            product: None,
            quantity: 1,
            description: String::new(),
            date: today(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaleChange {
    /// Picking a different product starts the quantity over at 1
    Product(Option<Product>),
    /// Typed quantity; clamped into `0..=stock`
    Quantity(i64),
    /// Stepper buttons; never below 1 or above stock
    Step(i64),
    Description(String),
    Date(NaiveDate),
}

impl SaleForm {
    fn stock(&self) -> Option<i64> {
        self.product.as_ref().map(|product| product.stock)
    }

    pub fn total(&self) -> f64 {
        self.product
            .as_ref()
            .map(|product| product.price * self.quantity as f64)
            .unwrap_or(0.0)
    }
}

fn over_stock(stock: i64) -> String {
    format!("Quantity cannot exceed available stock ({}).", stock)
}

impl EntityForm for SaleForm {
    type Record = Sale;
    type Change = SaleChange;

    fn apply(&mut self, change: SaleChange) -> Option<String> {
        match change {
            SaleChange::Product(product) => {
                self.product = product;
                self.quantity = 1;
            }
            SaleChange::Quantity(quantity) => {
                if let Some(stock) = self.stock() {
                    if quantity > stock {
                        self.quantity = stock.max(0);
                        return Some(over_stock(stock));
                    }
                }
                if quantity < 1 {
                    self.quantity = 0;
                    return Some("Quantity must be at least 1.".to_string());
                }
                self.quantity = quantity;
            }
            SaleChange::Step(delta) => {
                let wanted = (self.quantity + delta).max(1);
                match self.stock() {
                    Some(stock) if wanted > stock => {
                        self.quantity = stock.max(0);
                        return Some(over_stock(stock));
                    }
                    _ => self.quantity = wanted,
                }
            }
            SaleChange::Description(description) => self.description = description,
            SaleChange::Date(date) => self.date = date,
        }
        None
    }

    fn validate(&self) -> Result<SalePayload, String> {
        let product = self
            .product
            .as_ref()
            .ok_or_else(|| "Please select a product.".to_string())?;
        if self.quantity < 1 {
            return Err("Quantity must be at least 1.".to_string());
        }
        if self.quantity > product.stock {
            return Err(over_stock(product.stock));
        }
        let description = self.description.trim();

        Ok(SalePayload {
            product_id: product.id.clone(),
            quantity: self.quantity,
            description: (!description.is_empty()).then(|| description.to_string()),
            date: self.date,
        })
    }
}
