use shared::{Product, ProductPayload};

use super::{EditableForm, EntityForm};
use crate::services::upload::ProductSubmission;

/// "Add stock" dialog for one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockForm {
    pub product: Option<Product>,
    pub amount: String,
}

impl StockForm {
    /// Stock level after the addition, if the amount is usable
    pub fn new_stock(&self) -> Option<i64> {
        let product = self.product.as_ref()?;
        let added = self.amount.parse::<i64>().ok().filter(|added| *added > 0)?;
        product.stock.checked_add(added)
    }
}

impl EntityForm for StockForm {
    type Record = Product;
    /// The amount as typed; input that is not a whole number is ignored
    type Change = String;

    fn apply(&mut self, amount: String) -> Option<String> {
        let amount = amount.trim();
        if amount.chars().all(|c| c.is_ascii_digit()) {
            self.amount = amount.to_string();
        }
        None
    }

    fn validate(&self) -> Result<ProductSubmission, String> {
        let product = self
            .product
            .as_ref()
            .ok_or_else(|| "No product selected".to_string())?;
        let stock = self
            .new_stock()
            .ok_or_else(|| "Please enter a valid positive number to add to stock".to_string())?;
        Ok(ProductSubmission::without_image(ProductPayload::restock(product, stock)))
    }
}

impl EditableForm for StockForm {
    fn from_record(product: &Product) -> Self {
        Self {
            product: Some(product.clone()),
            amount: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EntityId, ProductMaterial, WeightUnit};

    fn bread() -> Product {
        Product {
            id: EntityId::from(5),
            product_name: "Bread".into(),
            price: 15000.0,
            stock: 7,
            description: None,
            image: None,
            materials: vec![ProductMaterial {
                material_id: EntityId::from(1),
                material_name: Some("Flour".into()),
                amount_per_product: 0.5,
                weight_unit: WeightUnit::Kg,
            }],
        }
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let mut form = StockForm::from_record(&bread());
        form.apply("12".into());
        form.apply("12a".into());
        form.apply("-3".into());
        assert_eq!(form.amount, "12");
    }

    #[test]
    fn test_adds_to_current_stock() {
        let mut form = StockForm::from_record(&bread());
        form.apply("5".into());
        let submission = form.validate().unwrap();
        assert!(submission.multipart().is_none());
        let payload = submission.payload;
        assert_eq!(payload.stock, 12);
        assert_eq!(payload.product_name, "Bread");
        assert_eq!(payload.materials.len(), 1);
    }

    #[test]
    fn test_zero_or_empty_is_rejected() {
        let mut form = StockForm::from_record(&bread());
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter a valid positive number to add to stock"
        );
        form.apply("0".into());
        assert!(form.validate().is_err());
    }
}
