use shared::money::parse_amount;
use shared::{EntityId, Material, Product, ProductMaterialPayload, ProductPayload, WeightUnit};

use super::{EditableForm, EntityForm};
use crate::services::upload::{ProductSubmission, Upload};

/// A material already attached to the product being edited
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLine {
    pub material_id: EntityId,
    pub material_name: String,
    pub amount_per_product: f64,
    pub weight_unit: WeightUnit,
}

/// The "add material" row under the list of attached materials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialDraft {
    /// Selected option value; the material id as text
    pub material_id: String,
    pub amount: String,
    pub weight_unit: Option<WeightUnit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_name: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub materials: Vec<MaterialLine>,
    pub draft: MaterialDraft,
    /// New photo to upload; `None` keeps whatever the backend has
    pub image: Option<Upload>,
    /// URL of the photo the product already has
    pub current_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductChange {
    Name(String),
    Price(String),
    Stock(String),
    Description(String),
    DraftMaterial(String),
    DraftAmount(String),
    DraftUnit(Option<WeightUnit>),
    /// Move the draft row into the list, checked against the known materials
    AddMaterial(Vec<Material>),
    RemoveMaterial(EntityId),
    Image(Option<Upload>),
}

impl ProductForm {
    fn add_draft(&mut self, available: &[Material]) -> Result<(), String> {
        let draft = &self.draft;
        let amount = parse_amount(&draft.amount).filter(|amount| *amount > 0.0);
        let (Some(amount), Some(weight_unit)) = (amount, draft.weight_unit) else {
            return Err("All material fields are required".to_string());
        };
        if draft.material_id.trim().is_empty() {
            return Err("All material fields are required".to_string());
        }
        let material = available
            .iter()
            .find(|material| material.id.to_string() == draft.material_id.trim())
            .ok_or_else(|| "Invalid material selected".to_string())?;
        if self.materials.iter().any(|line| line.material_id == material.id) {
            return Err("Material already added".to_string());
        }

        self.materials.push(MaterialLine {
            material_id: material.id.clone(),
            material_name: material.material_name.clone(),
            amount_per_product: amount,
            weight_unit,
        });
        self.draft = MaterialDraft::default();
        Ok(())
    }
}

impl EntityForm for ProductForm {
    type Record = Product;
    type Change = ProductChange;

    fn apply(&mut self, change: ProductChange) -> Option<String> {
        match change {
            ProductChange::Name(name) => self.product_name = name,
            ProductChange::Price(price) => self.price = price,
            ProductChange::Stock(stock) => self.stock = stock,
            ProductChange::Description(description) => self.description = description,
            ProductChange::DraftMaterial(id) => self.draft.material_id = id,
            ProductChange::DraftAmount(amount) => self.draft.amount = amount,
            ProductChange::DraftUnit(unit) => self.draft.weight_unit = unit,
            ProductChange::AddMaterial(available) => return self.add_draft(&available).err(),
            ProductChange::RemoveMaterial(id) => self.materials.retain(|line| line.material_id != id),
            ProductChange::Image(image) => self.image = image,
        }
        None
    }

    fn validate(&self) -> Result<ProductSubmission, String> {
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err("Product name is required".to_string());
        }
        let price = parse_amount(&self.price)
            .filter(|price| *price > 0.0)
            .ok_or_else(|| "Valid price is required".to_string())?;
        let stock = self
            .stock
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|stock| *stock >= 0)
            .ok_or_else(|| "Stock quantity cannot be negative".to_string())?;
        if self.materials.is_empty() {
            return Err("At least one material is required".to_string());
        }
        let description = self.description.trim();

        let payload = ProductPayload {
            product_name: product_name.to_string(),
            price,
            stock,
            description: (!description.is_empty()).then(|| description.to_string()),
            materials: self
                .materials
                .iter()
                .map(|line| ProductMaterialPayload {
                    material_id: line.material_id.clone(),
                    amount_per_product: line.amount_per_product,
                    weight_unit: line.weight_unit,
                })
                .collect(),
        };
        Ok(ProductSubmission {
            payload,
            image: self.image.clone(),
        })
    }
}

impl EditableForm for ProductForm {
    fn from_record(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            description: product.description.clone().unwrap_or_default(),
            materials: product
                .materials
                .iter()
                .map(|material| MaterialLine {
                    material_id: material.material_id.clone(),
                    material_name: material
                        .material_name
                        .clone()
                        .unwrap_or_else(|| format!("Material #{}", material.material_id)),
                    amount_per_product: material.amount_per_product,
                    weight_unit: material.weight_unit,
                })
                .collect(),
            draft: MaterialDraft::default(),
            image: None,
            current_image: product.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductMaterial;

    fn catalogue() -> Vec<Material> {
        vec![
            Material {
                id: EntityId::from(1),
                material_name: "Flour".into(),
                price_per_unit: 12000.0,
                weight: 1.0,
                weight_unit: WeightUnit::Kg,
            },
            Material {
                id: EntityId::from(2),
                material_name: "Milk".into(),
                price_per_unit: 18000.0,
                weight: 1.0,
                weight_unit: WeightUnit::L,
            },
        ]
    }

    fn add(form: &mut ProductForm, id: &str, amount: &str, unit: Option<WeightUnit>) -> Option<String> {
        form.apply(ProductChange::DraftMaterial(id.into()));
        form.apply(ProductChange::DraftAmount(amount.into()));
        form.apply(ProductChange::DraftUnit(unit));
        form.apply(ProductChange::AddMaterial(catalogue()))
    }

    #[test]
    fn test_material_rows() {
        let mut form = ProductForm::default();
        assert_eq!(add(&mut form, "1", "", Some(WeightUnit::G)).as_deref(), Some("All material fields are required"));
        assert_eq!(add(&mut form, "9", "200", Some(WeightUnit::G)).as_deref(), Some("Invalid material selected"));
        assert_eq!(add(&mut form, "1", "200", Some(WeightUnit::G)), None);
        assert_eq!(form.materials[0].material_name, "Flour");
        assert_eq!(form.draft, MaterialDraft::default());
        assert_eq!(add(&mut form, "1", "50", Some(WeightUnit::G)).as_deref(), Some("Material already added"));

        form.apply(ProductChange::RemoveMaterial(EntityId::from(1)));
        assert!(form.materials.is_empty());
    }

    #[test]
    fn test_validation_order() {
        let mut form = ProductForm::default();
        assert_eq!(form.validate().unwrap_err(), "Product name is required");
        form.apply(ProductChange::Name("Donut".into()));
        assert_eq!(form.validate().unwrap_err(), "Valid price is required");
        form.apply(ProductChange::Price("8000".into()));
        form.apply(ProductChange::Stock("-1".into()));
        assert_eq!(form.validate().unwrap_err(), "Stock quantity cannot be negative");
        form.apply(ProductChange::Stock("1.5".into()));
        assert_eq!(form.validate().unwrap_err(), "Stock quantity cannot be negative");
        form.apply(ProductChange::Stock("0".into()));
        assert_eq!(form.validate().unwrap_err(), "At least one material is required");
    }

    #[test]
    fn test_payload() {
        let mut form = ProductForm::default();
        form.apply(ProductChange::Name(" Donut ".into()));
        form.apply(ProductChange::Price("8000".into()));
        form.apply(ProductChange::Stock("24".into()));
        add(&mut form, "2", "0.1", Some(WeightUnit::L));

        let submission = form.validate().unwrap();
        assert!(submission.image.is_none());
        let payload = submission.payload;
        assert_eq!(payload.product_name, "Donut");
        assert_eq!(payload.stock, 24);
        assert_eq!(payload.description, None);
        assert_eq!(payload.materials[0].material_id, EntityId::from(2));
        assert_eq!(payload.materials[0].amount_per_product, 0.1);
    }

    #[test]
    fn test_picked_image_is_submitted() {
        let mut form = ProductForm::default();
        form.apply(ProductChange::Name("Donut".into()));
        form.apply(ProductChange::Price("8000".into()));
        form.apply(ProductChange::Stock("2".into()));
        add(&mut form, "1", "100", Some(WeightUnit::G));
        form.apply(ProductChange::Image(Some(Upload::detached("donut.png"))));

        let submission = form.validate().unwrap();
        assert_eq!(submission.image.as_ref().map(Upload::file_name), Some("donut.png"));
        assert!(submission.multipart().is_some());

        form.apply(ProductChange::Image(None));
        assert!(form.validate().unwrap().multipart().is_none());
    }

    #[test]
    fn test_edit_keeps_materials() {
        let form = ProductForm::from_record(&Product {
            id: EntityId::from(5),
            product_name: "Bread".into(),
            price: 15000.0,
            stock: 3,
            description: Some("Sourdough".into()),
            image: Some("https://cdn.test/bread.jpg".into()),
            materials: vec![ProductMaterial {
                material_id: EntityId::from(1),
                material_name: None,
                amount_per_product: 0.5,
                weight_unit: WeightUnit::Kg,
            }],
        });
        assert_eq!(form.stock, "3");
        assert_eq!(form.materials[0].material_name, "Material #1");
        assert_eq!(form.current_image.as_deref(), Some("https://cdn.test/bread.jpg"));
        assert!(form.validate().unwrap().image.is_none());
    }
}
