use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

pub mod calendar;
pub mod dates;
pub mod money;
pub mod wire;

pub use calendar::{CalendarCell, CalendarGrid, CalendarState, VisibleMonth};

/// Backend-assigned record identifier.
///
/// The backend hands out numeric keys for some tables and opaque strings for
/// others, so both shapes are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

/// Standard response wrapper used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "envelope_success_default")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn envelope_success_default() -> bool {
    true
}

/// Body of a 422 response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationFailure {
    /// Every field message flattened into one line, falling back to the
    /// top-level message when the backend sent no field errors.
    pub fn joined(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .errors
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        if messages.is_empty() {
            self.message.clone()
        } else {
            Some(messages.join(", "))
        }
    }
}

/// Unit a material is bought and consumed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    G,
    L,
    Ml,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [WeightUnit::Kg, WeightUnit::G, WeightUnit::L, WeightUnit::Ml];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::G => "g",
            WeightUnit::L => "l",
            WeightUnit::Ml => "ml",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == raw.trim())
    }

    /// Litres and millilitres are volumes; everything else is weighed.
    pub fn measurement(&self) -> MeasurementType {
        match self {
            WeightUnit::L | WeightUnit::Ml => MeasurementType::Volume,
            WeightUnit::Kg | WeightUnit::G => MeasurementType::Weight,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived from a material's unit, never stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasurementType {
    #[default]
    Weight,
    Volume,
}

impl MeasurementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementType::Weight => "weight",
            MeasurementType::Volume => "volume",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "weight" => Some(MeasurementType::Weight),
            "volume" => Some(MeasurementType::Volume),
            _ => None,
        }
    }

    /// Unit selected when the user switches to this measurement type
    pub fn default_unit(&self) -> WeightUnit {
        match self {
            MeasurementType::Weight => WeightUnit::Kg,
            MeasurementType::Volume => WeightUnit::L,
        }
    }

    pub fn units(&self) -> [WeightUnit; 2] {
        match self {
            MeasurementType::Weight => [WeightUnit::Kg, WeightUnit::G],
            MeasurementType::Volume => [WeightUnit::L, WeightUnit::Ml],
        }
    }
}

/// A raw material that products are made from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: EntityId,
    pub material_name: String,
    /// Purchase price for one `weight` of this material
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub price_per_unit: f64,
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

/// Request body for creating or updating a material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPayload {
    pub material_name: String,
    pub price_per_unit: f64,
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

/// How much of a material goes into one unit of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMaterial {
    pub material_id: EntityId,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub amount_per_product: f64,
    pub weight_unit: WeightUnit,
}

/// A sellable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub product_name: String,
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub stock: i64,
    #[serde(default)]
    pub description: Option<String>,
    /// Public URL of the product photo, if one was uploaded
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub materials: Vec<ProductMaterial>,
}

/// Material line inside a product request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMaterialPayload {
    pub material_id: EntityId,
    pub amount_per_product: f64,
    pub weight_unit: WeightUnit,
}

impl From<&ProductMaterial> for ProductMaterialPayload {
    fn from(material: &ProductMaterial) -> Self {
        Self {
            material_id: material.material_id.clone(),
            amount_per_product: material.amount_per_product,
            weight_unit: material.weight_unit,
        }
    }
}

/// Request body for creating or updating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub materials: Vec<ProductMaterialPayload>,
}

impl ProductPayload {
    /// Full update for `product` that only changes its stock level.
    ///
    /// The backend's update endpoint validates the whole record, so every
    /// other field is sent back as it was fetched.
    pub fn restock(product: &Product, stock: i64) -> Self {
        Self {
            product_name: product.product_name.clone(),
            price: product.price,
            stock,
            description: product.description.clone(),
            materials: product.materials.iter().map(ProductMaterialPayload::from).collect(),
        }
    }

    /// The same request as flat multipart fields, for uploads that carry an
    /// image. Material lines use bracket keys (`materials[0][material_id]`).
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("product_name".to_string(), self.product_name.clone()),
            ("price".to_string(), self.price.to_string()),
            ("stock".to_string(), self.stock.to_string()),
        ];
        if let Some(description) = &self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        for (index, material) in self.materials.iter().enumerate() {
            fields.push((format!("materials[{}][material_id]", index), material.material_id.to_string()));
            fields.push((
                format!("materials[{}][amount_per_product]", index),
                material.amount_per_product.to_string(),
            ));
            fields.push((format!("materials[{}][weight_unit]", index), material.weight_unit.as_str().to_string()));
        }
        fields
    }
}

/// Expense bucket shown in the category dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Operating Cost")]
    OperatingCost,
    #[serde(rename = "Material Cost")]
    MaterialCost,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 2] = [ExpenseCategory::OperatingCost, ExpenseCategory::MaterialCost];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::OperatingCost => "Operating Cost",
            ExpenseCategory::MaterialCost => "Material Cost",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == raw.trim())
    }
}

/// A recorded business expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    pub name: String,
    /// Number of items bought
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub item: i64,
    /// Price of a single item
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub total_price: f64,
    pub category: ExpenseCategory,
    #[serde(with = "dates::wire_date")]
    pub date: NaiveDate,
}

/// Request body for creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub name: String,
    pub item: i64,
    pub price: f64,
    pub total_price: f64,
    pub category: ExpenseCategory,
    #[serde(with = "dates::wire_date")]
    pub date: NaiveDate,
}

/// Product summary embedded in a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleProduct {
    pub product_name: String,
    #[serde(default, deserialize_with = "wire::lenient_f64_opt")]
    pub price: Option<f64>,
}

/// A completed sale of one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: EntityId,
    pub product_id: EntityId,
    #[serde(default)]
    pub product: Option<SaleProduct>,
    #[serde(deserialize_with = "wire::lenient_i64")]
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::lenient_f64_opt")]
    pub total_price: Option<f64>,
    #[serde(with = "dates::wire_date")]
    pub date: NaiveDate,
}

impl Sale {
    pub fn product_name(&self) -> &str {
        self.product
            .as_ref()
            .map(|product| product.product_name.as_str())
            .unwrap_or("Unknown product")
    }

    /// Total reported by the backend, or unit price × quantity when only the
    /// embedded product carries a price.
    pub fn total(&self) -> Option<f64> {
        self.total_price.or_else(|| {
            self.product
                .as_ref()
                .and_then(|product| product.price)
                .map(|price| price * self.quantity as f64)
        })
    }
}

/// Request body for recording a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    pub product_id: EntityId,
    pub quantity: i64,
    pub description: Option<String>,
    #[serde(with = "dates::wire_date")]
    pub date: NaiveDate,
}

/// Cash balance of the business
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(deserialize_with = "wire::lenient_f64")]
    pub balance: f64,
}

/// Credentials for `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` answers with the token at the top level, not in `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// New account details for `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /reset-password`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Owner profile; kept on the client only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub about: String,
}
