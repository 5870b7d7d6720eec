use shared::money::parse_amount;
use shared::{Material, MaterialPayload, MeasurementType, WeightUnit};

use super::{EditableForm, EntityForm};

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialForm {
    pub material_name: String,
    pub price_per_unit: String,
    pub weight: String,
    pub measurement: MeasurementType,
    pub weight_unit: WeightUnit,
}

impl Default for MaterialForm {
    fn default() -> Self {
        Self {
            material_name: String::new(),
            price_per_unit: String::new(),
            weight: String::new(),
            measurement: MeasurementType::Weight,
            weight_unit: WeightUnit::Kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialChange {
    Name(String),
    PricePerUnit(String),
    Weight(String),
    /// Also resets the unit to the measurement's base unit
    Measurement(MeasurementType),
    Unit(WeightUnit),
}

impl EntityForm for MaterialForm {
    type Record = Material;
    type Change = MaterialChange;

    fn apply(&mut self, change: MaterialChange) -> Option<String> {
        match change {
            MaterialChange::Name(name) => self.material_name = name,
            MaterialChange::PricePerUnit(price) => self.price_per_unit = price,
            MaterialChange::Weight(weight) => self.weight = weight,
            MaterialChange::Measurement(measurement) => {
                self.measurement = measurement;
                self.weight_unit = measurement.default_unit();
            }
            MaterialChange::Unit(unit) => {
                self.weight_unit = unit;
                self.measurement = unit.measurement();
            }
        }
        None
    }

    fn validate(&self) -> Result<MaterialPayload, String> {
        let material_name = self.material_name.trim();
        if material_name.is_empty() {
            return Err("Material name is required".to_string());
        }
        let price_per_unit = parse_amount(&self.price_per_unit)
            .filter(|price| *price > 0.0)
            .ok_or_else(|| "Valid price per unit is required".to_string())?;
        let weight = parse_amount(&self.weight)
            .filter(|weight| *weight > 0.0)
            .ok_or_else(|| "Valid weight is required".to_string())?;

        Ok(MaterialPayload {
            material_name: material_name.to_string(),
            price_per_unit,
            weight,
            weight_unit: self.weight_unit,
        })
    }
}

impl EditableForm for MaterialForm {
    fn from_record(material: &Material) -> Self {
        Self {
            material_name: material.material_name.clone(),
            price_per_unit: material.price_per_unit.to_string(),
            weight: material.weight.to_string(),
            measurement: material.weight_unit.measurement(),
            weight_unit: material.weight_unit,
        }
    }
}
