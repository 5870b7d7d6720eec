use chrono::NaiveDate;
use shared::dates::today;
use shared::money::parse_digits;
use shared::{Expense, ExpenseCategory, ExpensePayload};

use super::{EditableForm, EntityForm};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    /// Shown as `DD/MM/YY`, sent as ISO
    pub date: NaiveDate,
    pub name: String,
    pub item: i64,
    /// Unit price, digits only
    pub price: String,
    pub category: Option<ExpenseCategory>,
    pub total: f64,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            date: today(),
            name: String::new(),
            item: 1,
            price: String::new(),
            category: None,
            total: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseChange {
    Date(NaiveDate),
    Name(String),
    /// Raw input; anything but digits is dropped, so "Rp 21.000" reads as 21000
    Price(String),
    Item(i64),
    IncrementItem,
    DecrementItem,
    Category(Option<ExpenseCategory>),
}

impl ExpenseForm {
    fn unit_price(&self) -> f64 {
        parse_digits(&self.price).unwrap_or(0) as f64
    }

    fn recompute_total(&mut self) {
        self.total = self.unit_price() * self.item as f64;
    }
}

impl EntityForm for ExpenseForm {
    type Record = Expense;
    type Change = ExpenseChange;

    fn apply(&mut self, change: ExpenseChange) -> Option<String> {
        match change {
            ExpenseChange::Date(date) => self.date = date,
            ExpenseChange::Name(name) => self.name = name,
            ExpenseChange::Price(raw) => {
                self.price = raw.chars().filter(char::is_ascii_digit).collect();
            }
            ExpenseChange::Item(item) => self.item = item.max(1),
            ExpenseChange::IncrementItem => self.item += 1,
            ExpenseChange::DecrementItem => self.item = (self.item - 1).max(1),
            ExpenseChange::Category(category) => self.category = category,
        }
        self.recompute_total();
        None
    }

    fn validate(&self) -> Result<ExpensePayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Expense name is required".to_string());
        }
        let category = self.category.ok_or_else(|| "Please select a category".to_string())?;
        if self.item < 1 {
            return Err("Item count must be at least 1".to_string());
        }
        let price = parse_digits(&self.price)
            .filter(|price| *price > 0)
            .ok_or_else(|| "Valid price is required".to_string())? as f64;

        Ok(ExpensePayload {
            name: name.to_string(),
            item: self.item,
            price,
            total_price: price * self.item as f64,
            category,
            date: self.date,
        })
    }
}

impl EditableForm for ExpenseForm {
    fn from_record(expense: &Expense) -> Self {
        let mut form = Self {
            date: expense.date,
            name: expense.name.clone(),
            item: expense.item.max(1),
            price: format!("{:.0}", expense.price.max(0.0)),
            category: Some(expense.category),
            total: 0.0,
        };
        form.recompute_total();
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::calendar::{CalendarState, VisibleMonth};
    use shared::EntityId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = ExpenseForm::default();
        assert_eq!(form.item, 1);
        assert_eq!(form.date, today());
        assert!(form.category.is_none());
    }

    #[test]
    fn test_total_follows_price_and_item() {
        let mut form = ExpenseForm::default();
        form.apply(ExpenseChange::Price("Rp 21.000".into()));
        assert_eq!(form.price, "21000");
        assert_eq!(form.total, 21000.0);

        form.apply(ExpenseChange::Item(3));
        assert_eq!(form.total, 63000.0);

        form.apply(ExpenseChange::DecrementItem);
        form.apply(ExpenseChange::DecrementItem);
        form.apply(ExpenseChange::DecrementItem);
        assert_eq!(form.item, 1);
        assert_eq!(form.total, 21000.0);
    }

    #[test]
    fn test_validation_order() {
        let mut form = ExpenseForm::default();
        assert_eq!(form.validate().unwrap_err(), "Expense name is required");
        form.apply(ExpenseChange::Name("Gas".into()));
        assert_eq!(form.validate().unwrap_err(), "Please select a category");
        form.apply(ExpenseChange::Category(Some(ExpenseCategory::OperatingCost)));
        assert_eq!(form.validate().unwrap_err(), "Valid price is required");
        form.apply(ExpenseChange::Price("0".into()));
        assert_eq!(form.validate().unwrap_err(), "Valid price is required");
        form.apply(ExpenseChange::Price("25000".into()));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_payload_uses_iso_date() {
        let mut form = ExpenseForm::default();
        form.apply(ExpenseChange::Name("Packaging".into()));
        form.apply(ExpenseChange::Category(Some(ExpenseCategory::MaterialCost)));
        form.apply(ExpenseChange::Price("4.500".into()));
        form.apply(ExpenseChange::IncrementItem);
        form.apply(ExpenseChange::Date(date(2025, 3, 5)));

        let payload = form.validate().unwrap();
        assert_eq!(payload.item, 2);
        assert_eq!(payload.total_price, 9000.0);
        assert_eq!(payload.date, date(2025, 3, 5));
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["date"], "2025-03-05");
        assert_eq!(body["category"], "Material Cost");
    }

    #[test]
    fn test_edit_rederives_total() {
        let form = ExpenseForm::from_record(&Expense {
            id: EntityId::from(9),
            name: "Electricity".into(),
            item: 2,
            price: 150000.0,
            total_price: 1.0,
            category: ExpenseCategory::OperatingCost,
            date: date(2025, 1, 31),
        });
        assert_eq!(form.date, date(2025, 1, 31));
        assert_eq!(form.price, "150000");
        assert_eq!(form.total, 300000.0);
    }

    fn electricity(on: NaiveDate) -> Expense {
        Expense {
            id: EntityId::from(4),
            name: "Electricity".into(),
            item: 1,
            price: 90000.0,
            total_price: 90000.0,
            category: ExpenseCategory::OperatingCost,
            date: on,
        }
    }

    #[test]
    fn test_edit_keeps_last_century_date() {
        let form = ExpenseForm::from_record(&electricity(date(1998, 5, 1)));
        let payload = form.validate().unwrap();
        assert_eq!(payload.date, date(1998, 5, 1));
        assert_eq!(serde_json::to_value(&payload).unwrap()["date"], "1998-05-01");
    }

    #[test]
    fn test_calendar_pick_before_2000_is_sent_as_picked() {
        let mut calendar = CalendarState::showing(VisibleMonth::new(1999, 11).unwrap());
        let picked = calendar.pick_date(15).unwrap();

        let mut form = ExpenseForm::from_record(&electricity(date(2025, 1, 2)));
        form.apply(ExpenseChange::Date(picked));

        assert_eq!(serde_json::to_value(form.validate().unwrap()).unwrap()["date"], "1999-12-15");
    }
}
