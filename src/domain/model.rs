use serde::Deserialize;

/// Category of a catalog item. Smartphones are the only kind sold today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    #[default]
    Smartphone,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phone {
    model: String,
    price: f64,
    #[serde(default)]
    kind: PhoneKind,
}

impl Phone {
    pub fn new(kind: PhoneKind, model: impl Into<String>, price: f64) -> Self {
        Self {
            model: model.into(),
            price,
            kind,
        }
    }

    pub fn smartphone(model: impl Into<String>, price: f64) -> Self {
        Self::new(PhoneKind::Smartphone, model, price)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }
}

/// Running sales figures for one model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SaleTally {
    pub count: u32,
    pub total: f64,
}

impl SaleTally {
    pub fn record(&mut self, price: f64) {
        self.count += 1;
        self.total += price;
    }
}

/// A completed purchase, priced at the moment of sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub model: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    Repaired,
    Declined,
}
