use crate::domain::model::{Phone, Purchase, RepairOutcome, SaleTally};
use crate::utils::error::StoreError;

/// The only answer that books the repair service.
pub const AFFIRMATIVE_ANSWER: &str = "да";

pub fn default_phones() -> Vec<Phone> {
    vec![
        Phone::smartphone("iPhone 14", 999.99),
        Phone::smartphone("Samsung Galaxy S22", 899.99),
        Phone::smartphone("Google Pixel 7", 699.99),
    ]
}

/// Per-model sales figures, iterated in order of first sale.
#[derive(Debug, Clone, Default)]
pub struct SalesStatistics {
    entries: Vec<(String, SaleTally)>,
}

impl SalesStatistics {
    fn record(&mut self, model: &str, price: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == model) {
            Some((_, tally)) => tally.record(price),
            None => {
                let mut tally = SaleTally::default();
                tally.record(price);
                self.entries.push((model.to_string(), tally));
            }
        }
    }

    pub fn get(&self, model: &str) -> Option<&SaleTally> {
        self.entries
            .iter()
            .find(|(name, _)| name == model)
            .map(|(_, tally)| tally)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SaleTally)> {
        self.entries.iter().map(|(name, tally)| (name.as_str(), tally))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    city: String,
    phones: Vec<Phone>,
    sales: SalesStatistics,
    repair_used: bool,
}

impl Store {
    pub fn new(city: impl Into<String>, phones: Vec<Phone>) -> Self {
        Self {
            city: city.into(),
            phones,
            sales: SalesStatistics::default(),
            repair_used: false,
        }
    }

    pub fn with_default_catalog(city: impl Into<String>) -> Self {
        Self::new(city, default_phones())
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn statistics(&self) -> &SalesStatistics {
        &self.sales
    }

    pub fn repair_used(&self) -> bool {
        self.repair_used
    }

    pub fn find_phone(&self, model: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.model() == model)
    }

    /// Sells one unit of `model` at its current price. Stock is never depleted.
    pub fn buy_phone(&mut self, model: &str) -> Result<Purchase, StoreError> {
        let phone = self
            .find_phone(model)
            .ok_or_else(|| StoreError::PhoneNotFound {
                model: model.to_string(),
            })?;

        let purchase = Purchase {
            model: phone.model().to_string(),
            price: phone.price(),
        };
        self.sales.record(&purchase.model, purchase.price);

        tracing::debug!(
            "🛒 {} sold {} for {}",
            self.city,
            purchase.model,
            purchase.price
        );
        Ok(purchase)
    }

    /// Applies the customer's answer to the repair offer. Only an exact
    /// affirmative consumes the service; it can be consumed once.
    pub fn repair_phone(&mut self, answer: &str) -> Result<RepairOutcome, StoreError> {
        if self.repair_used {
            return Err(StoreError::RepairAlreadyUsed);
        }

        if answer == AFFIRMATIVE_ANSWER {
            self.repair_used = true;
            tracing::debug!("🔧 {} repair service consumed", self.city);
            Ok(RepairOutcome::Repaired)
        } else {
            Ok(RepairOutcome::Declined)
        }
    }

    pub fn set_price(&mut self, model: &str, price: f64) -> Result<(), StoreError> {
        let phone = self
            .phones
            .iter_mut()
            .find(|phone| phone.model() == model)
            .ok_or_else(|| StoreError::PhoneNotFound {
                model: model.to_string(),
            })?;
        phone.set_price(price);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_same_model_twice() {
        let mut store = Store::with_default_catalog("Город A");

        store.buy_phone("iPhone 14").unwrap();
        let purchase = store.buy_phone("iPhone 14").unwrap();

        assert_eq!(purchase.price, 999.99);
        let tally = store.statistics().get("iPhone 14").unwrap();
        assert_eq!(tally.count, 2);
        assert_eq!(tally.total, 1999.98);
    }

    #[test]
    fn test_unknown_model_leaves_statistics_untouched() {
        let mut store = Store::with_default_catalog("Город A");
        store.buy_phone("Google Pixel 7").unwrap();

        let err = store.buy_phone("Nonexistent Model").unwrap_err();

        assert_eq!(
            err,
            StoreError::PhoneNotFound {
                model: "Nonexistent Model".to_string()
            }
        );
        assert_eq!(store.statistics().len(), 1);
        assert_eq!(store.statistics().get("Google Pixel 7").unwrap().count, 1);
        assert!(store.statistics().get("Nonexistent Model").is_none());
    }

    #[test]
    fn test_model_lookup_is_case_sensitive() {
        let mut store = Store::with_default_catalog("Город A");

        assert!(store.buy_phone("iphone 14").is_err());
        assert!(store.buy_phone("iPhone 14 ").is_err());
        assert!(store.statistics().is_empty());
    }

    #[test]
    fn test_statistics_keep_first_sale_order() {
        let mut store = Store::with_default_catalog("Город B");
        store.buy_phone("Google Pixel 7").unwrap();
        store.buy_phone("iPhone 14").unwrap();
        store.buy_phone("Google Pixel 7").unwrap();

        let models: Vec<&str> = store.statistics().iter().map(|(model, _)| model).collect();
        assert_eq!(models, vec!["Google Pixel 7", "iPhone 14"]);
    }

    #[test]
    fn test_price_is_read_at_purchase_time() {
        let mut store = Store::with_default_catalog("Город A");
        store.buy_phone("Samsung Galaxy S22").unwrap();
        store.set_price("Samsung Galaxy S22", 100.0).unwrap();
        store.buy_phone("Samsung Galaxy S22").unwrap();

        let tally = store.statistics().get("Samsung Galaxy S22").unwrap();
        assert_eq!(tally.count, 2);
        assert_eq!(tally.total, 899.99 + 100.0);
    }

    #[test]
    fn test_repair_is_consumed_once() {
        let mut store = Store::with_default_catalog("Город A");

        assert_eq!(store.repair_phone("да").unwrap(), RepairOutcome::Repaired);
        assert!(store.repair_used());
        assert_eq!(
            store.repair_phone("да").unwrap_err(),
            StoreError::RepairAlreadyUsed
        );
        assert!(store.repair_used());
    }

    #[test]
    fn test_declined_repair_can_be_retried() {
        let mut store = Store::with_default_catalog("Город A");

        assert_eq!(store.repair_phone("нет").unwrap(), RepairOutcome::Declined);
        assert_eq!(store.repair_phone("Да").unwrap(), RepairOutcome::Declined);
        assert_eq!(store.repair_phone("").unwrap(), RepairOutcome::Declined);
        assert!(!store.repair_used());

        assert_eq!(store.repair_phone("да").unwrap(), RepairOutcome::Repaired);
    }

    #[test]
    fn test_stores_do_not_share_state() {
        let mut first = Store::with_default_catalog("Город A");
        let second = Store::with_default_catalog("Город B");

        first.buy_phone("iPhone 14").unwrap();
        first.repair_phone("да").unwrap();

        assert!(second.statistics().is_empty());
        assert!(!second.repair_used());
    }
}
