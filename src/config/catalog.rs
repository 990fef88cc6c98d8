use crate::core::store::{default_phones, Store};
use crate::domain::model::Phone;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_price, validate_unique, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CITIES: [&str; 2] = ["Город A", "Город B"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogConfig {
    pub stores: Vec<StoreConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    pub city: String,
    pub phones: Vec<Phone>,
}

impl CatalogConfig {
    /// Loads a catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn into_stores(self) -> Vec<Store> {
        self.stores
            .into_iter()
            .map(|store| Store::new(store.city, store.phones))
            .collect()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stores: DEFAULT_CITIES
                .iter()
                .map(|city| StoreConfig {
                    city: city.to_string(),
                    phones: default_phones(),
                })
                .collect(),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("stores", &self.stores)?;

        for (i, store) in self.stores.iter().enumerate() {
            validate_non_empty_string(&format!("stores[{}].city", i), &store.city)?;
            validate_non_empty_list(&format!("stores[{}].phones", i), &store.phones)?;

            for (j, phone) in store.phones.iter().enumerate() {
                validate_non_empty_string(
                    &format!("stores[{}].phones[{}].model", i, j),
                    phone.model(),
                )?;
                validate_price(&format!("stores[{}].phones[{}].price", i, j), phone.price())?;
            }

            validate_unique(
                &format!("stores[{}].phones.model", i),
                store.phones.iter().map(Phone::model),
            )?;
        }

        Ok(())
    }
}
