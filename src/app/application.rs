use crate::app::messages;
use crate::app::store_menu::{parse_selection, store_menu, MenuExit};
use crate::config::catalog::CatalogConfig;
use crate::core::store::Store;
use crate::domain::ports::Console;
use crate::utils::error::{Result, StoreError};

/// Owns the store list for the whole session and drives the top-level menu.
pub struct Application {
    stores: Vec<Store>,
}

impl Application {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn greet_user<C: Console>(&self, console: &mut C) -> Result<()> {
        console.write_line(messages::GREETING)
    }

    pub fn show_stores<C: Console>(&self, console: &mut C) -> Result<()> {
        console.write_line(messages::STORES_HEADER)?;
        for (index, store) in self.stores.iter().enumerate() {
            console.write_line(&messages::store_entry(index + 1, store.city()))?;
        }
        Ok(())
    }

    /// Main loop. Returns when the user picks `0` or input is exhausted.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        tracing::info!("🚀 Session started with {} stores", self.stores.len());
        self.greet_user(console)?;

        loop {
            self.show_stores(console)?;
            console.write_line(messages::STORE_PROMPT)?;

            let Some(line) = console.read_line()? else {
                tracing::info!("👋 Input closed, ending session");
                return Ok(());
            };

            match parse_selection(&line) {
                Some(0) => {
                    tracing::info!("👋 Session ended by user");
                    return Ok(());
                }
                Some(index) if index <= self.stores.len() => {
                    let store = &mut self.stores[index - 1];
                    tracing::debug!("🏬 Entering store {}", store.city());
                    if store_menu(store, console)? == MenuExit::EndOfInput {
                        tracing::info!("👋 Input closed, ending session");
                        return Ok(());
                    }
                }
                _ => {
                    let e = StoreError::InvalidChoice { input: line };
                    tracing::debug!("{}", e);
                    console.write_line(messages::rejection(&e))?;
                }
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(CatalogConfig::default().into_stores())
    }
}
