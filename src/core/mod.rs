pub mod store;

pub use crate::domain::model::{Phone, PhoneKind, Purchase, RepairOutcome, SaleTally};
pub use crate::domain::ports::Console;
pub use crate::utils::error::{Result, StoreError};
pub use store::{SalesStatistics, Store};
