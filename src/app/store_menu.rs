use crate::app::messages;
use crate::core::store::Store;
use crate::domain::model::RepairOutcome;
use crate::domain::ports::Console;
use crate::utils::error::{Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    ShowPhones,
    BuyPhone,
    ShowStatistics,
    RepairPhone,
    Return,
}

impl StoreAction {
    pub fn from_selection(selection: usize) -> Option<Self> {
        match selection {
            1 => Some(Self::ShowPhones),
            2 => Some(Self::BuyPhone),
            3 => Some(Self::ShowStatistics),
            4 => Some(Self::RepairPhone),
            5 => Some(Self::Return),
            _ => None,
        }
    }
}

/// How a store submenu was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Return,
    EndOfInput,
}

/// Parses a numeric menu selection exactly as typed: surrounding spaces make
/// the line invalid, a sign is accepted, negative values yield `None`.
pub fn parse_selection(line: &str) -> Option<usize> {
    line.parse::<i64>()
        .ok()
        .and_then(|value| usize::try_from(value).ok())
}

pub fn show_phones<C: Console>(store: &Store, console: &mut C) -> Result<()> {
    console.write_line(&messages::phones_header(store.city()))?;
    for phone in store.phones() {
        console.write_line(&messages::phone_line(phone.model(), phone.price()))?;
    }
    Ok(())
}

pub fn buy_phone<C: Console>(store: &mut Store, console: &mut C, model: &str) -> Result<()> {
    match store.buy_phone(model) {
        Ok(purchase) => {
            console.write_line(&messages::purchase_confirmation(
                &purchase.model,
                purchase.price,
            ))?;
        }
        Err(e) => {
            tracing::info!("🔍 {}: {}", store.city(), e);
            console.write_line(messages::rejection(&e))?;
        }
    }
    Ok(())
}

pub fn show_statistics<C: Console>(store: &Store, console: &mut C) -> Result<()> {
    console.write_line(&messages::statistics_header(store.city()))?;
    let statistics = store.statistics();
    if statistics.is_empty() {
        console.write_line(messages::NOTHING_SOLD)?;
        return Ok(());
    }

    for (model, tally) in statistics.iter() {
        console.write_line(&messages::statistics_line(model, tally.count, tally.total))?;
    }
    Ok(())
}

pub fn repair_phone<C: Console>(store: &mut Store, console: &mut C) -> Result<()> {
    if store.repair_used() {
        console.write_line(messages::REPAIR_ALREADY_USED)?;
        return Ok(());
    }

    console.write_line(messages::REPAIR_PROMPT)?;
    let answer = console.read_line()?.unwrap_or_default();
    match store.repair_phone(&answer) {
        Ok(RepairOutcome::Repaired) => console.write_line(messages::REPAIR_DONE)?,
        Ok(RepairOutcome::Declined) => console.write_line(messages::REPAIR_DECLINED)?,
        Err(e) => console.write_line(messages::rejection(&e))?,
    }
    Ok(())
}

fn read_model<C: Console>(console: &mut C) -> Result<std::result::Result<String, StoreError>> {
    console.write_line(messages::MODEL_PROMPT)?;
    Ok(match console.read_line()? {
        Some(model) if !model.is_empty() => Ok(model),
        _ => Err(StoreError::EmptyModel),
    })
}

fn print_menu<C: Console>(store: &Store, console: &mut C) -> Result<()> {
    console.write_line(&messages::store_menu_header(store.city()))?;
    for option in messages::STORE_MENU_OPTIONS {
        console.write_line(option)?;
    }
    console.write_line(messages::ACTION_PROMPT)
}

/// Runs the action menu of one store until the user returns to the store
/// list or input runs out.
pub fn store_menu<C: Console>(store: &mut Store, console: &mut C) -> Result<MenuExit> {
    loop {
        print_menu(store, console)?;

        let Some(line) = console.read_line()? else {
            return Ok(MenuExit::EndOfInput);
        };

        let action = match parse_selection(&line).and_then(StoreAction::from_selection) {
            Some(action) => action,
            None => {
                let e = StoreError::InvalidChoice { input: line };
                tracing::debug!("{}", e);
                console.write_line(messages::rejection(&e))?;
                continue;
            }
        };

        match action {
            StoreAction::ShowPhones => show_phones(store, console)?,
            StoreAction::BuyPhone => match read_model(console)? {
                Ok(model) => buy_phone(store, console, &model)?,
                Err(e) => console.write_line(messages::rejection(&e))?,
            },
            StoreAction::ShowStatistics => show_statistics(store, console)?,
            StoreAction::RepairPhone => repair_phone(store, console)?,
            StoreAction::Return => return Ok(MenuExit::Return),
        }
    }
}
