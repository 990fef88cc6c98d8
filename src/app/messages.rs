use crate::utils::error::StoreError;
use crate::utils::format::format_price;

pub const GREETING: &str = "Добро пожаловать в интернет-магазин телефонов!";
pub const STORES_HEADER: &str = "Доступные магазины:";
pub const STORE_PROMPT: &str = "Выберите номер магазина (или 0 для выхода):";
pub const INVALID_CHOICE: &str = "Неверный выбор, попробуйте снова.";

pub const STORE_MENU_OPTIONS: [&str; 5] = [
    "1 - Посмотреть телефоны",
    "2 - Купить телефон",
    "3 - Посмотреть статистику продаж",
    "4 - Ремонт телефона",
    "5 - Вернуться в меню магазинов",
];
pub const ACTION_PROMPT: &str = "Введите номер действия:";

pub const MODEL_PROMPT: &str = "Введите модель телефона для покупки:";
pub const EMPTY_MODEL: &str = "Модель не может быть пустой.";
pub const PHONE_NOT_FOUND: &str = "Телефон не найден.";
pub const NOTHING_SOLD: &str = "Нет проданных телефонов.";

pub const REPAIR_PROMPT: &str = "Ваш телефон сломался? (да/нет)";
pub const REPAIR_DONE: &str = "Телефон отремонтирован.";
pub const REPAIR_DECLINED: &str = "Не нуждаетесь в ремонте.";
pub const REPAIR_ALREADY_USED: &str = "Вы уже воспользовались услугами ремонта.";

pub fn store_entry(index: usize, city: &str) -> String {
    format!("{} - {}", index, city)
}

pub fn store_menu_header(city: &str) -> String {
    format!("Вы находитесь в магазине {}. Выберите действие:", city)
}

pub fn phones_header(city: &str) -> String {
    format!("Доступные телефоны в магазине {}:", city)
}

pub fn phone_line(model: &str, price: f64) -> String {
    format!("{}: {}", model, format_price(price))
}

pub fn purchase_confirmation(model: &str, price: f64) -> String {
    format!("Вы купили телефон: {}, цена: {}", model, format_price(price))
}

pub fn statistics_header(city: &str) -> String {
    format!("Статистика продаж в магазине {}:", city)
}

pub fn statistics_line(model: &str, count: u32, total: f64) -> String {
    format!(
        "Модель {}: продано {} шт., общая сумма {}",
        model,
        count,
        format_price(total)
    )
}

/// Text shown to the user for a rejected action.
pub fn rejection(error: &StoreError) -> &'static str {
    match error {
        StoreError::PhoneNotFound { .. } => PHONE_NOT_FOUND,
        StoreError::EmptyModel => EMPTY_MODEL,
        StoreError::RepairAlreadyUsed => REPAIR_ALREADY_USED,
        StoreError::InvalidChoice { .. } => INVALID_CHOICE,
    }
}
