//! Built-in demo data shown when no CSV files are supplied.

use chrono::NaiveDate;

use super::{category::CatalogCategory, expense::Expense, product::Product};

pub const DEFAULT_BUDGET: i64 = 150_000;

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Ламинат дубовый", "Напольные покрытия", 890, "🪵", true),
        Product::new(2, "Краска белая матовая", "Краски и лаки", 1250, "🎨", true),
        Product::new(3, "Светильник потолочный LED", "Освещение", 3200, "💡", true),
        Product::new(4, "Диван угловой серый", "Мебель", 42000, "🛋️", true),
        Product::new(5, "Обои виниловые", "Отделка стен", 650, "📜", false),
        Product::new(6, "Плитка керамическая", "Напольные покрытия", 780, "⬜", true),
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense::new(1, "Ламинат", 12500, "Материалы", date(2025, 1, 15)),
        Expense::new(2, "Краска", 3750, "Материалы", date(2025, 1, 18)),
        Expense::new(3, "Работы по укладке", 8000, "Услуги", date(2025, 1, 20)),
        Expense::new(4, "Мебель", 45000, "Мебель", date(2025, 1, 22)),
    ]
}

pub fn categories() -> Vec<CatalogCategory> {
    vec![
        CatalogCategory::new("Напольные покрытия", "▤", 24),
        CatalogCategory::new("Краски и лаки", "🖌", 18),
        CatalogCategory::new("Освещение", "💡", 32),
        CatalogCategory::new("Мебель", "🛋", 45),
        CatalogCategory::new("Отделка стен", "▣", 28),
        CatalogCategory::new("Сантехника", "💧", 15),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
