use rust_decimal::Decimal;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use serde::Deserialize;

use crate::utils::format::format_money;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub in_stock: bool,
}

impl Product {
    pub fn new(id: u32, name: &str, category: &str, price: i64, image: &str, in_stock: bool) -> Self {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: Decimal::from(price),
            image: image.to_string(),
            in_stock,
        }
    }

    /// Case-insensitive substring match against the name or the category.
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.category.to_lowercase().contains(query_lower)
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock { "В наличии" } else { "Под заказ" }
    }

    pub fn to_list_item(&self, favorite: bool, currency: &str) -> ListItem<'static> {
        let heart = if favorite {
            Span::styled("♥", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else {
            Span::styled("♡", Style::default().fg(Color::DarkGray))
        };

        let stock_style = if self.in_stock {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::raw(format!("{}  ", self.image)),
                Span::styled(self.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                heart,
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(self.category.clone(), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format_money(self.price, currency),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("[{}]", self.stock_label()), stock_style),
            ]),
        ])
    }
}

/// Which catalog chip is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
}

impl StockFilter {
    pub fn next(self) -> Self {
        match self {
            StockFilter::All => StockFilter::InStock,
            StockFilter::InStock => StockFilter::All,
        }
    }

    pub fn allows(self, product: &Product) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => product.in_stock,
        }
    }
}

/// Products whose name or category contains `query` (case-insensitive),
/// in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &str, stock: StockFilter) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|p| stock.allows(p) && p.matches(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let products = sample::products();
        assert_eq!(filter_products(&products, "", StockFilter::All).len(), products.len());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let products = sample::products();
        assert_eq!(ids(&filter_products(&products, "ЛАМИНАТ", StockFilter::All)), vec![1]);
        assert_eq!(ids(&filter_products(&products, "led", StockFilter::All)), vec![3]);
    }

    #[test]
    fn query_matches_category() {
        let products = sample::products();
        assert_eq!(ids(&filter_products(&products, "напольные", StockFilter::All)), vec![1, 6]);
    }

    #[test]
    fn filter_agrees_with_direct_substring_check() {
        let products = sample::products();
        for query in ["", "а", "Кра", "мебель", "zzz", "ОБОИ", " "] {
            let expected: Vec<u32> = products
                .iter()
                .filter(|p| {
                    let q = query.to_lowercase();
                    p.name.to_lowercase().contains(&q) || p.category.to_lowercase().contains(&q)
                })
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filter_products(&products, query, StockFilter::All)), expected, "query {query:?}");
        }
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let products = sample::products();
        assert!(filter_products(&products, "бетон", StockFilter::All).is_empty());
    }

    #[test]
    fn in_stock_chip_hides_products_on_order() {
        let products = sample::products();
        let shown = filter_products(&products, "", StockFilter::InStock);
        assert!(shown.iter().all(|p| p.in_stock));
        assert!(!ids(&shown).contains(&5));
        assert_eq!(StockFilter::InStock.next(), StockFilter::All);
    }
}
