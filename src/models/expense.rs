use chrono::NaiveDate;
use rust_decimal::Decimal;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use serde::Deserialize;

use crate::utils::format::{format_date, format_money};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(id: u32, name: &str, amount: i64, category: &str, date: NaiveDate) -> Self {
        Expense {
            id,
            name: name.to_string(),
            amount: Decimal::from(amount),
            category: category.to_string(),
            date,
        }
    }

    pub fn to_list_item(&self, currency: &str) -> ListItem<'static> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(format!("{:<24} ", self.name), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{:>12}", format_money(self.amount, currency)),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(self.category.clone(), Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(format_date(self.date), Style::default().fg(Color::DarkGray))),
        ])
    }
}
