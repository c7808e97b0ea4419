use anyhow::Result;
use ratatui::widgets::ListState;
use rust_decimal::Decimal;

use crate::config::AppConfig;
use crate::models::{
    budget::BudgetSummary,
    category::{CatalogCategory, DesignStyle, ProfileMenuItem},
    expense::Expense,
    favorites::Favorites,
    product::{filter_products, Product, StockFilter},
    sample,
};
use crate::utils::csv::{read_expenses_from_csv, read_products_from_csv};

/// Columns of the home screen category grid.
pub const CATEGORY_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Catalog,
    Expenses,
    Favorites,
    Ai,
    Profile,
}

impl Tab {
    /// Bottom navigation bar order. Expenses is only reachable from Home.
    pub const NAV: [Tab; 5] = [Tab::Home, Tab::Catalog, Tab::Ai, Tab::Favorites, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Главная",
            Tab::Catalog => "Каталог",
            Tab::Expenses => "Расходы",
            Tab::Favorites => "Избранное",
            Tab::Ai => "AI",
            Tab::Profile => "Профиль",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Catalog => "⌕",
            Tab::Expenses => "₽",
            Tab::Favorites => "♥",
            Tab::Ai => "✦",
            Tab::Profile => "☺",
        }
    }

    pub fn nav_index(&self) -> Option<usize> {
        Tab::NAV.iter().position(|t| t == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Searching,
    Prompting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct App {
    pub products: Vec<Product>,
    pub expenses: Vec<Expense>,
    pub categories: Vec<CatalogCategory>,
    pub styles: Vec<DesignStyle>,
    pub menu: Vec<ProfileMenuItem>,
    pub profile: Profile,
    pub budget_total: Decimal,
    pub currency: String,
    pub active_tab: Tab,
    pub input_mode: InputMode,
    pub search_query: String,
    pub ai_prompt: String,
    pub favorites: Favorites,
    pub stock_filter: StockFilter,
    pub category_selection: usize,
    pub catalog_state: ListState,
    pub favorites_state: ListState,
    pub expenses_state: ListState,
    pub menu_state: ListState,
    pub status: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let products = match &config.data.products {
            Some(path) => read_products_from_csv(path)?,
            None => sample::products(),
        };
        let expenses = match &config.data.expenses {
            Some(path) => read_expenses_from_csv(path)?,
            None => sample::expenses(),
        };
        Ok(Self::with_data(config, products, expenses))
    }

    pub fn with_data(config: &AppConfig, products: Vec<Product>, expenses: Vec<Expense>) -> Self {
        let mut app = App {
            products,
            expenses,
            categories: sample::categories(),
            styles: DesignStyle::all(),
            menu: ProfileMenuItem::all(),
            profile: Profile {
                name: config.profile.name.clone(),
                email: config.profile.email.clone(),
            },
            budget_total: config.budget.total,
            currency: config.budget.currency.clone(),
            active_tab: Tab::Home,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            ai_prompt: String::new(),
            favorites: Favorites::default(),
            stock_filter: StockFilter::All,
            category_selection: 0,
            catalog_state: ListState::default(),
            favorites_state: ListState::default(),
            expenses_state: ListState::default(),
            menu_state: ListState::default(),
            status: None,
        };

        app.reset_catalog_selection();
        select_first(&mut app.expenses_state, app.expenses.len());
        select_first(&mut app.menu_state, app.menu.len());

        tracing::info!(
            products = app.products.len(),
            expenses = app.expenses.len(),
            budget = %app.budget_total,
            "App initialized"
        );
        app
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search_query, self.stock_filter)
    }

    pub fn favorite_products(&self) -> Vec<&Product> {
        self.favorites.select(&self.products)
    }

    pub fn budget(&self) -> BudgetSummary {
        BudgetSummary::new(self.budget_total, &self.expenses)
    }

    pub fn can_generate(&self) -> bool {
        !self.ai_prompt.trim().is_empty()
    }
}

// Navigation
impl App {
    pub fn set_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "Switching tab");
        }
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        if tab == Tab::Favorites {
            clamp_selection(&mut self.favorites_state, self.favorites.len());
        }
    }

    pub fn next_tab(&mut self) {
        let i = self.active_tab.nav_index().unwrap_or(0);
        self.set_tab(Tab::NAV[(i + 1) % Tab::NAV.len()]);
    }

    pub fn previous_tab(&mut self) {
        let i = self.active_tab.nav_index().unwrap_or(0);
        self.set_tab(Tab::NAV[(i + Tab::NAV.len() - 1) % Tab::NAV.len()]);
    }

    /// Catalog and Expenses have a back arrow leading home.
    pub fn go_back(&mut self) {
        if matches!(self.active_tab, Tab::Catalog | Tab::Expenses) {
            self.set_tab(Tab::Home);
        }
    }

    pub fn next(&mut self) {
        self.move_selection(true);
    }

    pub fn previous(&mut self) {
        self.move_selection(false);
    }

    fn move_selection(&mut self, forward: bool) {
        match self.active_tab {
            Tab::Home => self.move_category(if forward { CATEGORY_COLUMNS as isize } else { -(CATEGORY_COLUMNS as isize) }),
            Tab::Catalog => {
                let len = self.filtered_products().len();
                step(&mut self.catalog_state, len, forward);
            }
            Tab::Favorites => step(&mut self.favorites_state, self.favorites.len(), forward),
            Tab::Expenses => step(&mut self.expenses_state, self.expenses.len(), forward),
            Tab::Profile => step(&mut self.menu_state, self.menu.len(), forward),
            Tab::Ai => {}
        }
    }

    /// Moves across the category grid, wrapping around both ends.
    pub fn move_category(&mut self, delta: isize) {
        let len = self.categories.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.category_selection as isize;
        self.category_selection = (current + delta).rem_euclid(len) as usize;
    }

    pub fn open_selected_category(&mut self) {
        if let Some(category) = self.categories.get(self.category_selection) {
            tracing::debug!(category = %category.name, "Opening catalog from category tile");
        }
        self.set_tab(Tab::Catalog);
    }
}

// Text input
impl App {
    pub fn start_search(&mut self) {
        if matches!(self.active_tab, Tab::Home | Tab::Catalog) {
            self.input_mode = InputMode::Searching;
        }
    }

    pub fn start_prompt(&mut self) {
        if self.active_tab == Tab::Ai {
            self.input_mode = InputMode::Prompting;
        }
    }

    pub fn handle_input(&mut self, c: char) {
        match self.input_mode {
            InputMode::Searching => {
                self.search_query.push(c);
                self.reset_catalog_selection();
            }
            InputMode::Prompting => self.ai_prompt.push(c),
            InputMode::Normal => {}
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.input_mode {
            InputMode::Searching => {
                self.search_query.pop();
                self.reset_catalog_selection();
            }
            InputMode::Prompting => {
                self.ai_prompt.pop();
            }
            InputMode::Normal => {}
        }
    }

    /// Enter while typing: confirms a search (jumping to the catalog from
    /// Home) or starts a new prompt line.
    pub fn submit_input(&mut self) {
        match self.input_mode {
            InputMode::Searching => {
                tracing::debug!(query = %self.search_query, "Search submitted");
                self.input_mode = InputMode::Normal;
                if self.active_tab == Tab::Home {
                    self.set_tab(Tab::Catalog);
                }
            }
            InputMode::Prompting => self.ai_prompt.push('\n'),
            InputMode::Normal => {}
        }
    }

    /// Esc while typing. A search is cleared, a prompt is kept.
    pub fn cancel_input(&mut self) {
        if self.input_mode == InputMode::Searching {
            self.search_query.clear();
            self.reset_catalog_selection();
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.reset_catalog_selection();
    }

    fn reset_catalog_selection(&mut self) {
        let len = self.filtered_products().len();
        select_first(&mut self.catalog_state, len);
    }
}

// Actions
impl App {
    /// Returns the new membership, or `None` if no product has this id.
    pub fn toggle_favorite(&mut self, id: u32) -> Option<bool> {
        if !self.products.iter().any(|p| p.id == id) {
            tracing::warn!(id, "Ignoring favorite toggle for unknown product");
            return None;
        }
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!(id, now_favorite, "Favorite toggled");
        clamp_selection(&mut self.favorites_state, self.favorites.len());
        Some(now_favorite)
    }

    pub fn selected_product_id(&self) -> Option<u32> {
        match self.active_tab {
            Tab::Catalog => self
                .catalog_state
                .selected()
                .and_then(|i| self.filtered_products().get(i).map(|p| p.id)),
            Tab::Favorites => self
                .favorites_state
                .selected()
                .and_then(|i| self.favorite_products().get(i).map(|p| p.id)),
            _ => None,
        }
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_product_id() {
            self.toggle_favorite(id);
        }
    }

    pub fn cycle_stock_filter(&mut self) {
        self.stock_filter = self.stock_filter.next();
        self.reset_catalog_selection();
    }

    /// The generator is not wired to any service; it only acknowledges.
    pub fn generate(&mut self) {
        if !self.can_generate() {
            self.status = Some("Сначала опишите желаемый интерьер".to_string());
            return;
        }
        tracing::info!(prompt_len = self.ai_prompt.chars().count(), "Generation requested");
        self.status = Some("Генерация изображений пока недоступна".to_string());
    }

    pub fn add_expense(&mut self) {
        tracing::info!("Add expense requested");
        self.status = Some("Добавление расходов пока недоступно".to_string());
    }

    pub fn open_menu_item(&mut self) {
        if let Some(item) = self.menu_state.selected().and_then(|i| self.menu.get(i).copied()) {
            tracing::info!(item = item.label(), "Profile menu item opened");
            self.status = Some(format!("{}: раздел в разработке", item.label()));
        }
    }

    pub fn logout(&mut self) {
        tracing::info!("Logout requested");
        self.status = Some("Выход недоступен в демо-режиме".to_string());
    }
}

fn select_first(state: &mut ListState, len: usize) {
    state.select(if len == 0 { None } else { Some(0) });
}

fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        Some(_) => {}
    }
}

fn step(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => {
            if i >= len - 1 { 0 } else { i + 1 }
        }
        Some(i) => {
            if i == 0 { len - 1 } else { i - 1 }
        }
        None => 0,
    };
    state.select(Some(i));
}
