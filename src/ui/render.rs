use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, InputMode, Tab, CATEGORY_COLUMNS};
use crate::models::{budget::BudgetSummary, product::StockFilter};
use crate::utils::format::{format_money, format_percent};
use crate::utils::text::{display_width, input_scroll, wrap_rows};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const KEY: Color = Color::Yellow;

const PROMPT_PLACEHOLDER: &str = "Опишите желаемый интерьер в деталях, например:\n\n\
• Современная кухня с белыми шкафами\n\
• Деревянная столешница из светлого дуба\n\
• Зеленые растения и акценты\n\
• Большие окна с естественным светом";

/// Draws the whole screen for the current tab.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    match app.active_tab {
        Tab::Home => render_home(f, app, chunks[1]),
        Tab::Catalog => render_catalog(f, app, chunks[1]),
        Tab::Expenses => render_expenses(f, app, chunks[1]),
        Tab::Favorites => render_favorites(f, app, chunks[1]),
        Tab::Ai => render_ai(f, app, chunks[1]),
        Tab::Profile => render_profile(f, app, chunks[1]),
    }

    render_nav_bar(f, app, chunks[2]);
    render_help_panel(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Homy",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    let bell = Paragraph::new("🔔").alignment(Alignment::Right);
    f.render_widget(title, inner);
    f.render_widget(bell, inner);
}

fn screen_title(title: &str, back: bool) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if back {
        spans.push(Span::styled("← ", Style::default().fg(MUTED)));
    }
    spans.push(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(Line::from(spans))
}

fn render_search_box(f: &mut Frame, app: &App, area: Rect, placeholder: &str) {
    let editing = app.input_mode == InputMode::Searching;
    let border_style = if editing {
        Style::default().fg(KEY)
    } else {
        Style::default().fg(MUTED)
    };

    let content = if app.search_query.is_empty() {
        Line::from(vec![
            Span::raw("⌕ "),
            Span::styled(placeholder.to_string(), Style::default().fg(MUTED)),
        ])
    } else {
        Line::from(vec![Span::raw("⌕ "), Span::raw(app.search_query.clone())])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);

    let text_width = display_width(&format!("⌕ {}", app.search_query));
    let (offset, cursor) = if editing {
        input_scroll(text_width, inner.width as usize)
    } else {
        (0, 0)
    };

    let input = Paragraph::new(content)
        .scroll((0, offset as u16))
        .block(block);
    f.render_widget(input, area);

    if editing && inner.width > 0 {
        f.set_cursor(inner.x + cursor as u16, inner.y);
    }
}

fn money(app: &App, amount: rust_decimal::Decimal) -> String {
    format_money(amount, &app.currency)
}

fn progress_label(summary: &BudgetSummary) -> String {
    match summary.progress_percent() {
        Some(p) => format_percent(p),
        None => "—".to_string(),
    }
}

fn budget_gauge(summary: &BudgetSummary) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .ratio(summary.gauge_ratio())
        .label(progress_label(summary))
}

pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.categories.len().div_ceil(CATEGORY_COLUMNS) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(rows * 4),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled("Привет! 👋", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            "Найдем всё для вашего идеального дома",
            Style::default().fg(MUTED),
        )),
    ]);
    f.render_widget(greeting, chunks[0]);

    render_search_box(f, app, chunks[1], "Поиск материалов и мебели...");

    f.render_widget(
        Paragraph::new(Span::styled("Категории", Style::default().add_modifier(Modifier::BOLD))),
        chunks[2],
    );
    render_category_grid(f, app, chunks[3]);
    render_budget_card(f, app, chunks[4]);
}

fn render_category_grid(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.categories.chunks(CATEGORY_COLUMNS).count();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); rows])
        .split(area);

    for (row, categories) in app.categories.chunks(CATEGORY_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CATEGORY_COLUMNS as u32); CATEGORY_COLUMNS])
            .split(row_areas[row]);

        for (col, category) in categories.iter().enumerate() {
            let selected = row * CATEGORY_COLUMNS + col == app.category_selection;
            let border_style = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            let tile = Paragraph::new(vec![
                Line::from(format!("{} {}", category.icon, category.name)),
                Line::from(Span::styled(
                    format!("[{}]", category.count),
                    Style::default().fg(KEY),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
            f.render_widget(tile, cells[col]);
        }
    }
}

fn render_budget_card(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.budget();
    let block = Block::default()
        .title(" Ваш бюджет ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(money(app, summary.spent), Style::default().add_modifier(Modifier::BOLD))),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("e", Style::default().fg(KEY)),
            Span::raw(" Подробнее"),
        ]))
        .alignment(Alignment::Right),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("из {}", money(app, summary.total)),
            Style::default().fg(MUTED),
        )),
        chunks[1],
    );
    f.render_widget(budget_gauge(&summary), chunks[2]);
}

pub fn render_catalog(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(screen_title("Каталог", true), chunks[0]);
    render_search_box(f, app, chunks[1], "Поиск товаров...");
    render_filter_chips(f, app, chunks[2]);

    let products = app.filtered_products();
    let block = Block::default()
        .title(format!("Товары ({} из {})", products.len(), app.products.len()))
        .borders(Borders::ALL);

    if products.is_empty() {
        let empty = Paragraph::new(Span::styled("Ничего не найдено", Style::default().fg(MUTED)))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, chunks[3]);
        return;
    }

    let items: Vec<ListItem> = products
        .iter()
        .map(|p| p.to_list_item(app.favorites.contains(p.id), &app.currency))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, chunks[3], &mut app.catalog_state.clone());
}

fn render_filter_chips(f: &mut Frame, app: &App, area: Rect) {
    let active = Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(MUTED);
    let chip = |label: &'static str, on: bool| {
        Span::styled(format!(" {label} "), if on { active } else { inactive })
    };

    let line = Line::from(vec![
        chip("Все", app.stock_filter == StockFilter::All),
        Span::raw(" "),
        chip("В наличии", app.stock_filter == StockFilter::InStock),
        Span::raw(" "),
        chip("Скидки", false),
        Span::raw(" "),
        chip("Популярное", false),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render_expenses(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.budget();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(screen_title("Расходы", true), chunks[0]);

    let block = Block::default()
        .title(" Общий бюджет ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled("Контроль расходов на ремонт", Style::default().fg(MUTED))),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(money(app, summary.spent), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" / {}", money(app, summary.total)), Style::default().fg(MUTED)),
        ])),
        rows[1],
    );
    f.render_widget(budget_gauge(&summary), rows[2]);

    let remaining = summary.remaining();
    let remaining_style = if remaining.is_sign_negative() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(MUTED)
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!("Осталось: {}", money(app, remaining)), remaining_style)),
        rows[3],
    );

    f.render_widget(
        Paragraph::new(Span::styled("История", Style::default().add_modifier(Modifier::BOLD))),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("a", Style::default().fg(KEY)),
            Span::raw(" + Добавить"),
        ]))
        .alignment(Alignment::Right),
        chunks[2],
    );

    let items: Vec<ListItem> = app
        .expenses
        .iter()
        .map(|e| e.to_list_item(&app.currency))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, chunks[3], &mut app.expenses_state.clone());
}

pub fn render_favorites(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    f.render_widget(screen_title("Избранное", false), chunks[0]);

    let products = app.favorite_products();
    if products.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("♡", Style::default().fg(MUTED).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Нет избранных товаров", Style::default().fg(MUTED))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(KEY)),
                Span::raw(" Перейти в каталог"),
            ]),
        ])
        .alignment(Alignment::Center);
        f.render_widget(placeholder, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = products
        .iter()
        .map(|p| p.to_list_item(true, &app.currency))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(format!("Товары ({})", products.len())).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, chunks[1], &mut app.favorites_state.clone());
}

pub fn render_ai(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(16),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("AI Визуализация", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(vec![
                Span::styled("● ", Style::default().fg(ACCENT)),
                Span::styled(
                    "Работает на основе искусственного интеллекта",
                    Style::default().fg(MUTED),
                ),
            ]),
        ]),
        chunks[0],
    );

    render_generator_card(f, app, chunks[1]);
    render_style_tiles(f, app, chunks[2]);

    let history = Paragraph::new(Span::styled(
        "Пока нет сгенерированных изображений",
        Style::default().fg(MUTED),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().title(" История генераций ").borders(Borders::ALL));
    f.render_widget(history, chunks[3]);
}

fn render_generator_card(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" ✦ ", Style::default().fg(ACCENT)),
            Span::styled("Генератор дизайна ", Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Опишите интерьер вашей мечты, и искусственный интеллект визуализирует его за секунды",
            Style::default().fg(MUTED),
        ))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );
    f.render_widget(Paragraph::new(Span::styled("✉ Ваш запрос", Style::default().fg(ACCENT))), chunks[1]);

    let editing = app.input_mode == InputMode::Prompting;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing { Style::default().fg(KEY) } else { Style::default().fg(MUTED) });
    let inner = block.inner(chunks[2]);

    if app.ai_prompt.is_empty() {
        let placeholder = Paragraph::new(PROMPT_PLACEHOLDER)
            .style(Style::default().fg(MUTED))
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(placeholder, chunks[2]);
        if editing {
            f.set_cursor(inner.x, inner.y);
        }
    } else {
        // Keep the row being typed in view.
        let rows = wrap_rows(&app.ai_prompt, inner.width as usize);
        let height = inner.height as usize;
        let offset = rows.len().saturating_sub(height);
        let last_width = rows.last().map(|r| display_width(r)).unwrap_or(0);
        let cursor_row = (rows.len() - 1).saturating_sub(offset);

        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        let prompt = Paragraph::new(lines).scroll((offset as u16, 0)).block(block);
        f.render_widget(prompt, chunks[2]);

        if editing && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (last_width as u16).min(inner.width - 1);
            f.set_cursor(x, inner.y + cursor_row as u16);
        }
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "Чем подробнее описание, тем лучше результат",
            Style::default().fg(MUTED),
        )),
        chunks[3],
    );

    let button_style = if app.can_generate() {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    };
    let button = Paragraph::new("✦ Сгенерировать с помощью AI")
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    f.render_widget(button, chunks[4]);
}

fn render_style_tiles(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("Популярные стили", Style::default().add_modifier(Modifier::BOLD))),
        chunks[0],
    );

    let count = app.styles.len().max(1) as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); app.styles.len()])
        .split(chunks[1]);

    for (style, cell) in app.styles.iter().zip(cells.iter()) {
        let tile = Paragraph::new(format!("▦ {}", style.as_str()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(tile, *cell);
    }
}

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.budget();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(app.menu.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("( ☺ )", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(app.profile.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(app.profile.email.clone(), Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let stat = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{:<24}", label), Style::default().fg(MUTED)),
            Span::styled(value, style.add_modifier(Modifier::BOLD)),
        ])
    };
    let stats = Paragraph::new(vec![
        stat("Избранных товаров", app.favorites.len().to_string(), Style::default()),
        stat("Всего расходов", app.expenses.len().to_string(), Style::default()),
        stat("Потрачено", money(app, summary.spent), Style::default().fg(ACCENT)),
    ])
    .block(Block::default().title(" Статистика ").borders(Borders::ALL));
    f.render_widget(stats, chunks[1]);

    let items: Vec<ListItem> = app
        .menu
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", item.icon()), Style::default().fg(ACCENT)),
                Span::raw(format!("{:<28}", item.label())),
                Span::styled("›", Style::default().fg(MUTED)),
            ]))
        })
        .collect();
    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(menu, chunks[2], &mut app.menu_state.clone());

    let logout = Paragraph::new("⎋ Выйти")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(logout, chunks[3]);
}

fn render_nav_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, tab) in Tab::NAV.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if *tab == app.active_tab {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!("{} {} {}", i + 1, tab.icon(), tab.title()), style));
    }

    let nav = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)));
    f.render_widget(nav, area);
}

fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" • "));
        }
        spans.push(Span::styled(*key, Style::default().fg(KEY)));
        spans.push(Span::raw(format!(" {label}")));
    }
    Line::from(spans)
}

fn render_help_panel(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(KEY).add_modifier(Modifier::BOLD)))
    } else {
        match (app.input_mode, app.active_tab) {
            (InputMode::Searching, _) => key_hints(&[("Enter", "Apply"), ("Esc", "Clear"), ("Backspace", "Delete")]),
            (InputMode::Prompting, _) => key_hints(&[("Enter", "New line"), ("Esc", "Done"), ("Backspace", "Delete")]),
            (InputMode::Normal, Tab::Home) => key_hints(&[
                ("←↑↓→", "Move"),
                ("Enter", "Open"),
                ("/", "Search"),
                ("e", "Expenses"),
                ("Tab", "Next"),
                ("q", "Quit"),
            ]),
            (InputMode::Normal, Tab::Catalog) => key_hints(&[
                ("↑/↓", "Move"),
                ("f", "Favorite"),
                ("/", "Search"),
                ("s", "In stock"),
                ("Esc", "Back"),
                ("q", "Quit"),
            ]),
            (InputMode::Normal, Tab::Expenses) => key_hints(&[("↑/↓", "Move"), ("a", "Add"), ("Esc", "Back"), ("q", "Quit")]),
            (InputMode::Normal, Tab::Favorites) => key_hints(&[("↑/↓", "Move"), ("f", "Remove"), ("Tab", "Next"), ("q", "Quit")]),
            (InputMode::Normal, Tab::Ai) => key_hints(&[("i", "Edit prompt"), ("g", "Generate"), ("Tab", "Next"), ("q", "Quit")]),
            (InputMode::Normal, Tab::Profile) => key_hints(&[("↑/↓", "Move"), ("Enter", "Open"), ("l", "Log out"), ("q", "Quit")]),
        }
    };

    let help = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Help "),
        )
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}
