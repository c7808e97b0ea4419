use homy::{App, AppConfig, Tab, ui::{app::InputMode, render}};
use ratatui::{Terminal, backend::TestBackend};
use rust_decimal::Decimal;

fn draw(app: &App) -> String {
    draw_sized(app, 80, 40).0
}

/// Screen text plus the cursor position after drawing.
fn draw_sized(app: &App, width: u16, height: u16) -> (String, (u16, u16)) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render::draw(f, app)).unwrap();
    let cursor = terminal.get_cursor().unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    (text, cursor)
}

fn app() -> App {
    App::new(&AppConfig::default()).unwrap()
}

#[test]
fn home_shows_greeting_categories_and_budget() {
    let screen = draw(&app());
    assert!(screen.contains("Homy"));
    assert!(screen.contains("Найдем всё для вашего идеального дома"));
    assert!(screen.contains("Категории"));
    assert!(screen.contains("Сантехника"));
    assert!(screen.contains("69 250 ₽"));
    assert!(screen.contains("из 150 000 ₽"));
    assert!(screen.contains("Главная"));
    assert!(screen.contains("Профиль"));
}

#[test]
fn catalog_lists_only_matching_products() {
    let mut app = app();
    app.set_tab(Tab::Catalog);
    app.set_search_query("краска");

    let screen = draw(&app);
    assert!(screen.contains("Краска белая матовая"));
    assert!(screen.contains("1 250 ₽"));
    assert!(!screen.contains("Диван угловой серый"));
    assert!(screen.contains("Товары (1 из 6)"));
}

#[test]
fn catalog_marks_products_on_order() {
    let mut app = app();
    app.set_tab(Tab::Catalog);
    app.set_search_query("обои");

    let screen = draw(&app);
    assert!(screen.contains("Обои виниловые"));
    assert!(screen.contains("Под заказ"));
}

#[test]
fn catalog_without_matches_says_so() {
    let mut app = app();
    app.set_tab(Tab::Catalog);
    app.set_search_query("бетон");
    assert!(draw(&app).contains("Ничего не найдено"));
}

#[test]
fn expenses_show_totals_and_history() {
    let mut app = app();
    app.set_tab(Tab::Expenses);

    let screen = draw(&app);
    assert!(screen.contains("Общий бюджет"));
    assert!(screen.contains("69 250 ₽ / 150 000 ₽"));
    assert!(screen.contains("Осталось: 80 750 ₽"));
    assert!(screen.contains("Работы по укладке"));
    assert!(screen.contains("15.01.2025"));
    assert!(screen.contains("45 000 ₽"));
}

#[test]
fn overspent_budget_shows_negative_remaining_and_unclamped_percent() {
    let mut config = AppConfig::default();
    config.budget.total = Decimal::from(50_000);
    let mut app = App::new(&config).unwrap();
    app.set_tab(Tab::Expenses);

    let screen = draw(&app);
    assert!(screen.contains("Осталось: -19 250 ₽"));
    assert!(screen.contains("138,5%"));
}

#[test]
fn empty_favorites_show_placeholder() {
    let mut app = app();
    app.set_tab(Tab::Favorites);

    let screen = draw(&app);
    assert!(screen.contains("Нет избранных товаров"));
    assert!(screen.contains("Перейти в каталог"));
}

#[test]
fn favorites_list_exactly_the_favorited_products() {
    let mut app = app();
    app.toggle_favorite(4);
    app.toggle_favorite(6);
    app.set_tab(Tab::Favorites);

    let screen = draw(&app);
    assert!(screen.contains("Диван угловой серый"));
    assert!(screen.contains("Плитка керамическая"));
    assert!(!screen.contains("Ламинат дубовый"));
    assert!(!screen.contains("Нет избранных товаров"));
}

#[test]
fn ai_tab_shows_generator_and_styles() {
    let mut app = app();
    app.set_tab(Tab::Ai);

    let screen = draw(&app);
    assert!(screen.contains("AI Визуализация"));
    assert!(screen.contains("Генератор дизайна"));
    assert!(screen.contains("Сгенерировать с помощью AI"));
    assert!(screen.contains("Скандинавский"));
    assert!(screen.contains("Пока нет сгенерированных изображений"));
}

#[test]
fn profile_shows_user_and_stats() {
    let mut app = app();
    app.toggle_favorite(1);
    app.set_tab(Tab::Profile);

    let screen = draw(&app);
    assert!(screen.contains("Иван Петров"));
    assert!(screen.contains("ivan@example.com"));
    assert!(screen.contains("Статистика"));
    assert!(screen.contains("Потрачено"));
    assert!(screen.contains("Условия использования"));
    assert!(screen.contains("Выйти"));
}

#[test]
fn long_prompt_keeps_the_last_line_in_view() {
    let mut app = app();
    app.set_tab(Tab::Ai);
    app.start_prompt();
    for i in 1..=12 {
        for c in format!("строка {i}").chars() {
            app.handle_input(c);
        }
        app.submit_input();
    }
    for c in "ПОСЛЕДНЯЯ".chars() {
        app.handle_input(c);
    }
    assert_eq!(app.input_mode, InputMode::Prompting);

    let (screen, (x, y)) = draw_sized(&app, 80, 40);
    assert!(screen.contains("ПОСЛЕДНЯЯ"));
    assert!(!screen.contains("строка 1 "));

    let cursor_row = screen.lines().nth(y as usize).unwrap();
    assert!(cursor_row.contains("ПОСЛЕДНЯЯ"));
    assert!(x < 80);
}

#[test]
fn long_search_query_scrolls_and_keeps_cursor_in_box() {
    let mut app = app();
    app.set_tab(Tab::Catalog);
    app.start_search();
    let query = format!("{}КОНЕЦ", "а".repeat(195));
    for c in query.chars() {
        app.handle_input(c);
    }

    let (screen, (x, y)) = draw_sized(&app, 40, 40);
    assert!(x < 39, "cursor column {x} left the box");
    let row = screen.lines().nth(y as usize).unwrap();
    assert!(row.contains("КОНЕЦ"));
}
