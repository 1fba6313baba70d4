use std::io;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use volley_terminal::persist::{FileStore, KvStore, MemoryStore};
use volley_terminal::state::{AppState, FormField, Modal, Tab};
use volley_terminal::stats::StatKind;
use volley_terminal::store::StatStore;

struct App {
    store: StatStore,
    view: AppState,
    should_quit: bool,
}

impl App {
    fn new(store: StatStore) -> Self {
        Self {
            store,
            view: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.view.modal != Modal::None {
            self.on_modal_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.view.tab = Tab::Games,
            KeyCode::Char('2') => self.view.tab = Tab::Players,
            KeyCode::Char('3') => self.view.tab = Tab::Overview,
            KeyCode::Tab => self.view.tab = self.view.tab.next(),
            KeyCode::Char('?') => self.view.help_overlay = !self.view.help_overlay,
            _ => match self.view.tab {
                Tab::Games => {
                    if self.view.current_game_id.is_some() {
                        self.on_sheet_key(key);
                    } else {
                        self.on_games_key(key);
                    }
                }
                Tab::Players => self.on_players_key(key),
                Tab::Overview => self.on_overview_key(key),
            },
        }
    }

    fn on_games_key(&mut self, key: KeyEvent) {
        let total = self.store.games().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.view.select_next(total),
            KeyCode::Char('k') | KeyCode::Up => self.view.select_prev(total),
            KeyCode::Char('n') => {
                let today = Local::now().format("%Y-%m-%d").to_string();
                self.view.open_modal(Modal::GameForm, &today, "");
            }
            KeyCode::Enter => {
                if let Some(game) = self.store.games().get(self.view.games_selected) {
                    let id = game.id.clone();
                    self.view.open_sheet(&id);
                }
            }
            KeyCode::Char('x') => self.delete_selected_game(),
            _ => {}
        }
    }

    fn on_sheet_key(&mut self, key: KeyEvent) {
        let rows = self.store.players().len();
        let cols = StatKind::ALL.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.view.grid_next_row(rows),
            KeyCode::Char('k') | KeyCode::Up => self.view.grid_prev_row(rows),
            KeyCode::Char('l') | KeyCode::Right => self.view.grid_next_col(cols),
            KeyCode::Char('h') | KeyCode::Left => self.view.grid_prev_col(cols),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_cursor_stat(1),
            KeyCode::Char('-') => self.adjust_cursor_stat(-1),
            KeyCode::Char('b') | KeyCode::Esc => self.view.close_sheet(),
            _ => {}
        }
    }

    fn on_players_key(&mut self, key: KeyEvent) {
        let total = self.store.players().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.view.select_next(total),
            KeyCode::Char('k') | KeyCode::Up => self.view.select_prev(total),
            KeyCode::Char('n') => {
                self.view
                    .open_modal(Modal::PlayerForm { editing: None }, "", "");
            }
            KeyCode::Char('e') => {
                if let Some(player) = self.store.players().get(self.view.players_selected) {
                    let (id, name, number) =
                        (player.id.clone(), player.name.clone(), player.number.clone());
                    self.view
                        .open_modal(Modal::PlayerForm { editing: Some(id) }, &name, &number);
                }
            }
            KeyCode::Char('x') => self.delete_selected_player(),
            _ => {}
        }
    }

    fn on_overview_key(&mut self, key: KeyEvent) {
        let total = self.store.players().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.view.select_next(total),
            KeyCode::Char('k') | KeyCode::Up => self.view.select_prev(total),
            _ => {}
        }
    }

    fn on_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.view.close_modal(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.view.form_field = self.view.form_field.toggle();
            }
            KeyCode::Backspace => self.view.form_backspace(),
            KeyCode::Enter => self.submit_modal(),
            KeyCode::Char(ch) => self.view.form_push(ch),
            _ => {}
        }
    }

    fn submit_modal(&mut self) {
        let first = self.view.form_first.clone();
        let second = self.view.form_second.clone();
        match self.view.modal.clone() {
            Modal::GameForm => {
                let Some(game) = self.store.create_game(&first, &second) else {
                    self.view.push_log("[WARN] Date and opponent are required");
                    return;
                };
                let msg = format!("[INFO] Created game vs {}", game.opponent);
                self.view.close_modal();
                self.view.games_selected = self.store.games().len().saturating_sub(1);
                self.view.push_log(msg);
            }
            Modal::PlayerForm { editing: None } => {
                let Some(player) = self.store.add_player(&first, &second) else {
                    self.view.push_log("[WARN] Name and number are required");
                    return;
                };
                let msg = format!("[INFO] Added player {}", player.name);
                self.view.close_modal();
                self.view.players_selected = self.store.players().len().saturating_sub(1);
                self.view.push_log(msg);
            }
            Modal::PlayerForm { editing: Some(id) } => {
                if !self.store.update_player(&id, &first, &second) {
                    self.view.push_log("[WARN] Name and number are required");
                    return;
                }
                self.view.close_modal();
                self.view.push_log(format!("[INFO] Updated player {}", first.trim()));
            }
            Modal::None => {}
        }
    }

    fn delete_selected_game(&mut self) {
        let Some(game) = self.store.games().get(self.view.games_selected) else {
            self.view.push_log("[INFO] No game selected");
            return;
        };
        let (id, opponent) = (game.id.clone(), game.opponent.clone());
        self.store.delete_game(&id);
        self.view.note_game_deleted(&id, self.store.games().len());
        self.view.push_log(format!("[INFO] Deleted game vs {opponent}"));
    }

    fn delete_selected_player(&mut self) {
        let Some(player) = self.store.players().get(self.view.players_selected) else {
            self.view.push_log("[INFO] No player selected");
            return;
        };
        let (id, name) = (player.id.clone(), player.name.clone());
        self.store.delete_player(&id);
        let remaining = self.store.players().len();
        self.view.clamp_selection(remaining);
        self.view.clamp_grid(remaining, StatKind::ALL.len());
        self.view.push_log(format!("[INFO] Deleted player {name}"));
    }

    fn adjust_cursor_stat(&mut self, delta: i64) {
        let Some(game_id) = self.view.current_game_id.clone() else {
            return;
        };
        let Some(player) = self.store.players().get(self.view.grid_row) else {
            return;
        };
        let player_id = player.id.clone();
        let kind = StatKind::ALL[self.view.grid_col.min(StatKind::ALL.len() - 1)];
        self.store.adjust_stat(&game_id, &player_id, kind, delta);
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let kv: Box<dyn KvStore> = match FileStore::at_default_dir() {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::new()),
    };
    let store = StatStore::load(kv);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(store);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_ms = std::env::var("VOLLEY_TICK_MS")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(250)
        .max(50);
    let tick_rate = Duration::from_millis(tick_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.view)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.view.tab {
        Tab::Games => render_games(frame, chunks[1], app),
        Tab::Players => render_players(frame, chunks[1], app),
        Tab::Overview => render_overview(frame, chunks[1], app),
    }

    let console = Paragraph::new(console_text(&app.view))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer =
        Paragraph::new(footer_text(&app.view)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    match &app.view.modal {
        Modal::GameForm => render_form_modal(
            frame,
            "New Game",
            "Date",
            "Opponent",
            &app.view,
        ),
        Modal::PlayerForm { editing } => {
            let title = if editing.is_some() {
                "Edit Player"
            } else {
                "New Player"
            };
            render_form_modal(frame, title, "Name", "Number", &app.view);
        }
        Modal::None => {}
    }

    if app.view.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(view: &AppState) -> String {
    let title = format!("VOLLEY TERMINAL | {}", tab_label(view.tab));
    let line1 = format!("  .-.  {}", title);
    let line2 = " (   )".to_string();
    let line3 = "  `-'".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Games => "GAMES",
        Tab::Players => "PLAYERS",
        Tab::Overview => "OVERVIEW",
    }
}

fn footer_text(view: &AppState) -> String {
    if view.modal != Modal::None {
        return "Tab Switch field | Enter Submit | Esc Cancel".to_string();
    }
    match view.tab {
        Tab::Games => {
            if view.current_game_id.is_some() {
                "j/k Player | h/l Stat | +/- Adjust | b/Esc Close sheet | ? Help | q Quit"
                    .to_string()
            } else {
                "1/2/3 Tab | j/k Move | n New game | Enter Stat sheet | x Delete | ? Help | q Quit"
                    .to_string()
            }
        }
        Tab::Players => {
            "1/2/3 Tab | j/k Move | n Add | e Edit | x Delete | ? Help | q Quit".to_string()
        }
        Tab::Overview => "1/2/3 Tab | j/k Scroll | ? Help | q Quit".to_string(),
    }
}

fn render_games(frame: &mut Frame, area: Rect, app: &App) {
    if app.view.current_game_id.is_none() {
        render_games_list(frame, area, app);
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    render_games_list(frame, sections[0], app);
    render_stat_sheet(frame, sections[1], app);
}

fn render_games_list(frame: &mut Frame, area: Rect, app: &App) {
    let games = app.store.games();
    if games.is_empty() {
        let empty = Paragraph::new("No games yet - press n to create one")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }
    if area.height == 0 {
        return;
    }

    let visible = area.height as usize;
    let (start, end) = visible_range(app.view.games_selected, games.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + i as u16,
            width: area.width,
            height: 1,
        };

        let game = &games[idx];
        let selected = idx == app.view.games_selected;
        let open = app.view.current_game_id.as_deref() == Some(game.id.as_str());
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let marker = if open { "*" } else { " " };
        let line = format!("{marker} {} - {}", format_date(&game.date), game.opponent);
        render_cell_text(frame, row_area, &line, style);
    }
}

fn render_stat_sheet(frame: &mut Frame, area: Rect, app: &App) {
    let Some(game_id) = app.view.current_game_id.as_deref() else {
        return;
    };
    let Some(game) = app.store.game(game_id) else {
        return;
    };

    let title = format!("{} vs {}", format_date(&game.date), game.opponent);
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let players = app.store.players();
    if players.is_empty() {
        let empty = Paragraph::new("No players registered")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let widths = sheet_columns();
    let header_area = Rect { height: 1, ..inner };
    render_stat_header(frame, header_area, &widths, "Player");

    let list_area = Rect {
        x: inner.x,
        y: inner.y + 1,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    let visible = list_area.height as usize;
    let (start, end) = visible_range(app.view.grid_row, players.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected_row = idx == app.view.grid_row;
        let row_style = if selected_row {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected_row {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let player = &players[idx];
        let line = game.stats_for(&player.id);
        let name = format!("{} #{}", player.name, player.number);
        render_cell_text(frame, cols[0], &name, row_style);

        for (col, kind) in StatKind::ALL.iter().enumerate() {
            let style = if selected_row && col == app.view.grid_col {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                row_style
            };
            let value = line.value(*kind).to_string();
            render_cell_text(frame, cols[col + 1], &value, style);
        }
    }
}

fn render_players(frame: &mut Frame, area: Rect, app: &App) {
    let players = app.store.players();
    if players.is_empty() {
        let empty = Paragraph::new("No players yet - press n to add one")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }
    if area.height == 0 {
        return;
    }

    let visible = area.height as usize;
    let (start, end) = visible_range(app.view.players_selected, players.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + i as u16,
            width: area.width,
            height: 1,
        };

        let selected = idx == app.view.players_selected;
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let player = &players[idx];
        let line = format!("  {} (#{})", player.name, player.number);
        render_cell_text(frame, row_area, &line, style);
    }
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let players = app.store.players();
    if players.is_empty() {
        let empty = Paragraph::new("No players to total")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let widths = sheet_columns();
    let header_area = Rect { height: 1, ..area };
    render_stat_header(frame, header_area, &widths, "Player");

    let list_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(app.view.overview_selected, players.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected = idx == app.view.overview_selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let player = &players[idx];
        let totals = app.store.player_totals(&player.id);
        let name = format!("{} #{}", player.name, player.number);
        render_cell_text(frame, cols[0], &name, row_style);
        for (col, kind) in StatKind::ALL.iter().enumerate() {
            let value = totals.value(*kind).to_string();
            render_cell_text(frame, cols[col + 1], &value, row_style);
        }
    }
}

fn sheet_columns() -> [Constraint; 10] {
    [
        Constraint::Min(18),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
    ]
}

fn render_stat_header(frame: &mut Frame, area: Rect, widths: &[Constraint], first: &str) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], first, style);
    for (col, kind) in StatKind::ALL.iter().enumerate() {
        render_cell_text(frame, cols[col + 1], kind.short_label(), style);
    }
}

fn render_form_modal(frame: &mut Frame, title: &str, first: &str, second: &str, view: &AppState) {
    let popup_area = centered_rect(50, 30, frame.size());
    frame.render_widget(Clear, popup_area);

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 {
        return;
    }

    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default();

    let first_area = Rect { height: 1, ..inner };
    let second_area = Rect {
        x: inner.x,
        y: inner.y + 1,
        width: inner.width,
        height: 1,
    };

    let (first_style, second_style) = match view.form_field {
        FormField::First => (active, idle),
        FormField::Second => (idle, active),
    };
    let first_line = format!("{first}: {}", view.form_first);
    let second_line = format!("{second}: {}", view.form_second);
    render_cell_text(frame, first_area, &first_line, first_style);
    render_cell_text(frame, second_area, &second_line, second_style);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, text_area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(view: &AppState) -> String {
    if view.logs.is_empty() {
        return "No activity yet".to_string();
    }
    view.logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_date(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return "TBD".to_string();
    }
    if let Some(date) = parse_date(cleaned) {
        return date.format("%Y-%m-%d").to_string();
    }
    cleaned.to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%m/%d/%Y"];

    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    None
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Volley Terminal - Help",
        "",
        "Global:",
        "  1 / 2 / 3    Games / Players / Overview",
        "  Tab          Next tab",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Games:",
        "  j/k or ↑/↓   Move",
        "  n            New game",
        "  Enter        Open stat sheet",
        "  x            Delete game",
        "",
        "Stat sheet:",
        "  j/k h/l      Move cursor",
        "  + / -        Adjust counter",
        "  b / Esc      Close sheet",
        "",
        "Players:",
        "  n / e / x    Add / Edit / Delete",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_sits_inside_its_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };

        let popup = centered_rect(60, 60, area);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 24);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 8);
        assert!(popup.x + popup.width <= area.width);
        assert!(popup.y + popup.height <= area.height);
    }

    #[test]
    fn centered_rect_handles_a_tiny_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        };

        let popup = centered_rect(50, 30, area);

        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn visible_range_centers_the_selection() {
        assert_eq!(visible_range(0, 0, 5), (0, 0));
        assert_eq!(visible_range(2, 4, 10), (0, 4));
        assert_eq!(visible_range(10, 20, 6), (7, 13));
        assert_eq!(visible_range(19, 20, 6), (14, 20));
    }
}
