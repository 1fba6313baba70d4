use std::collections::VecDeque;

/// The three top-level tabs. Mirrors the tracker's Games / Players / Overview
/// navigation; `1`/`2`/`3` jump directly, `Tab` cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Games,
    Players,
    Overview,
}

impl Tab {
    pub fn next(self) -> Tab {
        match self {
            Tab::Games => Tab::Players,
            Tab::Players => Tab::Overview,
            Tab::Overview => Tab::Games,
        }
    }
}

/// Which modal form (if any) is capturing keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    None,
    /// Create-game form: date + opponent.
    GameForm,
    /// Add or rename a player: name + number. `editing` carries the player id
    /// when the form was opened over an existing player.
    PlayerForm { editing: Option<String> },
}

/// Which of a modal's two fields currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    First,
    Second,
}

impl FormField {
    pub fn toggle(self) -> FormField {
        match self {
            FormField::First => FormField::Second,
            FormField::Second => FormField::First,
        }
    }
}

/// Transient view state. Holds no domain data at all; the store owns the
/// players and games, and everything here is derivable UI position plus the
/// console log ring.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tab: Tab,
    pub games_selected: usize,
    pub players_selected: usize,
    pub overview_selected: usize,
    /// Game whose stat sheet is open below the games list, if any.
    pub current_game_id: Option<String>,
    /// Stat-sheet cursor: player row and stat column.
    pub grid_row: usize,
    pub grid_col: usize,
    pub modal: Modal,
    pub form_first: String,
    pub form_second: String,
    pub form_field: FormField,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Games,
            games_selected: 0,
            players_selected: 0,
            overview_selected: 0,
            current_game_id: None,
            grid_row: 0,
            grid_col: 0,
            modal: Modal::None,
            form_first: String::new(),
            form_second: String::new(),
            form_field: FormField::First,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
        }
    }

    /// Selection index for the active tab's list.
    pub fn selected(&self) -> usize {
        match self.tab {
            Tab::Games => self.games_selected,
            Tab::Players => self.players_selected,
            Tab::Overview => self.overview_selected,
        }
    }

    fn selected_mut(&mut self) -> &mut usize {
        match self.tab {
            Tab::Games => &mut self.games_selected,
            Tab::Players => &mut self.players_selected,
            Tab::Overview => &mut self.overview_selected,
        }
    }

    pub fn select_next(&mut self, total: usize) {
        let slot = self.selected_mut();
        if total == 0 {
            *slot = 0;
            return;
        }
        *slot = (*slot + 1) % total;
    }

    pub fn select_prev(&mut self, total: usize) {
        let slot = self.selected_mut();
        if total == 0 {
            *slot = 0;
            return;
        }
        if *slot == 0 {
            *slot = total - 1;
        } else {
            *slot -= 1;
        }
    }

    pub fn clamp_selection(&mut self, total: usize) {
        let slot = self.selected_mut();
        if total == 0 {
            *slot = 0;
        } else if *slot >= total {
            *slot = total - 1;
        }
    }

    /// Stat-sheet cursor movement. Row wraps over the player count, column
    /// over the nine stat categories.
    pub fn grid_next_row(&mut self, rows: usize) {
        if rows == 0 {
            self.grid_row = 0;
            return;
        }
        self.grid_row = (self.grid_row + 1) % rows;
    }

    pub fn grid_prev_row(&mut self, rows: usize) {
        if rows == 0 {
            self.grid_row = 0;
            return;
        }
        if self.grid_row == 0 {
            self.grid_row = rows - 1;
        } else {
            self.grid_row -= 1;
        }
    }

    pub fn grid_next_col(&mut self, cols: usize) {
        if cols == 0 {
            self.grid_col = 0;
            return;
        }
        self.grid_col = (self.grid_col + 1) % cols;
    }

    pub fn grid_prev_col(&mut self, cols: usize) {
        if cols == 0 {
            self.grid_col = 0;
            return;
        }
        if self.grid_col == 0 {
            self.grid_col = cols - 1;
        } else {
            self.grid_col -= 1;
        }
    }

    pub fn clamp_grid(&mut self, rows: usize, cols: usize) {
        if rows == 0 {
            self.grid_row = 0;
        } else if self.grid_row >= rows {
            self.grid_row = rows - 1;
        }
        if cols == 0 {
            self.grid_col = 0;
        } else if self.grid_col >= cols {
            self.grid_col = cols - 1;
        }
    }

    pub fn open_sheet(&mut self, game_id: &str) {
        self.current_game_id = Some(game_id.to_string());
        self.grid_row = 0;
        self.grid_col = 0;
    }

    pub fn close_sheet(&mut self) {
        self.current_game_id = None;
    }

    /// Post-deletion cleanup the store leaves to the view: drop the open
    /// sheet if it pointed at the deleted game, then re-clamp the games list
    /// selection against the shrunk count.
    pub fn note_game_deleted(&mut self, deleted_id: &str, remaining: usize) {
        if self.current_game_id.as_deref() == Some(deleted_id) {
            self.current_game_id = None;
        }
        if remaining == 0 {
            self.games_selected = 0;
        } else if self.games_selected >= remaining {
            self.games_selected = remaining - 1;
        }
    }

    pub fn open_modal(&mut self, modal: Modal, first: &str, second: &str) {
        self.modal = modal;
        self.form_first = first.to_string();
        self.form_second = second.to_string();
        self.form_field = FormField::First;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
        self.form_first.clear();
        self.form_second.clear();
        self.form_field = FormField::First;
    }

    pub fn form_push(&mut self, ch: char) {
        match self.form_field {
            FormField::First => self.form_first.push(ch),
            FormField::Second => self.form_second.push(ch),
        }
    }

    pub fn form_backspace(&mut self) {
        match self.form_field {
            FormField::First => {
                self.form_first.pop();
            }
            FormField::Second => {
                self.form_second.pop();
            }
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}
