use volley_terminal::state::{AppState, FormField, Modal, Tab};

#[test]
fn tab_cycle_visits_all_three() {
    let mut tab = Tab::Games;
    tab = tab.next();
    assert_eq!(tab, Tab::Players);
    tab = tab.next();
    assert_eq!(tab, Tab::Overview);
    tab = tab.next();
    assert_eq!(tab, Tab::Games);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut state = AppState::new();
    state.tab = Tab::Players;

    state.select_next(3);
    state.select_next(3);
    assert_eq!(state.players_selected, 2);
    state.select_next(3);
    assert_eq!(state.players_selected, 0);

    state.select_prev(3);
    assert_eq!(state.players_selected, 2);
}

#[test]
fn selection_on_empty_list_stays_at_zero() {
    let mut state = AppState::new();

    state.select_next(0);
    assert_eq!(state.games_selected, 0);
    state.select_prev(0);
    assert_eq!(state.games_selected, 0);
}

#[test]
fn selections_are_tracked_per_tab() {
    let mut state = AppState::new();

    state.tab = Tab::Games;
    state.select_next(5);
    state.tab = Tab::Players;
    state.select_next(5);
    state.select_next(5);

    assert_eq!(state.games_selected, 1);
    assert_eq!(state.players_selected, 2);
    assert_eq!(state.overview_selected, 0);
}

#[test]
fn clamp_selection_pulls_back_after_removal() {
    let mut state = AppState::new();
    state.tab = Tab::Players;
    state.players_selected = 4;

    state.clamp_selection(3);
    assert_eq!(state.players_selected, 2);

    state.clamp_selection(0);
    assert_eq!(state.players_selected, 0);
}

#[test]
fn note_game_deleted_clears_only_the_matching_sheet() {
    let mut state = AppState::new();
    state.open_sheet("g1");
    state.games_selected = 2;

    state.note_game_deleted("other", 3);
    assert_eq!(state.current_game_id.as_deref(), Some("g1"));
    assert_eq!(state.games_selected, 2);

    state.note_game_deleted("g1", 2);
    assert_eq!(state.current_game_id, None);
    assert_eq!(state.games_selected, 1);
}

#[test]
fn grid_cursor_wraps_rows_and_cols() {
    let mut state = AppState::new();

    state.grid_next_row(2);
    state.grid_next_row(2);
    assert_eq!(state.grid_row, 0);
    state.grid_prev_row(2);
    assert_eq!(state.grid_row, 1);

    state.grid_prev_col(9);
    assert_eq!(state.grid_col, 8);
    state.grid_next_col(9);
    assert_eq!(state.grid_col, 0);
}

#[test]
fn clamp_grid_handles_shrunk_roster() {
    let mut state = AppState::new();
    state.grid_row = 5;
    state.grid_col = 8;

    state.clamp_grid(2, 9);
    assert_eq!(state.grid_row, 1);
    assert_eq!(state.grid_col, 8);

    state.clamp_grid(0, 9);
    assert_eq!(state.grid_row, 0);
}

#[test]
fn open_sheet_resets_the_cursor() {
    let mut state = AppState::new();
    state.grid_row = 3;
    state.grid_col = 4;

    state.open_sheet("g1");

    assert_eq!(state.current_game_id.as_deref(), Some("g1"));
    assert_eq!(state.grid_row, 0);
    assert_eq!(state.grid_col, 0);
}

#[test]
fn modal_form_flow_edits_both_fields() {
    let mut state = AppState::new();
    state.open_modal(Modal::PlayerForm { editing: None }, "", "");

    for ch in "Ana".chars() {
        state.form_push(ch);
    }
    state.form_field = state.form_field.toggle();
    state.form_push('7');
    state.form_push('7');
    state.form_backspace();

    assert_eq!(state.form_first, "Ana");
    assert_eq!(state.form_second, "7");
    assert_eq!(state.form_field, FormField::Second);

    state.close_modal();
    assert_eq!(state.modal, Modal::None);
    assert!(state.form_first.is_empty());
    assert!(state.form_second.is_empty());
    assert_eq!(state.form_field, FormField::First);
}

#[test]
fn open_modal_prefills_for_edit() {
    let mut state = AppState::new();

    state.open_modal(
        Modal::PlayerForm {
            editing: Some("p1".to_string()),
        },
        "Ana",
        "7",
    );

    assert_eq!(state.form_first, "Ana");
    assert_eq!(state.form_second, "7");
    assert_eq!(state.form_field, FormField::First);
}

#[test]
fn log_ring_caps_at_two_hundred() {
    let mut state = AppState::new();

    for i in 0..250 {
        state.push_log(format!("[INFO] entry {i}"));
    }

    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] entry 50"));
    assert_eq!(
        state.logs.back().map(String::as_str),
        Some("[INFO] entry 249")
    );
}
