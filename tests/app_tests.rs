use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use timestiles::session::{Factor, Symbol, VisualizationSession};
use timestiles::ui::app::{Field, Reveal};
use timestiles::ui::App;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw the app and return the screen as one string per row
fn screen(app: &App) -> Vec<String> {
    let backend = TestBackend::new(110, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(app: &App, needle: &str) -> bool {
    screen(app).iter().any(|row| row.contains(needle))
}

fn app_with(a: i64, b: i64) -> App {
    App::new(VisualizationSession::new(
        Factor::clamped(a),
        Factor::clamped(b),
        Symbol::Apple,
    ))
}

#[test]
fn test_idle_screen_shows_prompt() {
    let app = app_with(3, 4);
    assert!(screen_contains(&app, "Press v to see the answer"));
    assert!(screen_contains(&app, "READY"));
    assert!(!screen_contains(&app, "3 x 4 = ?"));
}

#[test]
fn test_visualize_shows_question_and_answer_field() {
    let mut app = app_with(3, 4);
    press(&mut app, KeyCode::Char('v'));

    assert!(app.session.is_visualized());
    assert!(screen_contains(&app, "3 x 4 = ?"));
    assert!(screen_contains(&app, "Type the product"));
    assert!(screen_contains(&app, "VISUALIZED"));
}

#[test]
fn test_typing_factors_updates_pending_values() {
    let mut app = app_with(3, 4);
    press(&mut app, KeyCode::Backspace);
    type_keys(&mut app, "7");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);

    assert_eq!(
        app.session.pending_factors(),
        (Factor::clamped(7), Factor::clamped(5))
    );
}

#[test]
fn test_correct_submission_flow() {
    let mut app = app_with(6, 7);
    press(&mut app, KeyCode::Enter);

    // FactorA -> FactorB -> Symbol -> Answer
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused, Field::Answer);

    type_keys(&mut app, "42");
    press(&mut app, KeyCode::Enter);

    assert!(app.last_grade.is_some_and(|g| g.is_correct()));
    assert!(screen_contains(&app, "Correct! 6 x 7 = 42"));
}

#[test]
fn test_wrong_submission_flow() {
    let mut app = app_with(6, 7);
    press(&mut app, KeyCode::Char('v'));
    app.focused = Field::Answer;
    type_keys(&mut app, "41");
    press(&mut app, KeyCode::Enter);

    assert!(screen_contains(&app, "(entered: 41)"));

    // Editing the answer clears the old feedback
    press(&mut app, KeyCode::Backspace);
    assert!(app.last_grade.is_none());
}

#[test]
fn test_answer_field_not_focusable_before_visualize() {
    let mut app = app_with(3, 4);
    for _ in 0..8 {
        press(&mut app, KeyCode::Tab);
        assert_ne!(app.focused, Field::Answer);
    }
    assert_eq!(app.focused, Field::Symbol);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused, Field::FactorB);
}

#[test]
fn test_edits_after_visualize_keep_picture() {
    let mut app = app_with(2, 3);
    press(&mut app, KeyCode::Char('v'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);

    assert_eq!(app.session.pending_factors().0, Factor::clamped(4));
    assert!(screen_contains(&app, "2 x 3 = ?"));
}

#[test]
fn test_restart_returns_to_prompt_and_keeps_inputs() {
    let mut app = app_with(5, 5);
    press(&mut app, KeyCode::Char('v'));
    app.focused = Field::Answer;
    press(&mut app, KeyCode::Char('r'));

    assert!(!app.session.is_visualized());
    assert_eq!(app.focused, Field::FactorA);
    assert_eq!(app.session.pending_factors().0, Factor::clamped(5));
    assert!(screen_contains(&app, "Press v to see the answer"));

    press(&mut app, KeyCode::Char('v'));
    assert!(screen_contains(&app, "5 x 5 = ?"));
}

#[test]
fn test_inputs_pane_follows_session_edits() {
    let mut app = app_with(3, 4);
    app.session
        .set_factors(Factor::clamped(11), Factor::clamped(9));

    assert!(screen_contains(&app, "[ 11 ]"));
    assert!(screen_contains(&app, "[  9 ]"));

    // Keyboard edits continue from the session's value, not a stale copy
    press(&mut app, KeyCode::Up);
    assert_eq!(
        app.session.pending_factors(),
        (Factor::clamped(12), Factor::clamped(9))
    );
    assert!(screen_contains(&app, "[ 12 ]"));
}

#[test]
fn test_symbol_selection_cycles() {
    let mut app = app_with(1, 1);
    app.focused = Field::Symbol;
    press(&mut app, KeyCode::Down);
    assert_eq!(app.session.pending_symbol(), Symbol::Star);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.session.pending_symbol(), Symbol::Cookie);
    assert!(screen_contains(&app, "> Cookie"));
}

#[test]
fn test_hint_reveals_pending_product() {
    let mut app = app_with(9, 8);

    // Reveal does nothing while the hint panel is closed
    press(&mut app, KeyCode::Char('a'));
    assert!(app.revealed.is_none());

    press(&mut app, KeyCode::Char('h'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(
        app.revealed,
        Some(Reveal {
            a: Factor::clamped(9),
            b: Factor::clamped(8),
            product: 72,
        })
    );
    assert!(screen_contains(&app, "9 x 8 = 72"));

    // Any other key clears the reveal
    press(&mut app, KeyCode::Tab);
    assert!(app.revealed.is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(1, 1);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);

    let mut app = app_with(1, 1);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
