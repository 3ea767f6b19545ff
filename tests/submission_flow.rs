use cineZoom::app::settings::Settings;
use cineZoom::app::{App, Focus, ListView};
use cineZoom::movie::Movie;
use cineZoom::review::validation::{Field, MSG_ACCEPT_REQUIRED, MSG_COMMENT_REQUIRED, MSG_NOTE_INVALID};
use cineZoom::review::{validate, RawSubmission};
use cineZoom::runner::handlers::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const VIEW: ListView = ListView { width: 40, rows: 12 };

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), VIEW).unwrap()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn new_app() -> App {
    let mut app = App::new(Settings::default(), None);
    app.on_movie_result(Ok(Movie::default()));
    app
}

#[test]
fn keyboard_submission_adds_comment() {
    let mut app = new_app();
    type_text(&mut app, "Great movie");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Rating);
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Submit);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.comments.len(), 1);
    let c = &app.comments.list()[0];
    assert_eq!(c.text, "Great movie");
    assert_eq!(c.rating, 5);
    // form is reset for the next comment
    assert!(app.form.comment.is_empty());
    assert_eq!(app.form.rating, None);
    assert!(!app.form.accept);
}

#[test]
fn empty_comment_is_rejected_inline() {
    let mut app = new_app();
    app.form.rating = Some(3);
    app.form.accept = true;
    press(&mut app, KeyCode::F(5));

    assert!(app.comments.is_empty());
    assert_eq!(app.form.errors.get(Field::Comment), Some(MSG_COMMENT_REQUIRED));
    assert_eq!(app.form.errors.len(), 1);
}

#[test]
fn invalid_inputs_never_touch_the_store() {
    let long = "a".repeat(501);
    let cases: Vec<RawSubmission> = vec![
        RawSubmission { comment: String::new(), note: Some("3".into()), accept_conditions: Some(true) },
        RawSubmission { comment: long, note: Some("3".into()), accept_conditions: Some(true) },
        RawSubmission { comment: "ok".into(), note: Some("0".into()), accept_conditions: Some(true) },
        RawSubmission { comment: "ok".into(), note: Some("6".into()), accept_conditions: Some(true) },
        RawSubmission { comment: "ok".into(), note: Some("cinq".into()), accept_conditions: Some(true) },
        RawSubmission { comment: "ok".into(), note: Some("3".into()), accept_conditions: Some(false) },
        RawSubmission { comment: "ok".into(), note: Some("3".into()), accept_conditions: None },
    ];
    for raw in cases {
        let errs = validate(&raw).expect_err("should be rejected");
        assert!(!errs.is_empty());
    }
    let errs = validate(&RawSubmission {
        comment: "ok".into(),
        note: Some("cinq".into()),
        accept_conditions: None,
    })
    .unwrap_err();
    assert_eq!(errs.get(Field::Note), Some(MSG_NOTE_INVALID));
    assert_eq!(errs.get(Field::AcceptConditions), Some(MSG_ACCEPT_REQUIRED));
}

#[test]
fn unchecked_terms_keep_store_unchanged() {
    let mut app = new_app();
    type_text(&mut app, "Pas mal");
    app.form.rating = Some(4);
    press(&mut app, KeyCode::F(5));
    assert!(app.comments.is_empty());
    assert_eq!(app.form.errors.get(Field::AcceptConditions), Some(MSG_ACCEPT_REQUIRED));
    // input is kept so the user can fix it
    assert_eq!(app.form.comment, "Pas mal");
}

#[test]
fn insertion_order_is_display_order() {
    let mut app = new_app();
    for (text, rating) in [("A", 1), ("B", 2)] {
        app.form.comment = text.to_string();
        app.form.rating = Some(rating);
        app.form.accept = true;
        app.submit_comment().unwrap();
    }
    let texts: Vec<&str> = app.comments.list().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["A", "B"]);
    assert!(app.comments.list()[0].id < app.comments.list()[1].id);
}

#[test]
fn typed_q_goes_into_comment_not_quit() {
    let mut app = new_app();
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.form.comment, "q");
    press(&mut app, KeyCode::Tab);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn ctrl_c_quits_from_text_field() {
    let mut app = new_app();
    let quit = handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), VIEW).unwrap();
    assert!(quit);
    assert!(app.form.comment.is_empty());
}

#[test]
fn enter_and_backspace_edit_the_textarea() {
    let mut app = new_app();
    type_text(&mut app, "ab");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "c");
    assert_eq!(app.form.comment, "ab\nc");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.form.comment, "ab");
}

#[test]
fn keys_are_ignored_while_the_movie_loads() {
    let mut app = App::new(Settings::default(), None);
    assert!(app.movie.is_loading());
    type_text(&mut app, "hidden");
    app.form.rating = Some(4);
    app.form.accept = true;
    assert!(!press(&mut app, KeyCode::F(5)));
    press(&mut app, KeyCode::Tab);

    assert!(app.form.comment.is_empty());
    assert!(app.comments.is_empty());
    assert_eq!(app.focus, Focus::Comment);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn ctrl_c_quits_while_loading() {
    let mut app = App::new(Settings::default(), None);
    let quit = handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), VIEW).unwrap();
    assert!(quit);
}
