use cineZoom::app::settings::Settings;
use cineZoom::app::{App, Focus, ListView};
use cineZoom::input::{KeyCode, KeyEvent, KeyModifiers};
use cineZoom::movie::Movie;
use cineZoom::runner::event_loop_main::list_view;
use cineZoom::runner::handlers::handle_key;
use cineZoom::ui;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

// Nine rows: three plain comments, or two plus the highlighted one.
const VIEW: ListView = ListView { width: 40, rows: 9 };

fn app_with_texts(texts: &[&str]) -> App {
    let mut app = App::new(Settings::default(), None);
    app.on_movie_result(Ok(Movie::default()));
    for t in texts {
        app.comments.append(t.to_string(), 3);
    }
    app.focus = Focus::Comments;
    app
}

fn app_with_comments(n: usize) -> App {
    let texts: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    app_with_texts(&refs)
}

fn press(app: &mut App, code: KeyCode, view: ListView) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), view).unwrap();
}

#[test]
fn comment_navigation_next_prev_and_paging() {
    let mut app = app_with_comments(10);
    assert_eq!(app.cursor.selected, 0);
    app.next_comment(VIEW);
    assert_eq!(app.cursor.selected, 1);
    assert_eq!(app.cursor.offset, 0);

    // two comments fit from the top (3 + 4 rows), so a page is two
    app.page_down(VIEW);
    assert_eq!(app.cursor.selected, 3);
    assert_eq!(app.cursor.offset, 2);

    app.page_up(VIEW);
    assert_eq!(app.cursor.selected, 1);
    assert_eq!(app.cursor.offset, 1);
    app.previous_comment(VIEW);
    assert_eq!(app.cursor.selected, 0);
    assert_eq!(app.cursor.offset, 0);

    for _ in 0..10 {
        app.page_down(VIEW);
    }
    assert_eq!(app.cursor.selected, 9);
    app.next_comment(VIEW);
    assert_eq!(app.cursor.selected, 9);
}

#[test]
fn back_to_top_resets_scroll() {
    let mut app = app_with_comments(10);
    for _ in 0..9 {
        press(&mut app, KeyCode::Down, VIEW);
    }
    assert_eq!(app.cursor.selected, 9);
    assert_eq!(app.cursor.offset, 8);
    assert!(app.cursor.shows_back_to_top());

    press(&mut app, KeyCode::Home, VIEW);
    assert_eq!(app.cursor.selected, 0);
    assert_eq!(app.cursor.offset, 0);
    assert!(!app.cursor.shows_back_to_top());
}

#[test]
fn tall_comments_scroll_by_rendered_rows() {
    let mut app = app_with_texts(&[
        "premier",
        "ligne1\nligne2\nligne3\nligne4\nligne5\nligne6",
        "troisieme",
        "quatrieme",
    ]);
    let area = Rect::new(0, 0, 100, 26);
    let view = list_view(area);
    for _ in 0..3 {
        press(&mut app, KeyCode::Down, view);
    }
    assert_eq!(app.cursor.selected, 3);
    assert!(app.cursor.offset > 0);

    let backend = TestBackend::new(area.width, area.height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::ui(f, &app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(""));
        }
        text.push('\n');
    }

    // the list draws from the same offset the cursor holds
    let first_words = ["premier", "ligne1", "troisieme", "quatrieme"];
    assert!(text.contains(first_words[app.cursor.offset]));
    assert!(!text.contains(first_words[app.cursor.offset - 1]));
    assert!(text.contains("quatrieme"));
}

#[test]
fn delete_key_removes_highlighted_comment() {
    let mut app = app_with_comments(3);
    press(&mut app, KeyCode::Down, VIEW);
    let doomed = app.selected_comment_id().unwrap();
    press(&mut app, KeyCode::Char('d'), VIEW);

    assert_eq!(app.comments.len(), 2);
    assert!(app.comments.list().iter().all(|c| c.id != doomed));
    let texts: Vec<&str> = app.comments.list().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["c0", "c2"]);
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut app = app_with_comments(2);
    let before = app.comments.list().to_vec();
    assert!(!app.comments.remove(u64::MAX));
    assert_eq!(app.comments.list(), before.as_slice());
}

#[test]
fn delete_on_empty_list_is_harmless() {
    let mut app = app_with_comments(0);
    press(&mut app, KeyCode::Delete, VIEW);
    assert!(app.comments.is_empty());
    assert_eq!(app.cursor.selected, 0);
}

#[test]
fn tab_order_wraps() {
    let mut app = app_with_comments(0);
    app.focus = Focus::Comment;
    let mut seen = vec![app.focus];
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab, VIEW);
        seen.push(app.focus);
    }
    assert_eq!(
        seen,
        [Focus::Comment, Focus::Rating, Focus::Accept, Focus::Submit, Focus::Comments, Focus::Comment]
    );
    press(&mut app, KeyCode::BackTab, VIEW);
    assert_eq!(app.focus, Focus::Comments);
}
