//! Status bar tests - segments stay in sync with the document after `update`

mod common;

use common::{run, test_model};
use freewrite::commands::Cmd;
use freewrite::editable::Selection;
use freewrite::messages::{AppMsg, DocumentMsg, Msg, UiMsg};
use freewrite::model::{FontChoice, SegmentContent, SegmentId, StatusBar};
use freewrite::update::update;

#[test]
fn test_segment_content_char_width() {
    assert_eq!(SegmentContent::Empty.char_width(), 0);
    assert_eq!(SegmentContent::Text("héllo".to_string()).char_width(), 5);
    assert!(SegmentContent::Text(String::new()).is_empty());
}

#[test]
fn test_cursor_position_tracks_selection() {
    let mut model = test_model("first\nsecond\nthird", 0, 0);
    update(&mut model, Msg::select(Selection::caret(9)));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::CursorPosition),
        "Line: 2, Col: 4"
    );

    // A range selection reports its start
    update(&mut model, Msg::select(Selection::new(13, 5)));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::CursorPosition),
        "Line: 3, Col: 1"
    );
}

#[test]
fn test_modified_indicator_follows_edits() {
    let mut model = test_model("text", 4, 0);
    update(&mut model, Msg::insert_text("!"));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::ModifiedIndicator),
        "*"
    );

    update(&mut model, Msg::App(AppMsg::NewFile));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::ModifiedIndicator),
        ""
    );
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::FileName),
        "Untitled.txt"
    );
}

#[test]
fn test_status_message_segment() {
    let mut model = test_model("", 0, 0);
    run(
        &mut model,
        [
            Msg::Ui(UiMsg::SetStatus("Ready".into())),
            Msg::Ui(UiMsg::CycleFontSize),
        ],
    );
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::StatusMessage),
        "Font size 20"
    );

    update(&mut model, Msg::Ui(UiMsg::ClearTransientMessage));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::StatusMessage),
        "Ready"
    );
}

#[test]
fn test_font_change_reports_label() {
    let mut model = test_model("", 0, 0);
    let cmd = update(&mut model, Msg::Ui(UiMsg::SetFont(FontChoice::Serif)));
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::StatusMessage),
        "Font: Serif"
    );
    assert_eq!(model.config.font, FontChoice::Serif);
    assert_eq!(
        cmd,
        Some(Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::SaveConfig(model.config.clone()),
        ]))
    );
}

#[test]
fn test_new_file_at_path_shows_unsaved() {
    let mut model = test_model("old text", 0, 0);
    update(
        &mut model,
        Msg::App(AppMsg::NewFileAt("chapter.txt".into())),
    );
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::FileName),
        "chapter.txt"
    );
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::ModifiedIndicator),
        "*"
    );
    assert_eq!(model.document.content(), "");
}

#[test]
fn test_statistics_readout() {
    let mut model = test_model("Hello  world,\n\tagain", 0, 0);
    update(&mut model, Msg::Ui(UiMsg::ShowStatistics));
    let stats = model.ui.statistics.unwrap();
    assert_eq!(stats.characters, 20);
    assert_eq!(stats.words, 3);

    update(&mut model, Msg::Ui(UiMsg::DismissStatistics));
    assert!(model.ui.statistics.is_none());
}

#[test]
fn test_undo_back_to_clean_text_still_modified() {
    let mut model = test_model("a", 1, 0);
    run(
        &mut model,
        [Msg::insert_text("b"), Msg::Document(DocumentMsg::Undo)],
    );
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::ModifiedIndicator),
        "*"
    );
}

#[test]
fn test_render_contains_all_segments() {
    let mut model = test_model("abc", 3, 0);
    update(&mut model, Msg::insert_text("d"));
    let line = model.ui.status_bar.render(60);
    assert!(line.contains("Untitled.txt"));
    assert!(line.contains('*'));
    assert!(line.ends_with("Line: 1, Col: 5"));
    assert_eq!(StatusBar::new().render(0), "");
}
