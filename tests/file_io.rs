//! Load/save flow through the headless runtime

mod common;

use std::fs;

use freewrite::cli::CliArgs;
use freewrite::config::EditorConfig;
use freewrite::messages::{AppMsg, Msg, UiMsg};
use freewrite::model::{AppModel, FontChoice, SegmentId};
use freewrite::runtime::App;
use tempfile::tempdir;

fn app() -> App<freewrite::runtime::HeadlessHost> {
    App::headless(AppModel::new(EditorConfig::default()))
}

#[test]
fn test_open_loads_content_without_dirtying() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "line one\nline two").unwrap();

    let mut app = app();
    app.open(&path);

    let doc = &app.model().document;
    assert_eq!(doc.content(), "line one\nline two");
    assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    assert!(!doc.is_modified);
    assert!(!app.model().ui.is_loading);
    assert_eq!(
        app.model().ui.status_bar.segment_text(SegmentId::FileName),
        "draft.txt"
    );
}

#[test]
fn test_open_missing_file_keeps_document() {
    let dir = tempdir().unwrap();
    let mut app = app();
    app.dispatch(Msg::insert_text("unsaved words"));

    app.open(&dir.path().join("nope.txt"));

    let model = app.model();
    assert_eq!(model.document.content(), "unsaved words");
    assert!(model.document.is_modified);
    assert_eq!(model.ui.status_message, "Error: File not found: nope.txt");
}

#[test]
fn test_open_binary_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, b"\x89PNG\x00\x00").unwrap();

    let mut app = app();
    app.open(&path);
    assert_eq!(app.model().document.content(), "");
    assert!(app
        .model()
        .ui
        .status_message
        .contains("Cannot open binary file"));
}

#[test]
fn test_open_dialog_flow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("picked.txt");
    fs::write(&path, "picked").unwrap();

    let mut app = app();
    app.host_mut().open_path = Some(path.clone());
    app.dispatch(Msg::App(AppMsg::OpenFileDialog));
    assert_eq!(app.model().document.content(), "picked");

    // Cancelled dialog changes nothing
    app.dispatch(Msg::App(AppMsg::OpenFileDialog));
    assert_eq!(app.model().document.content(), "picked");
}

#[test]
fn test_save_existing_path_writes_and_cleans() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "old").unwrap();

    let mut app = app();
    app.open(&path);
    app.dispatch(Msg::insert_text("new "));
    assert!(app.model().document.is_modified);

    app.dispatch(Msg::App(AppMsg::SaveFile));
    assert_eq!(fs::read_to_string(&path).unwrap(), "new old");
    assert!(!app.model().document.is_modified);
    assert_eq!(
        app.model()
            .ui
            .status_bar
            .segment_text(SegmentId::ModifiedIndicator),
        ""
    );
}

#[test]
fn test_save_without_changes_is_noop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "same").unwrap();

    let mut app = app();
    app.open(&path);
    fs::write(&path, "changed on disk").unwrap();

    app.dispatch(Msg::App(AppMsg::SaveFile));
    assert_eq!(fs::read_to_string(&path).unwrap(), "changed on disk");
    assert_eq!(
        app.model()
            .ui
            .status_bar
            .segment_text(SegmentId::StatusMessage),
        "No changes to save"
    );
}

#[test]
fn test_save_untitled_asks_for_path_and_forces_txt() {
    let dir = tempdir().unwrap();
    let mut app = app();
    app.host_mut().save_path = Some(dir.path().join("essay"));
    app.dispatch(Msg::insert_text("fresh"));

    app.dispatch(Msg::App(AppMsg::SaveFile));

    let saved = dir.path().join("essay.txt");
    assert_eq!(fs::read_to_string(&saved).unwrap(), "fresh");
    assert_eq!(app.model().document.file_path.as_deref(), Some(saved.as_path()));
    assert_eq!(app.model().document.display_name(), "essay.txt");
    assert!(!app.model().document.is_modified);
}

#[test]
fn test_save_dialog_cancelled_keeps_dirty() {
    let mut app = app();
    app.dispatch(Msg::insert_text("fresh"));
    app.dispatch(Msg::App(AppMsg::SaveFile));
    assert!(app.model().document.is_modified);
    assert!(app.model().document.file_path.is_none());
}

#[test]
fn test_save_failure_preserves_state() {
    let dir = tempdir().unwrap();
    let mut app = app();
    app.host_mut().save_path = Some(dir.path().join("missing").join("x.txt"));
    app.dispatch(Msg::insert_text("keep me"));

    app.dispatch(Msg::App(AppMsg::SaveFileAs));

    let model = app.model();
    assert_eq!(model.document.content(), "keep me");
    assert!(model.document.is_modified);
    assert!(model.document.file_path.is_none());
    assert!(model.ui.status_message.starts_with("Error: Could not save x.txt"));
}

#[test]
fn test_missing_path_starts_unsaved_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.txt");

    let mut app = app();
    app.open_or_create(&path);

    let doc = &app.model().document;
    assert_eq!(doc.content(), "");
    assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    assert!(doc.is_modified);
    assert!(!path.exists());
}

#[test]
fn test_write_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.txt");
    let config = CliArgs {
        path: Some(path.clone()),
        stats: true,
        write: true,
        ..Default::default()
    }
    .into_config()
    .unwrap();

    let mut app = app();
    app.open_or_create(&path);
    for msg in config.messages() {
        app.dispatch(msg);
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(!app.model().document.is_modified);
    assert_eq!(app.host().beeps, 0);
}

#[test]
fn test_typed_text_saved_to_new_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.txt");

    let mut app = app();
    app.open_or_create(&path);
    app.dispatch(Msg::insert_text("first words"));
    app.dispatch(Msg::App(AppMsg::SaveFile));

    assert_eq!(fs::read_to_string(&path).unwrap(), "first words");
    assert!(!app.model().document.is_modified);
}

#[test]
fn test_stale_save_keeps_document_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.txt");

    let mut app = app();
    app.dispatch(Msg::insert_text("one"));
    let written = app.model().document.revision;
    app.dispatch(Msg::insert_text(" two"));
    assert_ne!(app.model().document.revision, written);

    // The save of the earlier revision finishes after the second edit
    app.dispatch(Msg::App(AppMsg::SaveCompleted {
        path: path.clone(),
        revision: written,
        result: Ok(()),
    }));

    let doc = &app.model().document;
    assert!(doc.is_modified);
    assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    assert_eq!(doc.content(), "one two");
    assert_eq!(
        app.model()
            .ui
            .status_bar
            .segment_text(SegmentId::ModifiedIndicator),
        "*"
    );
}

#[test]
fn test_current_save_cleans_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.txt");

    let mut app = app();
    app.dispatch(Msg::insert_text("one"));
    let revision = app.model().document.revision;
    app.dispatch(Msg::App(AppMsg::SaveCompleted {
        path: path.clone(),
        revision,
        result: Ok(()),
    }));

    assert!(!app.model().document.is_modified);
    assert_eq!(
        app.model().document.file_path.as_deref(),
        Some(path.as_path())
    );
}

#[test]
fn test_new_file_resets_document() {
    let mut app = app();
    app.dispatch(Msg::insert_text("scratch"));
    app.dispatch(Msg::App(AppMsg::NewFile));

    let doc = &app.model().document;
    assert_eq!(doc.content(), "");
    assert!(doc.file_path.is_none());
    assert!(!doc.is_modified);
    assert!(!doc.history.can_undo());
}

#[test]
fn test_font_change_persists_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    let mut app = App::headless(AppModel::new(EditorConfig::default()))
        .with_config_path(Some(config_path.clone()));

    app.dispatch(Msg::Ui(UiMsg::SetFont(FontChoice::Serif)));
    app.dispatch(Msg::Ui(UiMsg::CycleFontSize));

    let saved = EditorConfig::load_from(&config_path);
    assert_eq!(saved.font, FontChoice::Serif);
    assert_eq!(saved.font_size, 20);
}

#[test]
fn test_quit_is_reported() {
    let mut app = app();
    assert!(!app.quit_requested());
    app.dispatch(Msg::App(AppMsg::Quit));
    assert!(app.quit_requested());
}
