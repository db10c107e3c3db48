//! App message handlers (file operations)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Document};
use crate::util::ensure_text_extension;

/// Handle app messages (file operations)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewFile => {
            model.document = Document::new();
            model.ui.statistics = None;
            model.ui.set_status("New document");
            Some(Cmd::Redraw)
        }

        AppMsg::NewFileAt(path) => {
            // Nothing on disk yet, so the empty document is unsaved
            model.document = Document::new();
            model.document.file_path = Some(path.clone());
            model.document.is_modified = true;
            model.ui.statistics = None;
            model.ui.set_status(format!("New file: {}", path.display()));
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            if !model.document.is_modified {
                model.ui.flash("No changes to save");
                return Some(Cmd::Redraw);
            }
            match model.document.file_path.clone() {
                Some(path) => Some(start_save(model, path)),
                None => Some(Cmd::ShowSaveFileDialog {
                    suggested_name: model.document.display_name(),
                }),
            }
        }

        AppMsg::SaveFileAs => Some(Cmd::ShowSaveFileDialog {
            suggested_name: model.document.display_name(),
        }),

        AppMsg::SaveFileAsDialogResult { path } => match path {
            Some(path) => Some(start_save(model, ensure_text_extension(path))),
            None => None,
        },

        AppMsg::OpenFileDialog => Some(Cmd::ShowOpenFileDialog),

        AppMsg::OpenFileDialogResult { path } => path.map(|path| start_load(model, path)),

        AppMsg::LoadFile(path) => Some(start_load(model, path)),

        AppMsg::SaveCompleted {
            path,
            revision,
            result,
        } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    let still_current = model.document.revision == revision;
                    model.document.file_path = Some(path.clone());
                    if still_current {
                        model.document.mark_saved(path.clone());
                    }
                    tracing::info!("Saved {}", path.display());
                    model.ui.set_status(format!("Saved: {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    tracing::info!("Loaded {} ({} bytes)", path.display(), content.len());
                    model.document.load_content(&content, Some(path.clone()));
                    model.ui.statistics = None;
                    model.ui.set_status(format!("Loaded: {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

fn start_save(model: &mut AppModel, path: std::path::PathBuf) -> Cmd {
    model.ui.is_saving = true;
    model.ui.set_status("Saving...");
    Cmd::SaveFile {
        path,
        content: model.document.content(),
        revision: model.document.revision,
    }
}

fn start_load(model: &mut AppModel, path: std::path::PathBuf) -> Cmd {
    model.ui.is_loading = true;
    model.ui.set_status("Loading...");
    Cmd::LoadFile { path }
}
