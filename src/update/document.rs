//! Document editing handlers (typing, deletion, selection, undo/redo)

use crate::commands::Cmd;
use crate::editable::{EditError, Selection};
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let doc = &mut model.document;
    let result = match msg {
        DocumentMsg::InsertText(text) => {
            let sel = doc.selection.clamped(doc.len_chars());
            doc.apply_user_edit(sel.range(), &text).map(|_| true)
        }

        DocumentMsg::Edit { range, text } => doc.apply_user_edit(range, &text).map(|_| true),

        DocumentMsg::DeleteBackward => {
            let sel = doc.selection.clamped(doc.len_chars());
            if !sel.is_empty() {
                doc.apply_user_edit(sel.range(), "").map(|_| true)
            } else if sel.location > 0 {
                doc.apply_user_edit(sel.location - 1..sel.location, "")
                    .map(|_| true)
            } else {
                Ok(false)
            }
        }

        DocumentMsg::SetSelection(selection) => {
            doc.set_selection(selection);
            Ok(true)
        }

        DocumentMsg::SelectAll => {
            doc.selection = Selection::new(0, doc.len_chars());
            Ok(true)
        }

        DocumentMsg::Undo => doc.undo(),

        DocumentMsg::Redo => doc.redo(),
    };

    match result {
        Ok(true) => Some(Cmd::Redraw),
        Ok(false) => None,
        Err(e) => Some(edit_failed(model, e)),
    }
}

fn edit_failed(model: &mut AppModel, e: EditError) -> Cmd {
    tracing::warn!("Edit rejected: {}", e);
    model.ui.flash(format!("Edit rejected: {}", e));
    Cmd::Beep
}
