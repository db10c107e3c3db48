//! UI message handlers (fonts, statistics, status messages)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{next_font_size, AppModel};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetFont(font) => {
            model.ui.font = font;
            model.config.font = font;
            model.ui.flash(format!("Font: {}", font.label()));
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::SaveConfig(model.config.clone()),
            ]))
        }

        UiMsg::CycleFontSize => {
            let size = next_font_size(model.ui.font_size);
            model.ui.font_size = size;
            model.config.font_size = size;
            model.ui.flash(format!("Font size {}", size));
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::SaveConfig(model.config.clone()),
            ]))
        }

        UiMsg::ShowStatistics => {
            model.ui.statistics = Some(model.document.statistics());
            Some(Cmd::Redraw)
        }

        UiMsg::DismissStatistics => {
            model.ui.statistics = None;
            Some(Cmd::Redraw)
        }

        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Some(Cmd::Redraw)
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message = None;
            Some(Cmd::Redraw)
        }
    }
}
