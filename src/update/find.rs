//! Find/replace panel handlers

use crate::commands::Cmd;
use crate::editable::EditError;
use crate::messages::FindMsg;
use crate::model::AppModel;
use crate::search::FindOutcome;

/// Handle find/replace panel messages
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::Show => {
            model.ui.find.visible = true;
            Some(Cmd::Redraw)
        }

        FindMsg::Hide => {
            model.ui.find.visible = false;
            Some(Cmd::Redraw)
        }

        FindMsg::SetQuery(query) => {
            model.ui.find.query = query;
            Some(Cmd::Redraw)
        }

        FindMsg::SetReplacement(replacement) => {
            model.ui.find.replacement = replacement;
            Some(Cmd::Redraw)
        }

        FindMsg::FindNext | FindMsg::SubmitQuery => find(model, true),

        FindMsg::FindPrevious => find(model, false),

        FindMsg::ReplaceOne | FindMsg::SubmitReplacement => replace_one(model),

        FindMsg::ReplaceAll => replace_all(model),
    }
}

fn find(model: &mut AppModel, forward: bool) -> Option<Cmd> {
    let engine = model.search_engine();
    let query = model.ui.find.query.clone();
    let result = if forward {
        model.document.find_next(&engine, &query)
    } else {
        model.document.find_previous(&engine, &query)
    };

    match result {
        Ok(outcome) => Some(report_find(model, outcome)),
        Err(e) => rejected(e),
    }
}

fn replace_one(model: &mut AppModel) -> Option<Cmd> {
    let engine = model.search_engine();
    let query = model.ui.find.query.clone();
    let replacement = model.ui.find.replacement.clone();

    match model.document.replace_one(&engine, &query, &replacement) {
        Ok(outcome) => {
            let cmd = report_find(model, outcome.next);
            if outcome.replaced() {
                Some(Cmd::batch(vec![Cmd::Redraw, cmd]))
            } else {
                Some(cmd)
            }
        }
        Err(e) => rejected(e),
    }
}

fn replace_all(model: &mut AppModel) -> Option<Cmd> {
    let engine = model.search_engine();
    let query = model.ui.find.query.clone();
    let replacement = model.ui.find.replacement.clone();

    match model.document.replace_all(&engine, &query, &replacement) {
        Ok(outcome) if outcome.count() == 0 => {
            model.ui.flash(format!("No occurrences of \"{}\"", query));
            Some(Cmd::Beep)
        }
        Ok(outcome) => {
            let noun = if outcome.count() == 1 {
                "occurrence"
            } else {
                "occurrences"
            };
            model
                .ui
                .flash(format!("Replaced {} {}", outcome.count(), noun));
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ScrollToSelection]))
        }
        Err(e) => rejected(e),
    }
}

/// Status feedback and follow-up command for a find outcome
fn report_find(model: &mut AppModel, outcome: FindOutcome) -> Cmd {
    match outcome {
        FindOutcome::Found(_) => Cmd::ScrollToSelection,
        FindOutcome::FoundWrapped(_) => {
            model.ui.flash("Search wrapped");
            Cmd::ScrollToSelection
        }
        FindOutcome::NotFound => {
            model
                .ui
                .flash(format!("\"{}\" not found", model.ui.find.query));
            Cmd::Beep
        }
    }
}

/// Empty query: the host disables the controls, so nothing to show
fn rejected(e: EditError) -> Option<Cmd> {
    tracing::debug!("find/replace ignored: {}", e);
    None
}
