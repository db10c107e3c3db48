//! Headless front end: open a document, run one find/replace action, report.

use anyhow::{bail, Context, Result};
use clap::Parser;

use freewrite::cli::CliArgs;
use freewrite::config::EditorConfig;
use freewrite::model::{AppModel, SegmentId};
use freewrite::runtime::App;

fn main() -> Result<()> {
    freewrite::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)
        .context("invalid arguments")?;

    let mut app = App::headless(AppModel::new(EditorConfig::load()));

    if let Some(path) = &config.path {
        app.open_or_create(path);
        if app.model().document.file_path.as_deref() != Some(path.as_path()) {
            bail!("{}", app.model().ui.status_message);
        }
    }

    for msg in config.messages() {
        app.dispatch(msg);
    }

    let model = app.model();
    let doc = &model.document;
    println!(
        "selection: {}..{}",
        doc.selection.location,
        doc.selection.end()
    );
    println!("{}", doc.cursor_position());
    if let Some(stats) = &model.ui.statistics {
        println!("{}", stats.summary());
    }
    let status = model.ui.status_bar.segment_text(SegmentId::StatusMessage);
    if !status.is_empty() {
        println!("{}", status);
    }

    if config.write && doc.is_modified {
        bail!("{}", model.ui.status_message);
    }
    // Nothing matched
    if app.host().beeps > 0 {
        std::process::exit(1);
    }
    Ok(())
}
