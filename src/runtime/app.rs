use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::util::{filename_for_display, read_text_file, write_text_file};

/// Services the shell around the editor provides
///
/// Dialogs return `None` when cancelled.
pub trait Host {
    /// Ask the user for a document to open
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask the user where to save, pre-filled with `suggested_name`
    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;

    /// "Not found" and rejected-edit feedback
    fn beep(&mut self) {}

    /// The model changed visibly
    fn redraw(&mut self, _model: &AppModel) {}

    /// Scroll the text view to the current selection
    fn scroll_to_selection(&mut self, _model: &AppModel) {}
}

/// Host without a window: dialogs answer from preset paths
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Answer for the open dialog
    pub open_path: Option<PathBuf>,
    /// Answer for the save dialog
    pub save_path: Option<PathBuf>,
    /// Number of beeps requested
    pub beeps: usize,
}

impl Host for HeadlessHost {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_path.take()
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        tracing::debug!("save dialog suggested {}", suggested_name);
        self.save_path.take()
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}

/// Owns the model and runs messages through `update` until the queue drains
pub struct App<H: Host> {
    model: AppModel,
    host: H,
    /// Where `Cmd::SaveConfig` writes; `None` disables persistence
    config_path: Option<PathBuf>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    quit_requested: bool,
}

impl<H: Host> App<H> {
    pub fn new(model: AppModel, host: H) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            host,
            config_path: crate::config_paths::config_file(),
            msg_tx,
            msg_rx,
            quit_requested: false,
        }
    }

    /// Persist settings to `path` instead of the default config file
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Run a message and every message its commands produce
    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.host.redraw(&self.model),
            Cmd::ScrollToSelection => {
                self.host.scroll_to_selection(&self.model);
                self.host.redraw(&self.model);
            }
            Cmd::Beep => self.host.beep(),
            Cmd::SaveFile {
                path,
                content,
                revision,
            } => {
                let result = write_text_file(&path, &content).map_err(|e| {
                    format!("Could not save {}: {}", filename_for_display(&path), e)
                });
                self.send(Msg::App(AppMsg::SaveCompleted {
                    path,
                    revision,
                    result,
                }));
            }
            Cmd::LoadFile { path } => {
                let result = read_text_file(&path)
                    .map_err(|e| e.user_message(&filename_for_display(&path)));
                self.send(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::SaveConfig(config) => self.save_config(&config),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::ShowOpenFileDialog => {
                let path = self.host.pick_open_path();
                self.send(Msg::App(AppMsg::OpenFileDialogResult { path }));
            }
            Cmd::ShowSaveFileDialog { suggested_name } => {
                let path = self.host.pick_save_path(&suggested_name);
                self.send(Msg::App(AppMsg::SaveFileAsDialogResult { path }));
            }
            Cmd::Quit => self.quit_requested = true,
        }
    }

    fn save_config(&self, config: &EditorConfig) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Failed to persist settings: {}", e);
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }
}

impl App<HeadlessHost> {
    /// Headless app persisting nothing but documents
    pub fn headless(model: AppModel) -> Self {
        Self::new(model, HeadlessHost::default()).with_config_path(None)
    }

    /// Load `path` and run the resulting messages
    pub fn open(&mut self, path: &Path) {
        self.dispatch(Msg::App(AppMsg::LoadFile(path.to_path_buf())));
    }

    /// Load `path`, or start a new unsaved document there if it doesn't exist
    pub fn open_or_create(&mut self, path: &Path) {
        if path.exists() {
            self.open(path);
        } else {
            self.dispatch(Msg::App(AppMsg::NewFileAt(path.to_path_buf())));
        }
    }
}
