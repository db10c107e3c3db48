//! Command-line argument parsing for the headless editor
//!
//! Supports:
//! - Opening a document
//! - Placing the caret at a character offset
//! - One find or replace action
//! - Printing statistics
//! - Writing the result back

use clap::Parser;
use std::path::PathBuf;

use crate::editable::Selection;
use crate::messages::{AppMsg, FindMsg, Msg, UiMsg};

/// A minimalist plain-text writing tool
#[derive(Parser, Debug, Default)]
#[command(
    name = "freewrite",
    version,
    about = "A minimalist plain-text writing tool"
)]
pub struct CliArgs {
    /// Document to open
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Text to find (literal, case-sensitive)
    #[arg(short = 'f', long, value_name = "TEXT")]
    pub find: Option<String>,

    /// Replace the next match of --find with TEXT
    #[arg(short = 'r', long, value_name = "TEXT")]
    pub replace: Option<String>,

    /// With --replace, replace every match
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Search backwards from the caret
    #[arg(short = 'p', long)]
    pub previous: bool,

    /// Print character and word counts
    #[arg(short = 's', long)]
    pub stats: bool,

    /// Place the caret at character offset N before searching
    #[arg(long, value_name = "N")]
    pub offset: Option<usize>,

    /// Save the document after the action
    #[arg(short = 'w', long)]
    pub write: bool,
}

/// The single find/replace action to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FindNext(String),
    FindPrevious(String),
    ReplaceOne { query: String, replacement: String },
    ReplaceAll { query: String, replacement: String },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub path: Option<PathBuf>,
    pub caret: Option<usize>,
    pub action: Option<Action>,
    pub stats: bool,
    pub write: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let action = match (self.find, self.replace) {
            (None, Some(_)) => return Err("--replace requires --find".to_string()),
            (None, None) if self.all || self.previous => {
                return Err("--all and --previous require --find".to_string())
            }
            (None, None) => None,
            (Some(query), _) if query.is_empty() => {
                return Err("--find text must not be empty".to_string())
            }
            (Some(_), Some(_)) if self.previous => {
                return Err("--previous cannot be combined with --replace".to_string())
            }
            (Some(query), Some(replacement)) if self.all => {
                Some(Action::ReplaceAll { query, replacement })
            }
            (Some(query), Some(replacement)) => Some(Action::ReplaceOne { query, replacement }),
            (Some(_), None) if self.all => {
                return Err("--all requires --replace".to_string())
            }
            (Some(query), None) if self.previous => Some(Action::FindPrevious(query)),
            (Some(query), None) => Some(Action::FindNext(query)),
        };

        if self.write && self.path.is_none() {
            return Err("--write requires a FILE".to_string());
        }

        Ok(RunConfig {
            path: self.path,
            caret: self.offset,
            action,
            stats: self.stats,
            write: self.write,
        })
    }
}

impl RunConfig {
    /// Messages to dispatch once the document is loaded
    pub fn messages(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();

        if let Some(caret) = self.caret {
            msgs.push(Msg::select(Selection::caret(caret)));
        }

        match &self.action {
            Some(Action::FindNext(query)) => {
                msgs.push(Msg::set_query(query.as_str()));
                msgs.push(Msg::Find(FindMsg::FindNext));
            }
            Some(Action::FindPrevious(query)) => {
                msgs.push(Msg::set_query(query.as_str()));
                msgs.push(Msg::Find(FindMsg::FindPrevious));
            }
            Some(Action::ReplaceOne { query, replacement }) => {
                msgs.push(Msg::set_query(query.as_str()));
                msgs.push(Msg::set_replacement(replacement.as_str()));
                // Select the match first; replace-one only replaces a selected match
                msgs.push(Msg::Find(FindMsg::FindNext));
                msgs.push(Msg::Find(FindMsg::ReplaceOne));
            }
            Some(Action::ReplaceAll { query, replacement }) => {
                msgs.push(Msg::set_query(query.as_str()));
                msgs.push(Msg::set_replacement(replacement.as_str()));
                msgs.push(Msg::Find(FindMsg::ReplaceAll));
            }
            None => {}
        }

        if self.stats {
            msgs.push(Msg::Ui(UiMsg::ShowStatistics));
        }
        if self.write {
            msgs.push(Msg::App(AppMsg::SaveFile));
        }
        msgs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            path: Some(PathBuf::from("draft.txt")),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_action() {
        let config = args().into_config().unwrap();
        assert_eq!(config.action, None);
        assert!(config.messages().is_empty());
    }

    #[test]
    fn test_find_next() {
        let config = CliArgs {
            find: Some("hello".into()),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.action, Some(Action::FindNext("hello".into())));
        assert_eq!(
            config.messages(),
            vec![Msg::set_query("hello"), Msg::Find(FindMsg::FindNext)]
        );
    }

    #[test]
    fn test_find_previous_with_offset() {
        let config = CliArgs {
            find: Some("x".into()),
            previous: true,
            offset: Some(4),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.action, Some(Action::FindPrevious("x".into())));
        assert_eq!(config.messages()[0], Msg::select(Selection::caret(4)));
    }

    #[test]
    fn test_replace_one_selects_before_replacing() {
        let config = CliArgs {
            find: Some("a".into()),
            replace: Some("b".into()),
            ..args()
        }
        .into_config()
        .unwrap();
        let msgs = config.messages();
        assert_eq!(msgs[2], Msg::Find(FindMsg::FindNext));
        assert_eq!(msgs[3], Msg::Find(FindMsg::ReplaceOne));
    }

    #[test]
    fn test_replace_all_and_write() {
        let config = CliArgs {
            find: Some("a".into()),
            replace: Some("".into()),
            all: true,
            write: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(
            config.action,
            Some(Action::ReplaceAll {
                query: "a".into(),
                replacement: "".into()
            })
        );
        assert_eq!(
            config.messages().last(),
            Some(&Msg::App(AppMsg::SaveFile))
        );
    }

    #[test]
    fn test_invalid_combinations() {
        let cases = [
            CliArgs {
                replace: Some("b".into()),
                ..args()
            },
            CliArgs {
                all: true,
                ..args()
            },
            CliArgs {
                find: Some("".into()),
                ..args()
            },
            CliArgs {
                find: Some("a".into()),
                all: true,
                ..args()
            },
            CliArgs {
                find: Some("a".into()),
                replace: Some("b".into()),
                previous: true,
                ..args()
            },
            CliArgs {
                path: None,
                write: true,
                ..Default::default()
            },
        ];
        for case in cases {
            assert!(case.into_config().is_err());
        }
    }

    #[test]
    fn test_clap_parsing() {
        let args = CliArgs::try_parse_from([
            "freewrite",
            "notes.txt",
            "--find",
            "cat",
            "--replace",
            "dog",
            "--all",
            "--stats",
        ])
        .unwrap();
        assert_eq!(args.path, Some(PathBuf::from("notes.txt")));
        assert!(args.all && args.stats && !args.write);
    }
}
