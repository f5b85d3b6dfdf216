//! Reply model and per-intent reply builders
//!
//! Every builder is a pure function of its input (plus an injected RNG or
//! clock where the reply is random or time-dependent).

pub mod account;
pub mod calculator;
pub mod datetime;
pub mod fun;
pub mod general;
pub mod search;

use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::core::markdown;

/// How the reply text must be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    MarkdownV2,
}

/// Shortcut buttons attached to the `/start` greeting.
///
/// The callback data is the snake_case variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonAction {
    ExampleQuery,
    CalcDemo,
    ShowStats,
}

impl ButtonAction {
    pub fn callback_data(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Text (plus optional keyboard) to send back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    /// Keyboard rows, empty when no keyboard is attached
    pub buttons: Vec<Vec<Button>>,
    pub disable_link_preview: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            buttons: Vec::new(),
            disable_link_preview: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::MarkdownV2,
            ..Self::plain(text)
        }
    }

    pub fn with_buttons(mut self, rows: Vec<Vec<Button>>) -> Self {
        self.buttons = rows;
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.disable_link_preview = true;
        self
    }

    /// The text as the user sees it, with MarkdownV2 markup resolved
    pub fn plain_text(&self) -> String {
        match self.format {
            TextFormat::Plain => self.text.clone(),
            TextFormat::MarkdownV2 => markdown::strip(&self.text),
        }
    }

    pub fn button_count(&self) -> usize {
        self.buttons.iter().map(Vec::len).sum()
    }
}
