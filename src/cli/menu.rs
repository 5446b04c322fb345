//! Generic line-based option selector
//!
//! Renders a numbered or keyed menu, reads one line of input, and maps it
//! back to a selection. Unless configured otherwise, the rendered lines are
//! erased afterwards with cursor-control sequences so transient menus leave
//! no trace in the scrollback.
//!
//! Rendering and resolution are pure functions of the menu and its style,
//! so the selection contract is testable without a terminal; only
//! [`Menu::prompt`] and [`Menu::prompt_key`] touch stdin/stdout.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

/// One option of a keyed menu: a value plus the keys that select it.
///
/// The first key is the one shown in the rendered menu; entering any key in
/// the list resolves to the option. An option with no keys is skipped
/// entirely, both in rendering and resolution.
#[derive(Debug, Clone)]
pub struct KeyedOption<T> {
    pub value: T,
    pub keys: Vec<String>,
}

impl<T> KeyedOption<T> {
    pub fn new(value: T, keys: &[&str]) -> Self {
        Self {
            value,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// A menu of options: either a plain sequence, with selection keys
/// synthesized as `"1".."N"` (displayed 1-based, resolved to a 0-based
/// index), or an explicitly keyed set.
#[derive(Debug, Clone)]
pub enum Menu<T> {
    Sequence(Vec<T>),
    Keyed(Vec<KeyedOption<T>>),
}

/// Result of resolving one line of input against a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// The chosen option value
    Value(T),
    /// 0-based index of the chosen option (sequence menus in key mode)
    Index(usize),
    /// The literal key text that was entered (keyed menus in key mode)
    Key(String),
    /// Input matched no key
    Invalid,
}

impl<T> Selection<T> {
    /// The selected value, or `fallback` when the input was invalid or the
    /// selection was resolved in key mode.
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Selection::Value(value) => value,
            _ => fallback,
        }
    }
}

/// How a menu is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLayout {
    /// Title line, one block of options, trailing newline; input is read on
    /// its own line below the block.
    Block,
    /// `title [options]: ` on a single line; input is read at its end.
    Inline,
}

/// Structured rendering and input configuration for a menu.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Prepended before the options; empty means no title.
    pub title: String,
    pub layout: MenuLayout,
    /// Render each option as `key: value` rather than the bare value.
    pub show_keys: bool,
    /// Joined between rendered options.
    pub separator: String,
    /// Leave the rendered menu on screen after a selection is made.
    pub keep_after_select: bool,
    /// Case-fold the input line before key lookup.
    pub fold_case: bool,
}

impl MenuStyle {
    /// Classic numbered-list style: title line, `key: value` lines, erased
    /// after selection.
    pub fn block(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: MenuLayout::Block,
            show_keys: true,
            separator: "\n".to_string(),
            keep_after_select: false,
            fold_case: false,
        }
    }

    /// Compact single-line style as used for yes/no confirmations:
    /// `title [Y/n]: `, kept on screen after selection.
    pub fn inline(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: MenuLayout::Inline,
            show_keys: false,
            separator: "/".to_string(),
            keep_after_select: true,
            fold_case: false,
        }
    }

    pub fn fold_case(mut self) -> Self {
        self.fold_case = true;
        self
    }

    pub fn keep_after_select(mut self) -> Self {
        self.keep_after_select = true;
        self
    }

    fn fold(&self, input: &str) -> String {
        if self.fold_case {
            input.to_lowercase()
        } else {
            input.to_string()
        }
    }
}

impl<T: Display> Menu<T> {
    /// Build a keyed menu, asserting that keys are unique across options.
    /// Duplicate keys are a programmer error, not a runtime condition.
    pub fn keyed(options: Vec<KeyedOption<T>>) -> Self {
        let mut seen = HashSet::new();
        for option in &options {
            for key in &option.keys {
                assert!(seen.insert(key.clone()), "duplicate menu key: {key}");
            }
        }
        Menu::Keyed(options)
    }

    /// Display key and value for each selectable option, in render order.
    fn entries(&self) -> Vec<(String, &T)> {
        match self {
            Menu::Sequence(options) => options
                .iter()
                .enumerate()
                .map(|(i, value)| ((i + 1).to_string(), value))
                .collect(),
            Menu::Keyed(options) => options
                .iter()
                .filter(|option| !option.keys.is_empty())
                .map(|option| (option.keys[0].clone(), &option.value))
                .collect(),
        }
    }

    /// Build the full prompt text for this menu. Pure.
    pub fn render(&self, style: &MenuStyle) -> String {
        let body = self
            .entries()
            .iter()
            .map(|(key, value)| {
                if style.show_keys {
                    format!("{key}: {value}")
                } else {
                    value.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(&style.separator);

        match style.layout {
            MenuLayout::Block => {
                let mut out = String::new();
                if !style.title.is_empty() {
                    out.push_str(&style.title);
                    out.push('\n');
                }
                out.push_str(&body);
                out.push('\n');
                out
            }
            MenuLayout::Inline if style.title.is_empty() => format!("[{body}]: "),
            MenuLayout::Inline => format!("{} [{body}]: ", style.title),
        }
    }

    /// Resolve one line of input to the chosen option value. Pure.
    pub fn resolve(&self, input: &str, style: &MenuStyle) -> Selection<&T> {
        let input = style.fold(input);
        match self {
            Menu::Sequence(options) => {
                for (i, value) in options.iter().enumerate() {
                    if (i + 1).to_string() == input {
                        return Selection::Value(value);
                    }
                }
                Selection::Invalid
            }
            Menu::Keyed(options) => {
                for option in options {
                    if option.keys.iter().any(|key| *key == input) {
                        return Selection::Value(&option.value);
                    }
                }
                Selection::Invalid
            }
        }
    }

    /// Resolve in key mode: a sequence menu yields the 0-based option index,
    /// a keyed menu yields the (case-folded) key text that was entered. Pure.
    pub fn resolve_key(&self, input: &str, style: &MenuStyle) -> Selection<&T> {
        let input = style.fold(input);
        match self {
            Menu::Sequence(options) => {
                for i in 0..options.len() {
                    if (i + 1).to_string() == input {
                        return Selection::Index(i);
                    }
                }
                Selection::Invalid
            }
            Menu::Keyed(options) => {
                for option in options {
                    if option.keys.iter().any(|key| *key == input) {
                        return Selection::Key(input);
                    }
                }
                Selection::Invalid
            }
        }
    }

    /// Render the menu, read one line, and resolve it to an option value.
    pub fn prompt(&self, style: &MenuStyle) -> Result<Selection<&T>> {
        let line = self.prompt_line(style)?;
        Ok(self.resolve(&line, style))
    }

    /// Render the menu, read one line, and resolve it in key mode.
    pub fn prompt_key(&self, style: &MenuStyle) -> Result<Selection<&T>> {
        let line = self.prompt_line(style)?;
        Ok(self.resolve_key(&line, style))
    }

    fn prompt_line(&self, style: &MenuStyle) -> Result<String> {
        let rendered = self.render(style);
        let mut stdout = io::stdout();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        if !style.keep_after_select {
            // Rendered lines plus the line the input echo occupied. Cosmetic
            // cleanup only: a terminal that rejects the control codes simply
            // keeps the text.
            let _ = erase_lines(rendered.matches('\n').count() + 1);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Erase the last `lines` terminal lines by walking the cursor up and
/// clearing each one.
pub fn erase_lines(lines: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    for _ in 0..lines {
        stdout
            .queue(MoveUp(1))?
            .queue(MoveToColumn(0))?
            .queue(Clear(ClearType::CurrentLine))?;
    }
    stdout.flush()
}
