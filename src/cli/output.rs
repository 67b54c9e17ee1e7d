// Output formatting utilities

use crate::models::{Quote, Task};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_ITALIC: &str = "\x1b[3m";
const ANSI_RESET: &str = "\x1b[0m";

// ANSI foreground colors (standard 16-color palette)
const ANSI_FG_BLACK: &str = "\x1b[30m";
const ANSI_FG_BRIGHT_RED: &str = "\x1b[91m";
const ANSI_FG_BRIGHT_CYAN: &str = "\x1b[96m";

// 256-color foregrounds for the greeting, quotes and the task table
const ANSI_FG_AMBER: &str = "\x1b[38;5;214m";
const ANSI_FG_SKY: &str = "\x1b[38;5;81m";
const ANSI_FG_CRIMSON: &str = "\x1b[38;5;203m";
const ANSI_FG_ORANGE: &str = "\x1b[38;5;166m";
const ANSI_FG_LIME: &str = "\x1b[38;5;155m";
const ANSI_FG_SALMON: &str = "\x1b[38;5;210m";
const ANSI_FG_MINT: &str = "\x1b[38;5;78m";
const ANSI_FG_GREY: &str = "\x1b[38;5;241m";

// ANSI background colors
const ANSI_BG_GREEN: &str = "\x1b[42m";
const ANSI_BG_PURPLE: &str = "\x1b[48;5;56m";
const ANSI_BG_BRIGHT_RED: &str = "\x1b[101m";
const ANSI_BG_BRIGHT_WHITE: &str = "\x1b[107m";

/// Shown instead of (or under) the task table when nothing is pending
pub const NO_PENDING_TASKS: &str = "Looking good, no pending tasks 😁";

/// Message styles for centered status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    /// Congratulation line under an all-done list
    Celebrate,
}

impl MessageStyle {
    fn ansi(&self) -> String {
        match self {
            MessageStyle::Plain => String::new(),
            MessageStyle::Info => format!("{}{}", ANSI_FG_BRIGHT_CYAN, ANSI_BG_PURPLE),
            MessageStyle::Success => format!("{}{}", ANSI_FG_BLACK, ANSI_BG_GREEN),
            MessageStyle::Warning => format!("{}{}", ANSI_FG_BRIGHT_RED, ANSI_BG_BRIGHT_WHITE),
            MessageStyle::Error => format!("{}{}", ANSI_FG_BLACK, ANSI_BG_BRIGHT_RED),
            MessageStyle::Celebrate => ANSI_FG_MINT.to_string(),
        }
    }

    /// Warnings and errors are wrapped into half the terminal width
    pub fn wraps(&self) -> bool {
        matches!(self, MessageStyle::Warning | MessageStyle::Error)
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Wrap text in an ANSI style if in TTY mode
fn paint(text: &str, style: &str, is_tty: bool) -> String {
    if is_tty && !style.is_empty() {
        format!("{}{}{}", style, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    paint(text, ANSI_BOLD, is_tty)
}

/// Terminal columns taken by `text`.
///
/// Emoji and other wide pictographs take two columns.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c as u32 {
            0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF => 2,
            0xFE00..=0xFE0F | 0x200D => 0,
            _ => 1,
        })
        .sum()
}

/// Left padding that centers a block of `block_width` columns
fn center_offset(block_width: usize, width: usize) -> usize {
    width.saturating_sub(block_width) / 2
}

/// Split text into lines no wider than `width`, breaking on spaces
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && display_width(&line) + 1 + display_width(word) > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

/// Format a centered, styled message.
///
/// Each line is centered on its own; styling covers only the text, never the
/// padding. Wrapping only happens on a terminal, piped output keeps whole lines.
pub fn format_message(text: &str, style: MessageStyle, width: usize, is_tty: bool) -> String {
    let lines = if style.wraps() && is_tty {
        wrap_text(text, (width / 2).max(20))
    } else {
        text.split('\n').map(str::to_string).collect()
    };

    let ansi = style.ansi();
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                let pad = center_offset(display_width(line), width);
                format!("{}{}", " ".repeat(pad), paint(line, &ansi, is_tty))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a centered, styled message to stdout
pub fn center_print(text: &str, style: MessageStyle) {
    println!("{}", format_message(text, style, get_terminal_width(), is_tty()));
}

/// Format a horizontal rule with `title` in the middle
pub fn format_rule(title: &str, width: usize, is_tty: bool) -> String {
    let title = title.trim();
    if title.is_empty() {
        return paint(&"─".repeat(width), ANSI_FG_AMBER, is_tty);
    }

    let title_width = display_width(title) + 2;
    let left = width.saturating_sub(title_width) / 2;
    let right = width.saturating_sub(title_width + left);
    format!(
        "{} {} {}",
        paint(&"─".repeat(left), ANSI_FG_AMBER, is_tty),
        paint(title, ANSI_FG_AMBER, is_tty),
        paint(&"─".repeat(right), ANSI_FG_AMBER, is_tty)
    )
}

/// Format the greeting line ("Hello Ada! It's 19 Oct | 09:05 PM")
pub fn format_greeting(user_name: &str, clock: &str) -> String {
    format!("Hello {}! It's {}", user_name, clock)
}

/// Format a quote and its attribution as two centered lines
pub fn format_quote(quote: &Quote, width: usize, is_tty: bool) -> String {
    let half = (width / 2).max(20);
    let content_lines = wrap_text(&format!("\"{}\"", quote.content), half);
    let author = format!("- {}", quote.author);

    let mut output: Vec<String> = content_lines
        .iter()
        .map(|line| {
            let pad = center_offset(display_width(line), width);
            format!("{}{}", " ".repeat(pad), paint(line, ANSI_FG_SKY, is_tty))
        })
        .collect();
    let pad = center_offset(display_width(&author), width);
    output.push(format!(
        "{}{}",
        " ".repeat(pad),
        paint(&author, &format!("{}{}", ANSI_FG_CRIMSON, ANSI_ITALIC), is_tty)
    ));
    output.join("\n")
}

/// Format the task table (Number / Task / Status), centered in `width`
pub fn format_task_table(
    tasks: &[Task],
    done_icon: &str,
    notdone_icon: &str,
    width: usize,
    is_tty: bool,
) -> String {
    let mut num_width = "Number".len();
    let mut name_width = "Task".len();
    let status_width = "Status"
        .len()
        .max(display_width(done_icon))
        .max(display_width(notdone_icon));

    for (idx, task) in tasks.iter().enumerate() {
        num_width = num_width.max((idx + 1).to_string().len());
        name_width = name_width.max(display_width(&task.name));
    }

    let table_width = num_width + name_width + status_width + 4;
    let pad = " ".repeat(center_offset(table_width, width));

    let mut lines = Vec::new();
    let title = "Tasks";
    lines.push(format!(
        "{}{}",
        " ".repeat(center_offset(title.len(), width)),
        paint(title, ANSI_FG_GREY, is_tty)
    ));

    let header = format!(
        "{:<num$}  {:<name$}  {}",
        "Number",
        "Task",
        "Status",
        num = num_width,
        name = name_width
    );
    lines.push(format!(
        "{}{}",
        pad,
        paint(&bold_if_tty(&header, is_tty), ANSI_FG_ORANGE, is_tty)
    ));
    lines.push(format!("{}{}", pad, paint(&"-".repeat(table_width), ANSI_FG_ORANGE, is_tty)));

    for (idx, task) in tasks.iter().enumerate() {
        let (color, icon) = if task.done {
            (ANSI_FG_LIME, done_icon)
        } else {
            (ANSI_FG_SALMON, notdone_icon)
        };
        let name_pad = name_width.saturating_sub(display_width(&task.name));
        lines.push(format!(
            "{}{}  {}{}  {}",
            pad,
            paint(&format!("{:<num$}", idx + 1, num = num_width), color, is_tty),
            paint(&task.name, color, is_tty),
            " ".repeat(name_pad),
            icon
        ));
    }

    lines.join("\n")
}
