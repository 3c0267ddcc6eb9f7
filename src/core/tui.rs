use crate::core::idea::{IdeaParts, article_for};
use crate::core::lexicon::Category;
use crate::core::settings::ResolvedTheme;
use colored::Color;
use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxStyle {
    Info,
    Warning,
    Magenta,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemStatus {
    Created,
    Updated,
    Removed,
    Unchanged,
    Info,
    Pass,
    Warn,
    Fail,
}

impl ItemStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ItemStatus::Created => "✨",
            ItemStatus::Updated => "🔄",
            ItemStatus::Removed => "🗑",
            ItemStatus::Unchanged => "➖",
            ItemStatus::Info => "💡",
            ItemStatus::Pass => "✅",
            ItemStatus::Warn => "⚠️",
            ItemStatus::Fail => "❌",
        }
    }
}

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn effective_width() -> usize {
    terminal_width().max(MIN_BOX_WIDTH).min(MAX_BOX_WIDTH)
}

fn indent() -> usize {
    (terminal_width().saturating_sub(effective_width())) / 2
}

pub fn box_top(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╔{}{}╗", "═".repeat(w - 2), "═")
}

pub fn box_bottom(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╚{}{}╝", "═".repeat(w - 2), "═")
}

pub fn box_row(left: &str, content: &str, right: &str, width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    let content_len = content.chars().count();
    let padding = w.saturating_sub(2).saturating_sub(content_len);
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    format!(
        "{}{}{}{}{}",
        left,
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad),
        right
    )
}

pub fn render_box(title: &str, subtitle: &str, style: BoxStyle) {
    use colored::Colorize;

    let width = effective_width();
    let indent_s = " ".repeat(indent());

    match style {
        BoxStyle::Info => {
            println!("{} 💙", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_cyan());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_cyan().bold()
            );
            if !subtitle.is_empty() {
                println!("{}{}", indent_s, box_row("║", subtitle, "║", width).cyan());
            }
            println!("{}{}", indent_s, box_bottom(width).bright_cyan());
        }
        BoxStyle::Warning => {
            println!("{} 💛", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_yellow());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_yellow().bold()
            );
            if !subtitle.is_empty() {
                println!(
                    "{}{}",
                    indent_s,
                    box_row("║", subtitle, "║", width).yellow()
                );
            }
            println!("{}{}", indent_s, box_bottom(width).bright_yellow());
        }
        BoxStyle::Magenta => {
            println!("{} 💜", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_magenta());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_magenta().bold()
            );
            if !subtitle.is_empty() {
                println!(
                    "{}{}",
                    indent_s,
                    box_row("║", subtitle, "║", width).magenta()
                );
            }
            println!("{}{}", indent_s, box_bottom(width).bright_magenta());
        }
    }
}

pub fn print_item(item: &str, status: ItemStatus) {
    use colored::Colorize;

    let icon = status.icon();
    let indent_s = " ".repeat(indent() + 2);

    match status {
        ItemStatus::Created | ItemStatus::Pass => {
            println!(
                "{} {} {}",
                indent_s,
                icon.bright_green(),
                item.bright_white()
            );
        }
        ItemStatus::Updated | ItemStatus::Warn => {
            println!(
                "{} {} {}",
                indent_s,
                icon.bright_yellow(),
                item.bright_white()
            );
        }
        ItemStatus::Removed | ItemStatus::Unchanged => {
            println!(
                "{} {} {}",
                indent_s,
                icon.bright_black(),
                item.bright_white()
            );
        }
        ItemStatus::Fail => {
            println!("{} {} {}", indent_s, icon.bright_red(), item.bright_white());
        }
        ItemStatus::Info => {
            println!("{} {} {}", indent_s, icon.cyan(), item.bright_white());
        }
    }
}

pub fn print_section(title: &str) {
    use colored::Colorize;
    let indent_s = " ".repeat(indent() + 2);
    println!();
    println!("{}{}", indent_s, title.bold());
}

pub fn print_status_line(message: &str, status: ItemStatus) {
    use colored::Colorize;

    let icon = status.icon();
    let indent_s = " ".repeat(indent() + 2);

    match status {
        ItemStatus::Created | ItemStatus::Pass => {
            println!(
                "{}{} {}",
                indent_s,
                icon.bright_green(),
                message.bright_white()
            );
        }
        ItemStatus::Updated | ItemStatus::Warn => {
            println!(
                "{}{} {}",
                indent_s,
                icon.bright_yellow(),
                message.bright_white()
            );
        }
        ItemStatus::Removed | ItemStatus::Unchanged => {
            println!(
                "{}{} {}",
                indent_s,
                icon.bright_black(),
                message.bright_white()
            );
        }
        ItemStatus::Fail => {
            println!(
                "{}{} {}",
                indent_s,
                icon.bright_red(),
                message.bright_white()
            );
        }
        ItemStatus::Info => {
            println!("{}{} {}", indent_s, icon.cyan(), message.bright_white());
        }
    }
}

/// Category palette: tone yellow, genre blue, mechanic red, perspective
/// purple, role green, twist pink. The dark palette uses bright variants
/// so it reads on dark backgrounds.
pub fn category_color(category: Category, theme: ResolvedTheme) -> Color {
    match (category, theme) {
        (Category::Tone, ResolvedTheme::Dark) => Color::BrightYellow,
        (Category::Tone, ResolvedTheme::Light) => Color::Yellow,
        (Category::Genre, ResolvedTheme::Dark) => Color::BrightBlue,
        (Category::Genre, ResolvedTheme::Light) => Color::Blue,
        (Category::Mechanic, ResolvedTheme::Dark) => Color::BrightRed,
        (Category::Mechanic, ResolvedTheme::Light) => Color::Red,
        (Category::Perspective, _) => Color::Magenta,
        (Category::Role, ResolvedTheme::Dark) => Color::BrightGreen,
        (Category::Role, ResolvedTheme::Light) => Color::Green,
        (Category::Twist, _) => Color::BrightMagenta,
    }
}

/// Paint one category value for breakdown rows and list columns.
pub fn paint(text: &str, category: Category, theme: ResolvedTheme) -> String {
    use colored::Colorize;
    text.color(category_color(category, theme)).to_string()
}

/// Re-render the sentence with each category span painted. Joins and
/// articles stay uncolored.
pub fn colorized_sentence(parts: &IdeaParts, theme: ResolvedTheme) -> String {
    use colored::Colorize;

    let paint = |category: Category| {
        parts
            .get(category)
            .color(category_color(category, theme))
            .to_string()
    };
    format!(
        "{} {} {} with {}, seen from {} {} perspective, where {}, and {}.",
        article_for(&parts.tone),
        paint(Category::Tone),
        paint(Category::Genre),
        paint(Category::Mechanic),
        article_for(&parts.perspective).to_lowercase(),
        paint(Category::Perspective),
        paint(Category::Role),
        paint(Category::Twist),
    )
}
