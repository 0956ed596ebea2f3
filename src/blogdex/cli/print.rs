use blogdex::api::{CmdMessage, MessageLevel};
use blogdex::model::{Category, DisplayItem};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 14;
const ACTIVE_MARKER: &str = "●";
const LOAD_MORE_LABEL: &str = "[ load more ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_items(items: &[DisplayItem], load_more_visible: bool) {
    if items.is_empty() {
        println!("No articles to show.");
    }

    for dp in items {
        let idx_str = format!("{:>3}. ", dp.position);
        let category = format!(
            "{:<width$}",
            truncate_to_width(&dp.item.record.category, CATEGORY_WIDTH),
            width = CATEGORY_WIDTH
        );

        let record = &dp.item.record;
        let title_content = if record.description.is_empty() {
            record.title.clone()
        } else {
            format!("{} {}", record.title, record.description.replace('\n', " "))
        };

        let fixed_width = idx_str.width() + CATEGORY_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let (title_part, rest) = split_title(&title_display, &record.title);

        println!(
            "{}{} {}{}",
            idx_str.yellow(),
            category.dimmed(),
            title_part.bold(),
            rest.dimmed()
        );
    }

    if load_more_visible {
        println!();
        println!("{}", LOAD_MORE_LABEL.cyan());
    }
}

pub(super) fn print_categories(categories: &[Category], active: &str) {
    for category in categories {
        if category.tag == active {
            println!(
                "  {} {} {}",
                ACTIVE_MARKER.green(),
                category.label.bold(),
                format!("({})", category.tag).dimmed()
            );
        } else {
            println!(
                "    {} {}",
                category.label,
                format!("({})", category.tag).dimmed()
            );
        }
    }
}

/// Splits a truncated line back into its title and trailing description.
fn split_title<'a>(display: &'a str, title: &str) -> (&'a str, &'a str) {
    let cut = display
        .char_indices()
        .nth(title.chars().count())
        .map(|(i, _)| i)
        .unwrap_or(display.len());
    display.split_at(cut)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn splits_title_from_description() {
        assert_eq!(split_title("Pho soup", "Pho"), ("Pho", " soup"));
        assert_eq!(split_title("Long ti…", "Long title"), ("Long ti…", ""));
    }
}
