use super::styles;
use colored::Colorize;
use rolo::api::{CmdMessage, ListView, MessageLevel};
use rolo::config::RoloConfig;
use rolo::index::DisplayIndex;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const EMAIL_WIDTH: usize = 36;
const INDEX_WIDTH: usize = 6;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(view: &ListView) {
    if view.contacts.is_empty() {
        println!("No contacts found.");
        let hint = if view.filtered {
            "Try a different search term"
        } else {
            "Add your first contact with: rolo add <name> <email> <phone>"
        };
        println!("{}", hint.dimmed());
        return;
    }

    for dc in &view.contacts {
        let idx = format!("{}. ", DisplayIndex::from_canonical(dc.index));
        let idx = format!("{:>width$}", idx, width = INDEX_WIDTH);
        let name = pad_to_width(&truncate_to_width(&dc.contact.name, NAME_WIDTH), NAME_WIDTH);
        let email = pad_to_width(&truncate_to_width(&dc.contact.email, EMAIL_WIDTH), EMAIL_WIDTH);

        let marker = if view.editing == Some(dc.index) {
            format!("  {}", styles::EDITING.apply_to("(editing)"))
        } else {
            String::new()
        };

        println!(
            "{}{} {} {}{}",
            styles::INDEX.apply_to(idx),
            styles::NAME.apply_to(name),
            styles::DETAIL.apply_to(email),
            styles::DETAIL.apply_to(&dc.contact.phone),
            marker
        );
    }

    println!();
    if view.filtered {
        println!(
            "{}",
            format!("{} of {}", view.contacts.len(), view.count_label()).dimmed()
        );
    } else {
        println!("{}", view.count_label().dimmed());
    }
}

pub(super) fn print_config(config: &RoloConfig, path: Option<&Path>) {
    for key in RoloConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
    if let Some(path) = path {
        println!("{}", format!("({})", path.display()).dimmed());
    }
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

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
