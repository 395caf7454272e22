use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::model::{Contact, ContactField};
use colored::Colorize;
use std::collections::BTreeMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 28;
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 7] = ["Name", "Address", "City", "State", "Zip", "Phone", "Email"];

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

pub(super) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        return;
    }
    print!("{}", render_table(contacts));
}

pub(super) fn print_books(books: &BTreeMap<String, Vec<Contact>>) {
    for (i, (name, contacts)) in books.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let count = match contacts.len() {
            1 => "1 contact".to_string(),
            n => format!("{} contacts", n),
        };
        println!("{} {}", name.bold(), format!("({})", count).dimmed());
        print_contacts(contacts);
    }
}

pub(super) fn print_groups(groups: &BTreeMap<String, Vec<String>>) {
    for (state, names) in groups {
        println!("{}", state.bold());
        for name in names {
            println!("  {}", name);
        }
    }
}

pub(super) fn print_contact_detail(contact: &Contact) {
    println!("{}", contact.full_name().bold());
    println!("--------------------------------");
    for field in ContactField::ALL {
        if field.is_identity() {
            continue;
        }
        println!(
            "{:<14}{}",
            format!("{}:", field).dimmed(),
            contact.field(field)
        );
    }
}

fn row(contact: &Contact) -> [String; 7] {
    [
        contact.full_name(),
        contact.address.clone(),
        contact.city.clone(),
        contact.state.clone(),
        contact.zip_code.clone(),
        contact.phone_number.clone(),
        contact.email.clone(),
    ]
}

/// Aligned plain-text table, one line per contact, with a header line.
fn render_table(contacts: &[Contact]) -> String {
    let rows: Vec<[String; 7]> = contacts
        .iter()
        .map(|c| row(c).map(|cell| truncate_to_width(&cell, MAX_COLUMN_WIDTH)))
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    output.push_str(header.join(COLUMN_GAP).trim_end());
    output.push('\n');

    for cells in &rows {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| pad_to_width(c, *w))
            .collect();
        output.push_str(line.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }
    output
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
