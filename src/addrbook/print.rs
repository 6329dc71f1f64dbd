use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::model::AddressRecord;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const STREET_WIDTH: usize = 30;
const CITY_WIDTH: usize = 20;
const STATE_WIDTH: usize = 20;
const ZIP_WIDTH: usize = 10;
const OPT_WIDTH: usize = 3;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Bordered table of addresses. In selection mode an extra `Opt` column
/// numbers the rows from 1, matching the order the caller will index into.
pub(crate) fn print_address_table(records: &[AddressRecord], selection_mode: bool) {
    let bar = "-".repeat(92 + if selection_mode { 6 } else { 0 });

    println!("{}", bar);
    let mut header = String::from("| ");
    if selection_mode {
        header.push_str(&format!("{} | ", center_cell("Opt", OPT_WIDTH)));
    }
    header.push_str(&format!(
        "{} | {} | {} | {}|",
        pad_cell("Street", STREET_WIDTH),
        pad_cell("City", CITY_WIDTH),
        pad_cell("State", STATE_WIDTH),
        pad_cell("Zip", ZIP_WIDTH)
    ));
    println!("{}", header.bold());
    println!("{}", bar);

    for (i, record) in records.iter().enumerate() {
        let mut row = String::from("| ");
        if selection_mode {
            row.push_str(&format!("{} | ", center_cell(&(i + 1).to_string(), OPT_WIDTH)));
        }
        let address = &record.address;
        row.push_str(&format!(
            "{} | {} | {} | {}|",
            pad_cell(&address.street, STREET_WIDTH),
            pad_cell(&address.city, CITY_WIDTH),
            pad_cell(&address.state, STATE_WIDTH),
            pad_cell(&address.zip_code, ZIP_WIDTH)
        ));
        println!("{}", row);
    }

    println!("{}", bar);
    println!();
}

/// Single address in postal format.
pub(crate) fn print_address(record: &AddressRecord) {
    let address = &record.address;
    println!("{}", address.street);
    println!("{}, {} {}", address.city, address.state, address.zip_code);
}

fn pad_cell(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn center_cell(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(width - w - left))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) && s.width() > max_width {
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
    fn pad_cell_fills_to_width() {
        assert_eq!(pad_cell("abc", 5), "abc  ");
        assert_eq!(pad_cell("abc", 3), "abc");
    }

    #[test]
    fn pad_cell_truncates_overlong_values() {
        let cell = pad_cell("a very long street name indeed", 10);
        assert_eq!(cell.width(), 10);
        assert!(cell.contains('…'));
    }

    #[test]
    fn center_cell_balances_padding() {
        assert_eq!(center_cell("1", 3), " 1 ");
        assert_eq!(center_cell("10", 3), "10 ");
    }
}
