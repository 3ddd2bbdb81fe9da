use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound: String,
    pub sent_at: DateTime<Local>,
}

pub fn history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nsnotify")
        .join("history.json")
}

pub fn append_entry_to(path: &Path, entry: &HistoryEntry) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut json = serde_json::to_string(entry)?;
    json.push('\n');
    file.write_all(json.as_bytes())?;
    Ok(())
}

pub fn read_entries_from(path: &Path) -> Vec<HistoryEntry> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };
    contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect()
}

pub fn print_summary() {
    let entries = read_entries_from(&history_path());
    if entries.is_empty() {
        println!("No notifications sent yet.");
        return;
    }

    let now = Local::now();
    let today = now.date_naive();
    let days_since_monday = now.weekday().num_days_from_monday();
    let week_start = today - chrono::Duration::days(days_since_monday as i64);

    let today_entries: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|e| e.sent_at.date_naive() == today)
        .collect();

    let week_entries: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|e| e.sent_at.date_naive() >= week_start)
        .collect();

    print_section("Today", &today_entries);
    println!();
    print_section("This week", &week_entries);
}

fn count_by_title<'a>(entries: &[&'a HistoryEntry]) -> Vec<(&'a str, usize)> {
    let mut by_title: HashMap<&str, usize> = HashMap::new();
    for e in entries {
        let title = if e.title.is_empty() { "(untitled)" } else { e.title.as_str() };
        *by_title.entry(title).or_insert(0) += 1;
    }

    let mut titles: Vec<_> = by_title.into_iter().collect();
    titles.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    titles
}

fn print_section(title: &str, entries: &[&HistoryEntry]) {
    let count = entries.len();
    println!(
        "{title} ({count} notification{}):",
        if count == 1 { "" } else { "s" }
    );

    if entries.is_empty() {
        println!("  (none)");
        return;
    }

    for (name, count) in count_by_title(entries) {
        println!("  {name:<24} x{count}");
    }
}
