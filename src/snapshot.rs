use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Plain-text rendering of a terminal buffer, one line per row with trailing
/// blanks removed. Wide glyphs occupy their own width, not one cell each.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut x = area.left();
        while x < area.right() {
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            x = x.saturating_add(symbol.width().max(1) as u16);
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

pub fn snapshot_file_name(now: DateTime<Local>) -> String {
    format!("dashboard-{}.txt", now.format("%Y%m%d-%H%M%S-%3f"))
}

/// Write `text` into `dir`, staging through a temp file so a failed write
/// never leaves a half-written snapshot behind.
pub fn save(dir: &Path, text: &str, now: DateTime<Local>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(snapshot_file_name(now));
    let tmp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;

    fs::rename(&tmp_path, &path)?;
    Ok(path)
}
