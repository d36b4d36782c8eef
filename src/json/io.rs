//! Reading and writing JSON documents, JSON-lines files and plain lines

use super::canonical::Spaced;
use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load one JSON document from a UTF-8 file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Trimmed lines of a text file, skipping empty and comment lines as
/// configured.
pub fn read_lines(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Vec<String>> {
    Ok(numbered_lines(path, config)?.into_iter().map(|(_, line)| line).collect())
}

/// Parse every kept line of a JSON-lines file.
pub fn load_json_lines(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Vec<Value>> {
    numbered_lines(path, config)?
        .into_iter()
        .map(|(line, text)| {
            serde_json::from_str(&text).map_err(|e| Error::Parse { line, message: e.to_string() })
        })
        .collect()
}

fn numbered_lines(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Vec<(usize, String)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if config.skip_empty_lines && trimmed.is_empty() {
            continue;
        }
        if let Some(prefix) = config.comment_prefix.as_deref() {
            if !prefix.is_empty() && trimmed.starts_with(prefix) {
                continue;
            }
        }
        lines.push((idx + 1, trimmed.to_string()));
    }
    Ok(lines)
}

/// Indented (four spaces), key-sorted JSON text.
pub fn to_debug_string<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, data)?;
    String::from_utf8(buf).map_err(|e| Error::InvalidInput(e.to_string()))
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, data: &T) -> Result<()> {
    // going through Value sorts the keys of struct output as well
    let value = serde_json::to_value(data)?;
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write `data` as indented, key-sorted JSON.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_pretty(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

/// Write one string per line.
pub fn write_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one key-sorted JSON value per line, appending when asked.
pub fn write_items<'a, I>(path: impl AsRef<Path>, items: I, append: bool) -> Result<()>
where
    I: IntoIterator<Item = &'a Value>,
{
    let file = OpenOptions::new().create(true).write(true).append(append).truncate(!append).open(path)?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writeln!(writer, "{}", Spaced::item(item))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;
    use serde_json::json;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kgtool_io_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_debug_string_is_sorted_and_indented() {
        let mut table = FrequencyTable::new();
        table.increment("p_b");
        table.increment("p_a");
        let text = to_debug_string(&table).unwrap();
        assert_eq!(text, "{\n    \"p_a\": 1,\n    \"p_b\": 1\n}");
    }

    #[test]
    fn test_read_lines_skips_comments_and_blanks() {
        let dir = scratch("lines");
        let path = dir.join("input.txt");
        fs::write(&path, "# header\n  first  \n\n#skip\nsecond\n").unwrap();

        let lines = read_lines(&path, &ReaderConfig::default()).unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);

        let keep_all = ReaderConfig { comment_prefix: None, skip_empty_lines: false };
        assert_eq!(read_lines(&path, &keep_all).unwrap().len(), 5);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_lines_reports_line_number() {
        let dir = scratch("jsonl");
        let path = dir.join("bad.jsonl");
        fs::write(&path, "{\"a\": 1}\n\n{\"a\": \n").unwrap();

        match load_json_lines(&path, &ReaderConfig::default()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_items_append() {
        let dir = scratch("items");
        let path = dir.join("items.jsonl");
        write_items(&path, &[json!({"b": 1, "a": "抒情"})], false).unwrap();
        write_items(&path, &[json!([1, 2])], true).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\"a\": \"抒情\", \"b\": 1}\n[1, 2]\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_then_load_json() {
        let dir = scratch("json");
        let path = dir.join("doc.json");
        let doc = json!({"name": "Alice", "tags": ["x"]});
        write_json(&path, &doc).unwrap();
        assert_eq!(load_json(&path).unwrap(), doc);

        write_lines(dir.join("plain.txt"), ["a", "b"]).unwrap();
        assert_eq!(fs::read_to_string(dir.join("plain.txt")).unwrap(), "a\nb\n");
        let _ = fs::remove_dir_all(&dir);
    }
}
