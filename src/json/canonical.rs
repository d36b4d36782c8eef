//! Canonical JSON text and content digests
//!
//! The canonical form sorts object keys, separates items with `", "` and
//! keys from values with `": "`, and escapes every non-ASCII character as
//! `\uXXXX`. Digests computed over it stay comparable with fingerprints
//! stored by earlier tooling.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::fmt;
use std::io;

/// Formatter producing `", "` / `": "` separated single-line JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter {
    /// Escape non-ASCII characters as UTF-16 `\uXXXX` units
    pub ascii_only: bool,
}

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ascii_only || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Bridges `io::Write` output of the serializer into a `fmt::Formatter`.
struct FmtWriter<'a, 'b> {
    inner: &'a mut fmt::Formatter<'b>,
}

impl io::Write for FmtWriter<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.inner.write_str(s).map_err(|_| io::Error::new(io::ErrorKind::Other, "formatter error"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Displays a value with a [`SpacedFormatter`].
#[derive(Debug, Clone, Copy)]
pub struct Spaced<'a> {
    value: &'a Value,
    ascii_only: bool,
}

impl<'a> Spaced<'a> {
    /// Canonical form, non-ASCII escaped.
    pub fn canonical(value: &'a Value) -> Self {
        Spaced { value, ascii_only: true }
    }

    /// Line form used for JSON-lines output, non-ASCII kept.
    pub fn item(value: &'a Value) -> Self {
        Spaced { value, ascii_only: false }
    }
}

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let writer = FmtWriter { inner: f };
        let mut ser =
            Serializer::with_formatter(writer, SpacedFormatter { ascii_only: self.ascii_only });
        self.value.serialize(&mut ser).map_err(|_| fmt::Error)
    }
}

pub fn to_canonical_string(value: &Value) -> String {
    Spaced::canonical(value).to_string()
}

pub fn to_item_string(value: &Value) -> String {
    Spaced::item(value).to_string()
}

/// Lowercase hex SHA-1 of a value. Strings are hashed as their raw text,
/// everything else through its canonical form.
pub fn sha1_hex(value: &Value) -> String {
    let digest = match value {
        Value::String(s) => Sha1::digest(s.as_bytes()),
        other => Sha1::digest(to_canonical_string(other).as_bytes()),
    };
    format!("{:x}", digest)
}
