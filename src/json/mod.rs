//! JSON collaborators: file I/O, canonical text and digests, property access

pub mod access;
pub mod canonical;
pub mod io;

pub use access::{append_value, copy_properties, get_first_item, get_list, get_path, PropertySpec};
pub use canonical::{sha1_hex, to_canonical_string, to_item_string};
pub use io::{load_json, load_json_lines, read_lines, to_debug_string, write_items, write_json, write_lines};
