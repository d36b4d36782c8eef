//! Statistics over JSON and JSON-LD documents
//!
//! Every statistic produces a [`FrequencyTable`](crate::core::FrequencyTable)
//! whose labels are part of the output format:
//!
//! | label | meaning |
//! |---|---|
//! | `triple` | total triples of a document |
//! | `p_<predicate>` | triples reached through `<predicate>` |
//! | `tag_<value>` | entries of a `tag` array |
//! | `cnt_total` | records seen by the profiler |
//! | `cnt_key_<path>` | records with a non-empty value at `<path>` |
//! | `all`, `<field>_<value>`, `<field>_unique`, `<field>_nonempty` | field statistic |

pub mod fields;
pub mod normalize;
pub mod profile;
pub mod triples;

pub const TRIPLE_LABEL: &str = "triple";
pub const PREDICATE_PREFIX: &str = "p_";
pub const TOTAL_LABEL: &str = "cnt_total";
pub const KEY_PREFIX: &str = "cnt_key_";

pub use fields::{stat_fields, FieldStatistic};
pub use normalize::{Normalized, Normalizer};
pub use profile::{flatten, profile, sample, Profile, Profiler};
pub use triples::{count_triples, TripleCounter};
