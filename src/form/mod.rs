pub mod controller;
pub mod fields;
pub mod schema;

use std::collections::BTreeMap;

/// Nilai form mentah, di-key dengan nama field pada payload JSON.
pub type FormValues = BTreeMap<&'static str, String>;
