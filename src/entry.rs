//! Defines the [`Entry`] type, which represents one member of the roster on
//! its way to becoming an HTML fragment.

use gtmpl::Value;
use std::collections::HashMap;

const IMAGE_EXTENSION: &str = ".jpg";

/// A single roster member. Entries have no identity beyond their position in
/// the roster; they are built in one pass and consumed immediately by the
/// [`crate::write::Writer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The portrait's filename exactly as it appears in the roster. This is
    /// used unmodified in the image URL.
    pub raw_filename: String,

    /// The filename without its image extension. This is both the heading and
    /// the image's `alt` text.
    pub display_name: String,

    /// The 1-based position of the entry in the roster.
    pub sequence_number: usize,
}

impl Entry {
    /// Builds the entry for the filename at the 0-based `index` of the roster.
    pub fn new(index: usize, raw_filename: &str) -> Entry {
        Entry {
            raw_filename: raw_filename.to_owned(),
            display_name: display_name(raw_filename).to_owned(),
            sequence_number: index + 1,
        }
    }

    /// Returns the bracketed, zero-padded sequence token, e.g. `[[007]]`.
    pub fn sequence_token(&self) -> String {
        format!("[[{:03}]]", self.sequence_number)
    }

    /// Returns the image URL for the entry given the assets prefix (e.g.
    /// `/assets/pics/`).
    pub fn image_src(&self, assets_prefix: &str) -> String {
        format!("{}{}", assets_prefix, self.raw_filename)
    }

    /// Converts the entry into a [`Value`] for templating. The result is a
    /// [`Value::Object`] with fields `src`, `display_name`, `number` and
    /// `role`.
    pub fn to_value(&self, assets_prefix: &str, role: &str) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert(
            "src".to_owned(),
            Value::String(self.image_src(assets_prefix)),
        );
        m.insert(
            "display_name".to_owned(),
            Value::String(self.display_name.clone()),
        );
        m.insert("number".to_owned(), Value::String(self.sequence_token()));
        m.insert("role".to_owned(), Value::String(role.to_owned()));
        Value::Object(m)
    }
}

/// Strips the image extension from a filename. Filenames without the
/// extension are returned whole.
pub fn display_name(raw_filename: &str) -> &str {
    raw_filename
        .strip_suffix(IMAGE_EXTENSION)
        .unwrap_or(raw_filename)
}

/// Numbers a list of filenames in order.
pub fn entries<S: AsRef<str>>(files: &[S]) -> impl Iterator<Item = Entry> + '_ {
    files
        .iter()
        .enumerate()
        .map(|(i, file)| Entry::new(i, file.as_ref()))
}
