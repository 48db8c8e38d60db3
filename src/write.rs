//! Renders [`Entry`]s through the fragment template and writes the result to
//! disk.

use crate::entry::{entries, Entry};
use gtmpl::{Context, Template};
use std::fmt;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// The HTML fragment emitted for each roster entry. The leading newline and
/// the indentation are part of the output.
pub const FRAGMENT_TEMPLATE: &str = r#"
                <article class="team-member">
                    <div class="team-member-image">
                        <div class="image-container">
                            <img src="{{.src}}" alt="{{.display_name}}" style="width:100%; height:100%; object-fit:cover;">
                            <div class="pixelate-overlay"></div>
                        </div>
                        <div class="member-number">{{.number}}</div>
                    </div>
                    <div class="team-member-info">
                        <h3 class="team-member-name">{{.display_name}}</h3>
                        <p class="team-member-role">{{.role}}</p>
                    </div>
                </article>
"#;

/// Responsible for templating roster entries and writing the page fragment
/// to disk.
pub struct Writer<'a> {
    /// The parsed fragment template.
    template: Template,

    /// The URL prefix for portrait images. Each image's `src` is
    /// `{assets_prefix}{filename}`.
    pub assets_prefix: &'a str,

    /// The role label shown under every member's name.
    pub role: &'a str,
}

impl<'a> Writer<'a> {
    /// Parses [`FRAGMENT_TEMPLATE`] and returns a writer for it.
    pub fn new(assets_prefix: &'a str, role: &'a str) -> Result<Writer<'a>> {
        let mut template = Template::default();
        template
            .parse(FRAGMENT_TEMPLATE)
            .map_err(Error::Template)?;
        Ok(Writer {
            template,
            assets_prefix,
            role,
        })
    }

    /// Renders a single [`Entry`] into its fragment.
    pub fn render_entry(&self, entry: &Entry) -> Result<String> {
        debug!(
            number = entry.sequence_number,
            name = %entry.display_name,
            "rendering entry"
        );
        let value = entry.to_value(self.assets_prefix, self.role);
        Ok(self.template.render(&Context::from(value)?)?)
    }

    /// Renders every file in `files`, in order, and returns the
    /// concatenated fragments.
    pub fn render<S: AsRef<str>>(&self, files: &[S]) -> Result<String> {
        let mut output = String::new();
        for entry in entries(files) {
            output.push_str(&self.render_entry(&entry)?);
        }
        Ok(output)
    }

    /// Renders `files` and writes the result to `path`, replacing any
    /// existing file. The parent directory must already exist.
    pub fn write_roster<S: AsRef<str>>(&self, files: &[S], path: &Path) -> Result<()> {
        let output = self.render(files)?;
        std::fs::write(path, &output).map_err(|err| Error::Io {
            path: path.display().to_string(),
            err,
        })?;
        info!(
            path = %path.display(),
            members = files.len(),
            bytes = output.len(),
            "wrote roster"
        );
        Ok(())
    }
}

/// The result of a fallible rendering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a rendering operation.
#[derive(Debug)]
pub enum Error {
    /// An error during templating.
    Template(String),

    /// An error writing the output file.
    Io { path: String, err: io::Error },
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`]. This
    /// allows us to use the `?` operator for fallible template operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => write!(f, "Rendering fragment: {}", err),
            Error::Io { path, err } => write!(f, "Writing '{}': {}", path, err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(_) => None,
            Error::Io { path: _, err } => Some(err),
        }
    }
}
