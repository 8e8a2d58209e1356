use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::texture_loader::load_sorted_image_paths;

/// Where the carousel's image list comes from, decided once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Explicit(Vec<String>), // Identifiers, resolved against the base folder
    Generated(PathBuf),    // Every image found in a directory
    Fallback,              // Nothing configured, generated placeholders
}

impl ImageSource {
    /// A directory wins over an explicit list; neither means fallback.
    pub fn select(identifiers: Vec<String>, dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => ImageSource::Generated(dir),
            None if !identifiers.is_empty() => ImageSource::Explicit(identifiers),
            None => ImageSource::Fallback,
        }
    }

    pub fn catalog(&self, base: &str, fallback_count: usize) -> Result<Catalog, LoadError> {
        let entries = match self {
            ImageSource::Explicit(identifiers) => identifiers
                .iter()
                .map(|id| {
                    let local = decode_identifier(id);
                    let local = with_base(&local, base);
                    Entry {
                        load: Some(local.clone()),
                        target: Some(encode_uri(&local)),
                    }
                })
                .collect(),
            ImageSource::Generated(dir) => load_sorted_image_paths(dir)?
                .into_iter()
                .map(|path| {
                    let path = path.to_string_lossy().into_owned();
                    Entry { target: Some(encode_uri(&path)), load: Some(path) }
                })
                .collect(),
            ImageSource::Fallback => (0..fallback_count)
                .map(|_| Entry { load: None, target: None })
                .collect(),
        };
        Ok(Catalog { entries })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    load: Option<String>,   // Filesystem path, None for generated placeholders
    target: Option<String>, // URI-encoded path handed to the detail page
}

/// Maps a carousel index to the resolved path of its image.
pub trait PathResolver {
    fn resolve(&self, index: usize) -> Option<String>;
}

/// The resolved image list, in carousel order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filesystem path to load for each slot, relative to `root`.
    pub fn load_paths(&self, root: &Path) -> Vec<Option<PathBuf>> {
        self.entries
            .iter()
            .map(|e| {
                e.load.as_ref().map(|p| if is_url(p) { PathBuf::from(p) } else { root.join(p) })
            })
            .collect()
    }
}

impl PathResolver for Catalog {
    fn resolve(&self, index: usize) -> Option<String> {
        // An unknown index resolves like the first entry
        self.entries
            .get(index)
            .or_else(|| self.entries.first())
            .and_then(|e| e.target.clone())
    }
}

/// True for `http://` and `https://` URLs, which cannot be loaded from disk.
pub fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Percent-decodes an identifier, keeping it untouched when that fails.
pub fn decode_identifier(id: &str) -> String {
    match urlencoding::decode(id) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::debug!("Keeping undecodable identifier {:?}: {}", id, e);
            id.to_string()
        }
    }
}

fn with_base(name: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    // Any `http` prefix counts here, matching how identifiers were written
    if name.starts_with("http") || name.starts_with('/') || base.is_empty() || name.starts_with(&format!("{}/", base)) {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

// Left as-is when URI-encoding a whole path
fn keeps_in_uri(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_.!~*'();/?:@&=+$,#".contains(c)
}

/// Percent-encodes a full path or URL, keeping URI delimiters intact.
pub fn encode_uri(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    let mut buf = [0u8; 4];
    for c in path.chars() {
        if keeps_in_uri(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}
