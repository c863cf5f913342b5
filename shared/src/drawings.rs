use serde::{Deserialize, Serialize};

pub const DRAWINGS_ROUTE: &str = "/drawings";
pub const MANIFEST_ROUTE: &str = "/api/drawings";

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// A preset picture the user can load onto the surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawingPreset {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawingManifest {
    pub drawings: Vec<DrawingPreset>,
}

impl DrawingPreset {
    /// Builds the preset served for `file_name`, or `None` for hidden files
    /// and anything that is not an image.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.starts_with('.') {
            return None;
        }
        let (stem, extension) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        let extension = extension.to_ascii_lowercase();
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        let name = stem.replace(['-', '_'], " ").trim().to_string();
        Some(Self {
            name: if name.is_empty() { stem.to_string() } else { name },
            url: format!("{DRAWINGS_ROUTE}/{}", encode_path_segment(file_name)),
        })
    }
}

impl DrawingManifest {
    /// Collects the presets among `file_names`, ordered by file name.
    pub fn from_file_names<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = file_names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        names.sort();
        Self {
            drawings: names
                .iter()
                .filter_map(|name| DrawingPreset::from_file_name(name))
                .collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
