use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use rand::Rng;

use crate::error::LoadError;
use crate::source::is_url;

fn is_supported(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"),
        None => false,
    }
}

// --- Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_error = |source| LoadError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        log::warn!("No image files found in directory {:?}", dir_path);
    }
    Ok(paths)
}

/// EXIF orientation tag, 1 (normal) when missing or unreadable.
fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            log::debug!("No usable EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation ---
pub fn load_image_with_exif_rotation(image_path: &Path) -> Result<Image, LoadError> {
    let path_str = image_path.to_string_lossy();
    if is_url(&path_str) {
        return Err(LoadError::Remote(path_str.into_owned()));
    }

    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::ReadFile { path: image_path.to_path_buf(), source })?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    // EXIF is only reliable for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| LoadError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped variants are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    Ok(image)
}

/// Solid-colour stand-in used when no image list is configured.
pub fn placeholder_image(width: i32, height: i32) -> Image {
    let mut rng = rand::rng();
    let color = Color::new(
        rng.random_range(40..=215),
        rng.random_range(40..=215),
        rng.random_range(40..=215),
        255,
    );
    Image::gen_image_color(width, height, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("carousel-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = scratch_dir("list");
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        fs::create_dir(dir.join("d.jpg")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.JPG", "c.gif"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = scratch_dir("empty");
        assert!(load_sorted_image_paths(&dir).unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/nonexistent/carousel/dir")).unwrap_err();
        assert!(matches!(err, LoadError::ReadDir { .. }));
    }

    #[test]
    fn remote_images_are_refused() {
        let err = load_image_with_exif_rotation(Path::new("https://example.com/a.jpg")).unwrap_err();
        assert!(matches!(err, LoadError::Remote(_)));
    }

    #[test]
    fn http_named_local_file_is_read_from_disk() {
        let err = load_image_with_exif_rotation(Path::new("/nonexistent/http_banner.jpg")).unwrap_err();
        assert!(matches!(err, LoadError::ReadFile { .. }));
    }

    #[test]
    fn unreadable_file_reports_read_error() {
        let err = load_image_with_exif_rotation(Path::new("/nonexistent/a.jpg")).unwrap_err();
        assert!(matches!(err, LoadError::ReadFile { .. }));
    }

    #[test]
    fn garbage_has_default_orientation() {
        assert_eq!(exif_orientation(b"definitely not a jpeg"), 1);
    }
}
