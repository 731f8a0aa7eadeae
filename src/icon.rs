use anyhow::{anyhow, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// An icon file decoded to raw RGBA pixels, ready to hand to a windowing
/// library.
#[derive(Debug)]
pub struct LoadedIcon {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

pub fn load_icon(path: &Path) -> Result<LoadedIcon> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let (rgba, width, height) = match extension.as_str() {
        "ico" => load_ico(path)?,
        _ => load_standard(path)?,
    };

    Ok(LoadedIcon {
        rgba,
        width,
        height,
        path: path.to_path_buf(),
    })
}

fn load_standard(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok((img.into_raw(), width, height))
}

fn load_ico(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let file = File::open(path)?;
    let icon_dir = ico::IconDir::read(BufReader::new(file))?;

    // An .ico can carry several sizes; take the largest
    let entry = icon_dir
        .entries()
        .iter()
        .max_by_key(|e| e.width())
        .ok_or_else(|| anyhow!("No images in icon file"))?;
    let image = entry.decode()?;

    Ok((image.rgba_data().to_vec(), image.width(), image.height()))
}

impl LoadedIcon {
    pub fn into_window_icon(self) -> Result<winit::window::Icon> {
        Ok(winit::window::Icon::from_rgba(
            self.rgba,
            self.width,
            self.height,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_rgba(width: u32, height: u32) -> Vec<u8> {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        rgba
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let rgba = checker_rgba(8, 8);
        image::RgbaImage::from_raw(8, 8, rgba.clone())
            .unwrap()
            .save(&path)
            .unwrap();

        let icon = load_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (8, 8));
        assert_eq!(icon.rgba, rgba);
        assert_eq!(icon.path, path);
    }

    #[test]
    fn test_load_ico_picks_largest_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.ico");

        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for size in [16u32, 48, 32] {
            let image = ico::IconImage::from_rgba_data(size, size, checker_rgba(size, size));
            icon_dir.add_entry(ico::IconDirEntry::encode(&image).unwrap());
        }
        icon_dir.write(File::create(&path).unwrap()).unwrap();

        let icon = load_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (48, 48));
        assert_eq!(icon.rgba.len(), 48 * 48 * 4);
    }

    #[test]
    fn test_load_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(load_icon(&path).is_err());
    }

    #[test]
    fn test_into_window_icon() {
        let icon = LoadedIcon {
            rgba: checker_rgba(16, 16),
            width: 16,
            height: 16,
            path: PathBuf::from("icon.png"),
        };
        assert!(icon.into_window_icon().is_ok());
    }

    #[test]
    fn test_into_window_icon_rejects_short_buffer() {
        let icon = LoadedIcon {
            rgba: vec![0; 7],
            width: 16,
            height: 16,
            path: PathBuf::from("icon.png"),
        };
        assert!(icon.into_window_icon().is_err());
    }
}
