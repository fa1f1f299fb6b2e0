use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::FRAME_EXTENSIONS;
use crate::error::{Result, StarstackError};

/// List the frame files of `dir` in lexicographic filename order.
///
/// Only regular files with a supported extension are returned. The first
/// entry is the alignment reference. An empty result is an error.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut frames = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_frame_file(&path) {
            frames.push(path);
        }
    }

    if frames.is_empty() {
        return Err(StarstackError::NoFrames {
            dir: dir.to_path_buf(),
        });
    }

    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = frames.len(), dir = %dir.display(), "Listed frames");
    Ok(frames)
}

/// True when `path` carries one of the accepted frame extensions (case-insensitive).
pub fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            FRAME_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_frame_file() {
        assert!(is_frame_file(Path::new("a/light_001.tif")));
        assert!(is_frame_file(Path::new("light_001.TIFF")));
        assert!(is_frame_file(Path::new("light.png")));
        assert!(!is_frame_file(Path::new("notes.txt")));
        assert!(!is_frame_file(Path::new("noext")));
    }
}
