// STD Dependencies -----------------------------------------------------------
use std::path::{Path, PathBuf};


// Zeal File Kinds ------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Tileset,
    Palette,
    Tilemap
}

impl FileKind {
    fn suffix(self) -> char {
        match self {
            FileKind::Tileset => 's',
            FileKind::Palette => 'p',
            FileKind::Tilemap => 'm'
        }
    }
}

/// A Zeal file extension such as `zts` or the compressed `zcts`, parsed once
/// so the rest of the tool deals with typed flags only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZealFormat {
    pub kind: FileKind,
    pub compressed: bool
}

impl ZealFormat {

    pub fn new(kind: FileKind, compressed: bool) -> Self {
        Self {
            kind,
            compressed
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let (compressed, rest) = match ext.strip_prefix("zc") {
            Some(rest) => (true, rest.to_string()),
            None => (false, ext.strip_prefix('z')?.to_string())
        };
        let kind = match rest.as_str() {
            "ts" => FileKind::Tileset,
            "tp" => FileKind::Palette,
            "tm" => FileKind::Tilemap,
            _ => return None
        };
        Some(Self::new(kind, compressed))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|e| e.to_str()).and_then(Self::from_extension)
    }

    pub fn extension(&self) -> String {
        format!("z{}t{}", if self.compressed { "c" } else { "" }, self.kind.suffix())
    }

    /// Derives a sibling output path, e.g. `tiles.gif` into `tiles.zcts`.
    pub fn sibling_of(&self, path: &Path) -> PathBuf {
        path.with_extension(self.extension())
    }

}

/// Appends numeric suffixes to a file stem, e.g. `level.ztm` into
/// `level-1-3.ztm`.
pub fn numbered(path: &Path, indices: &[usize]) -> PathBuf {
    if indices.is_empty() {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    let suffix: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    let mut name = format!("{}-{}", stem, suffix.join("-"));
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}


#[cfg(test)]
mod test {

    use std::path::{Path, PathBuf};
    use super::{numbered, FileKind, ZealFormat};

    #[test]
    fn test_from_extension() {
        assert_eq!(ZealFormat::from_extension("zts"), Some(ZealFormat::new(FileKind::Tileset, false)));
        assert_eq!(ZealFormat::from_extension("zcts"), Some(ZealFormat::new(FileKind::Tileset, true)));
        assert_eq!(ZealFormat::from_extension("ZCTM"), Some(ZealFormat::new(FileKind::Tilemap, true)));
        assert_eq!(ZealFormat::from_extension("ztp"), Some(ZealFormat::new(FileKind::Palette, false)));
        assert_eq!(ZealFormat::from_extension("zip"), None);
        assert_eq!(ZealFormat::from_extension("gif"), None);
        assert_eq!(ZealFormat::from_path(Path::new("out/level.zctm")).map(|f| f.compressed), Some(true));
    }

    #[test]
    fn test_extension_round_trip() {
        for ext in ["zts", "zcts", "ztp", "zctp", "ztm", "zctm"].iter() {
            assert_eq!(&ZealFormat::from_extension(ext).unwrap().extension(), ext);
        }
    }

    #[test]
    fn test_sibling_of() {
        let format = ZealFormat::new(FileKind::Tileset, true);
        assert_eq!(format.sibling_of(Path::new("gfx/tiles.gif")), PathBuf::from("gfx/tiles.zcts"));
    }

    #[test]
    fn test_numbered() {
        assert_eq!(numbered(Path::new("maps/level.ztm"), &[1, 3]), PathBuf::from("maps/level-1-3.ztm"));
        assert_eq!(numbered(Path::new("level.ztm"), &[]), PathBuf::from("level.ztm"));
        assert_eq!(numbered(Path::new("level"), &[0]), PathBuf::from("level-0"));
    }

}
