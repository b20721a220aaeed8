//! Font lookup and selection with fallback to the built-in font.

use std::fmt;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};

use crate::adapters::builtin::BuiltinFont;
use crate::adapters::truetype::TrueTypeFont;
use crate::error::FontError;
use crate::ports::LabelFont;

/// How deep to descend into font directories (e.g. `truetype/dejavu/`).
const MAX_SEARCH_DEPTH: usize = 4;

/// Which font actually ended up rendering the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType font loaded from this path.
    Named(PathBuf),
    /// The built-in bitmap font.
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("built-in font"),
        }
    }
}

/// The font chosen for a generation run.
pub struct SelectedFont {
    /// Font used to measure and draw the label.
    pub font: Box<dyn LabelFont>,
    /// Where the font came from.
    pub source: FontSource,
}

/// Select the named font at `size`, falling back to the built-in font.
///
/// Any failure to locate or load the named font results in the fallback;
/// this never fails.
#[must_use]
pub fn select_font(name: &str, size: f32) -> SelectedFont {
    match locate_font(name).and_then(|path| TrueTypeFont::load(&path, size)) {
        Ok(font) => {
            tracing::debug!(font = %font.path().display(), "using named font");
            let source = FontSource::Named(font.path().to_path_buf());
            SelectedFont { font: Box::new(font), source }
        }
        Err(e) => {
            tracing::warn!(requested = name, reason = %e, "falling back to built-in font");
            SelectedFont { font: Box::new(BuiltinFont::new(size)), source: FontSource::Builtin }
        }
    }
}

/// Resolve a font name to a file path.
///
/// A name that points at an existing file is used as-is. Otherwise the
/// system and user font directories are searched for a file with a
/// matching name (case-insensitive). Names without an extension also
/// match `.ttf` and `.otf` files.
///
/// # Errors
///
/// Returns [`FontError::NotFound`] if no matching file exists.
pub fn locate_font(name: &str) -> Result<PathBuf, FontError> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let candidates = candidate_file_names(name);
    font_dirs()
        .iter()
        .find_map(|dir| search_dir(dir, &candidates, MAX_SEARCH_DEPTH))
        .ok_or_else(|| FontError::NotFound(name.to_string()))
}

fn candidate_file_names(name: &str) -> Vec<String> {
    let lower = name.to_ascii_lowercase();
    if Path::new(name).extension().is_some() {
        vec![lower]
    } else {
        vec![format!("{lower}.ttf"), format!("{lower}.otf")]
    }
}

/// Directories searched for fonts, most specific first.
fn font_dirs() -> Vec<PathBuf> {
    font_dirs_with(|key| std::env::var(key).ok())
}

/// Build the font directory list, reading variables through `env`.
fn font_dirs_with(env: impl Fn(&str) -> Option<String>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(fonts) = UserDirs::new().and_then(|u| u.font_dir().map(Path::to_path_buf)) {
        dirs.push(fonts);
    }
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.home_dir().join(".fonts"));
    }

    let data_dirs = env("XDG_DATA_DIRS")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    dirs.extend(data_dirs.split(':').filter(|d| !d.is_empty()).map(|d| Path::new(d).join("fonts")));

    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));

    let windir = env("WINDIR").unwrap_or_else(|| r"C:\Windows".to_string());
    dirs.push(Path::new(&windir).join("Fonts"));

    dirs
}

fn search_dir(dir: &Path, candidates: &[String], depth: usize) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|n| candidates.contains(&n))
        {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }
    subdirs.sort();
    subdirs.iter().find_map(|sub| search_dir(sub, candidates, depth - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_with_extension() {
        assert_eq!(candidate_file_names("Arial.TTF"), vec!["arial.ttf"]);
    }

    #[test]
    fn candidates_without_extension() {
        assert_eq!(candidate_file_names("DejaVuSans"), vec!["dejavusans.ttf", "dejavusans.otf"]);
    }

    #[test]
    fn font_dirs_follow_xdg_data_dirs() {
        let dirs = font_dirs_with(|key| match key {
            "XDG_DATA_DIRS" => Some("/opt/share::/srv/data".to_string()),
            _ => None,
        });
        assert!(dirs.contains(&PathBuf::from("/opt/share/fonts")));
        assert!(dirs.contains(&PathBuf::from("/srv/data/fonts")));
        assert!(!dirs.contains(&PathBuf::from("/usr/share/fonts")));
        assert_eq!(dirs.last(), Some(&Path::new(r"C:\Windows").join("Fonts")));
    }

    #[test]
    fn font_dirs_default_data_dirs() {
        let dirs = font_dirs_with(|_| None);
        assert!(dirs.contains(&PathBuf::from("/usr/local/share/fonts")));
        assert!(dirs.contains(&PathBuf::from("/usr/share/fonts")));
        assert!(dirs.contains(&PathBuf::from("/Library/Fonts")));
    }

    #[test]
    fn font_dirs_reads_process_environment() {
        assert!(!font_dirs().is_empty());
    }

    #[test]
    fn locate_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ttf");
        std::fs::write(&path, b"x").unwrap();

        assert_eq!(locate_font(path.to_str().unwrap()).unwrap(), path);
    }

    #[test]
    fn search_finds_nested_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("acme");
        std::fs::create_dir_all(&nested).unwrap();
        let path = nested.join("AcmeSans.TTF");
        std::fs::write(&path, b"x").unwrap();

        let found = search_dir(dir.path(), &candidate_file_names("acmesans"), MAX_SEARCH_DEPTH);
        assert_eq!(found, Some(path));
    }

    #[test]
    fn search_respects_depth() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("deep.ttf"), b"x").unwrap();

        assert!(search_dir(dir.path(), &candidate_file_names("deep.ttf"), 1).is_none());
        assert!(search_dir(dir.path(), &candidate_file_names("deep.ttf"), 2).is_some());
    }

    #[test]
    fn missing_font_is_not_found() {
        let err = locate_font("no-such-font-4f2a9c.ttf").unwrap_err();
        assert!(matches!(err, FontError::NotFound(_)));
    }

    #[test]
    fn unknown_font_falls_back_to_builtin() {
        let selected = select_font("no-such-font-4f2a9c.ttf", 40.0);
        assert_eq!(selected.source, FontSource::Builtin);
        assert_eq!(selected.font.name(), "built-in 5x7");
    }

    #[test]
    fn invalid_font_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let selected = select_font(path.to_str().unwrap(), 40.0);
        assert_eq!(selected.source, FontSource::Builtin);
    }
}
