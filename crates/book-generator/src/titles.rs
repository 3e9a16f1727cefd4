//! Title source backed by a plain text file, one title per line.

use crate::error::GeneratorError;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Titles written when the title file does not exist yet.
pub const DEFAULT_TITLES: [&str; 5] = [
    "Мёртвые души",
    "Моби Дик",
    "Хазарский словарь",
    "В чаще",
    "Сон",
];

/// Create the title file with [`DEFAULT_TITLES`] if it is missing.
///
/// Returns `true` when the file was created. An existing file is left
/// untouched, whatever it contains.
pub fn ensure_default_titles<P: AsRef<Path>>(path: P) -> Result<bool, GeneratorError> {
    let path = path.as_ref();
    if path.exists() {
        debug!("Title file '{}' already exists", path.display());
        return Ok(false);
    }

    info!(
        "Title file '{}' not found, writing {} default titles",
        path.display(),
        DEFAULT_TITLES.len()
    );

    let content: String = DEFAULT_TITLES
        .iter()
        .map(|title| format!("{title}\n"))
        .collect();
    fs::write(path, content)?;

    Ok(true)
}

/// Read the title file into a [`TitleSource`].
pub fn load_titles<P: AsRef<Path>>(path: P) -> Result<TitleSource, GeneratorError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let titles: Vec<String> = content.lines().map(str::to_owned).collect();

    debug!("Loaded {} titles from '{}'", titles.len(), path.display());

    if titles.is_empty() {
        return Err(GeneratorError::EmptyTitleSource(path.to_path_buf()));
    }
    Ok(TitleSource { titles })
}

/// Non-empty list of titles to draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSource {
    titles: Vec<String>,
}

impl TitleSource {
    /// Build a title source from an in-memory list.
    pub fn new(titles: Vec<String>) -> Result<Self, GeneratorError> {
        if titles.is_empty() {
            return Err(GeneratorError::EmptyTitleSource("<memory>".into()));
        }
        Ok(Self { titles })
    }

    /// Pick one title uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        &self.titles[rng.random_range(0..self.titles.len())]
    }

    /// All titles, in file order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of titles, duplicates included.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Always `false`: an empty source cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gets_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");

        assert!(ensure_default_titles(&path).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Мёртвые души\nМоби Дик\nХазарский словарь\nВ чаще\nСон\n"
        );

        let source = load_titles(&path).unwrap();
        assert_eq!(source.titles(), DEFAULT_TITLES.map(String::from).as_slice());
    }

    #[test]
    fn test_existing_file_is_not_modified() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");
        fs::write(&path, "Сон\n").unwrap();

        assert!(!ensure_default_titles(&path).unwrap());
        assert!(!ensure_default_titles(&path).unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "Сон\n");
    }

    #[test]
    fn test_load_strips_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");
        fs::write(&path, "Моби Дик\nВ чаще").unwrap();

        let source = load_titles(&path).unwrap();
        assert_eq!(source.titles(), ["Моби Дик".to_string(), "В чаще".to_string()]);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");
        fs::write(&path, "").unwrap();

        let result = load_titles(&path);
        assert!(matches!(result, Err(GeneratorError::EmptyTitleSource(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_titles(temp_dir.path().join("absent.txt"));
        assert!(matches!(result, Err(GeneratorError::Io(_))));
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(TitleSource::new(vec![]).is_err());
    }

    #[test]
    fn test_pick_from_source() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = TitleSource::new(DEFAULT_TITLES.map(String::from).to_vec()).unwrap();

        for _ in 0..100 {
            let title = source.pick(&mut rng);
            assert!(DEFAULT_TITLES.contains(&title));
        }
    }
}
