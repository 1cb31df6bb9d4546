use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Raw text storage behind a serializer. `Ok(None)` means nothing has been stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read {}: {}", self.file_path.display(), err)),
            },
        }
    }

    /// Writes to a sibling temp file and renames it over the target.
    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut temp_path = self.file_path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        std::fs::write(&temp_path, content)
            .map_err(|e| format!("Failed to write {}: {}", temp_path.display(), e))?;
        std::fs::rename(&temp_path, &self.file_path)
            .map_err(|e| format!("Failed to replace {}: {}", self.file_path.display(), e))
    }
}

/// In-process storage, used when nothing should touch the disk.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
    read_only: bool,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
            read_only: false,
        }
    }

    /// Every write fails, as with an unwritable file.
    pub fn read_only(content: Option<&str>) -> Self {
        Self {
            content: Mutex::new(content.map(str::to_string)),
            read_only: true,
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().ok().and_then(|c| c.clone())
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        self.content
            .lock()
            .map(|c| c.clone())
            .map_err(|e| format!("Storage lock poisoned: {}", e))
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if self.read_only {
            return Err("Storage is read-only".to_string());
        }
        let mut current = self
            .content
            .lock()
            .map_err(|e| format!("Storage lock poisoned: {}", e))?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_content_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_file_write_then_read() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        provider.set_config_content("score: 1\n").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("score: 1\n".to_string())));
        provider.set_config_content("score: 2\n").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("score: 2\n".to_string())));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = get_temp_file_path().join("nested").join("scores.yaml");
        let provider = FileContentConfigProvider::new(path);
        assert!(provider.set_config_content("[]").is_err());
    }

    #[test]
    fn test_read_only_memory_provider_rejects_writes() {
        let provider = MemoryContentProvider::read_only(Some("[]"));
        assert!(provider.set_config_content("- 1").is_err());
        assert_eq!(provider.content(), Some("[]".to_string()));
    }
}
