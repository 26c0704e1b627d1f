use super::Jar;
use super::memory::Entry;
use super::memory::MemoryJar;
use std::path::Path;
use std::path::PathBuf;

/// A [`MemoryJar`] mirrored to a text file, one assignment per line.
///
/// Loading is forgiving: a missing or unreadable file is an empty jar and
/// malformed lines are skipped. Every write rewrites the whole file. If that
/// fails the in-memory jar still changes, and the failure is only logged.
#[derive(Debug, Clone)]
pub struct FileJar {
    path: PathBuf,
    jar: MemoryJar,
}

impl FileJar {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let jar = match std::fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .filter_map(|line| Entry::try_from(line).ok())
                .collect::<MemoryJar>(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MemoryJar::new(),
            Err(e) => {
                log::warn!("unreadable cookie jar {}: {}", path.display(), e);
                MemoryJar::new()
            }
        };
        log::debug!("opened cookie jar {}", path.display());
        Self { path, jar }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) {
        let text = self
            .jar
            .entries()
            .map(|entry| format!("{}\n", entry))
            .collect::<String>();
        if let Err(e) = std::fs::write(&self.path, text) {
            log::warn!("failed to write cookie jar {}: {}", self.path.display(), e);
        }
    }
}

impl Jar for FileJar {
    fn cookie(&self) -> String {
        self.jar.cookie()
    }
    fn set_cookie(&mut self, assignment: &str) {
        self.jar.set_cookie(assignment);
        self.save();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::cookie::Cookies;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let jar = FileJar::open(dir.path().join("absent.cookies"));
        assert_eq!(jar.cookie(), "");
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jar.cookies");
        let mut cookies = Cookies::new(FileJar::open(&path));
        cookies.set("a", "1", 10);
        cookies.set("b", "2", 10);
        cookies.delete("a");
        let cookies = Cookies::new(FileJar::open(&path));
        assert_eq!(cookies.get("a"), None);
        assert_eq!(cookies.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn skips_garbage_and_expired_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jar.cookies");
        std::fs::write(
            &path,
            "garbage\n\nold=1; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/\nnew=2; path=/\n",
        )
        .unwrap();
        let jar = FileJar::open(&path);
        assert_eq!(jar.cookie(), "new=2");
    }

    #[test]
    fn unwritable_path_degrades_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let mut jar = FileJar::open(dir.path().join("missing").join("jar.cookies"));
        jar.set_cookie("a=1");
        assert_eq!(jar.cookie(), "a=1");
    }
}
