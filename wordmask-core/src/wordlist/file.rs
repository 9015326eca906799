// wordmask-core/src/wordlist/file.rs
//! Directory-backed `WordListStore`.
//!
//! Each namespace lives in `<dir>/<namespace>.words`, one word per line in
//! sorted order. Writes go to a temporary sibling file which is then renamed
//! over the original, so readers never see a half-written list.

use log::{debug, info};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::{validate_words, StoreError, WordListStore};

const WORDS_EXTENSION: &str = "words";
const TMP_SUFFIX: &str = ".tmp";

#[derive(Debug)]
pub struct FileWordList {
    dir: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileWordList {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!("Opened file word list store at {}", dir.display());
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, namespace: &str) -> Result<PathBuf, StoreError> {
        let valid = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidNamespace(namespace.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", namespace, WORDS_EXTENSION)))
    }

    fn load(&self, namespace: &str) -> Result<BTreeSet<String>, StoreError> {
        let path = self.path_for(namespace)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text
                .lines()
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeSet::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, namespace: &str, words: &BTreeSet<String>) -> Result<(), StoreError> {
        let path = self.path_for(namespace)?;
        let tmp = path.with_extension(format!("{}{}", WORDS_EXTENSION, TMP_SUFFIX));
        {
            let mut file = fs::File::create(&tmp)?;
            for w in words {
                writeln!(file, "{}", w)?;
            }
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        debug!("Wrote {} words to {}", words.len(), path.display());
        Ok(())
    }

    fn modify<F>(&self, namespace: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeSet<String>),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut words = self.load(namespace)?;
        f(&mut words);
        self.save(namespace, &words)
    }
}

impl WordListStore for FileWordList {
    fn count(&self, namespace: &str) -> Result<usize, StoreError> {
        Ok(self.load(namespace)?.len())
    }

    fn get(&self, namespace: &str, count: usize, offset: usize) -> Result<Vec<String>, StoreError> {
        Ok(self
            .load(namespace)?
            .into_iter()
            .skip(offset)
            .take(count)
            .collect())
    }

    fn set(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        validate_words(words)?;
        self.modify(namespace, |set| set.extend(words.iter().cloned()))
    }

    fn delete(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        self.modify(namespace, |set| {
            for w in words {
                set.remove(w);
            }
        })
    }

    fn replace(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        validate_words(words)?;
        self.modify(namespace, |set| *set = words.iter().cloned().collect())
    }

    fn empty(&self, namespace: &str) -> Result<(), StoreError> {
        let path = self.path_for(namespace)?;
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn dump(&self, namespace: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.load(namespace)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rejects_path_like_namespaces() {
        let dir = tempdir().unwrap();
        let store = FileWordList::open(dir.path()).unwrap();
        for bad in ["", "../etc", "en/US", "en US"] {
            assert!(matches!(store.count(bad), Err(StoreError::InvalidNamespace(_))), "{bad}");
        }
    }

    #[test]
    fn test_rejects_words_with_line_breaks() {
        let dir = tempdir().unwrap();
        let store = FileWordList::open(dir.path()).unwrap();
        let err = store.set("en_US", &["a\nb".to_string()]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidWord(_)));
        assert_eq!(store.count("en_US").unwrap(), 0);
    }

    #[test]
    fn test_file_is_sorted_and_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = FileWordList::open(dir.path()).unwrap();
            store
                .set("en_US", &["puck".to_string(), "duck".to_string()])
                .unwrap();
        }
        let text = fs::read_to_string(dir.path().join("en_US.words")).unwrap();
        assert_eq!(text, "duck\npuck\n");

        let reopened = FileWordList::open(dir.path()).unwrap();
        assert_eq!(reopened.dump("en_US").unwrap(), vec!["duck", "puck"]);
    }
}
