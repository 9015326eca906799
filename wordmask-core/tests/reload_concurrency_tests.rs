// wordmask-core/tests/reload_concurrency_tests.rs
//! Sanitize calls racing against reloads must always see one complete engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use test_log::test;

use wordmask_core::{EngineKind, FilterHandle, FilterRegistry, MemoryWordList, WordListStore};

const READERS: usize = 8;
const RELOADS: usize = 200;

const TEXT: &str = "alpha beta gamma delta";
const WITH_FIRST: &str = "***** **** gamma delta";
const WITH_SECOND: &str = "alpha beta ***** *****";

fn race(kind: EngineKind) {
    let handle = Arc::new(FilterHandle::with_words(kind, ["alpha", "beta"]).unwrap());
    let done = Arc::new(AtomicBool::new(false));
    let start = Arc::new(Barrier::new(READERS + 1));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let handle = Arc::clone(&handle);
            let done = Arc::clone(&done);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                let mut seen = 0usize;
                loop {
                    let out = handle.sanitize(TEXT);
                    assert!(out == WITH_FIRST || out == WITH_SECOND, "torn engine output: {out:?}");
                    seen += 1;
                    if done.load(Ordering::Acquire) {
                        break seen;
                    }
                }
            })
        })
        .collect();

    start.wait();
    for i in 0..RELOADS {
        let words: &[&str] = if i % 2 == 0 { &["gamma", "delta"] } else { &["alpha", "beta"] };
        handle.reload(words).unwrap();
        if i % 50 == 0 {
            let empty: [&str; 0] = [];
            assert!(handle.reload(empty).is_err());
        }
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        let seen = reader.join().expect("reader thread panicked");
        assert!(seen > 0);
    }
    assert_eq!(handle.generation(), RELOADS as u64 + 1);
}

#[test]
fn test_trie_reload_never_tears() {
    race(EngineKind::Trie);
}

#[test]
fn test_word_boundary_reload_never_tears() {
    race(EngineKind::WordBoundary);
}

#[test]
fn test_concurrent_mutations_end_consistent() {
    let store: Arc<dyn WordListStore> = Arc::new(MemoryWordList::new());
    let registry = Arc::new(FilterRegistry::new(store, EngineKind::WordBoundary));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let filter = registry.get("en_US").unwrap();
                for i in 0..25 {
                    filter.set(&[format!("w{}x{}", t, i)]).unwrap();
                }
            })
        })
        .collect();
    for w in writers {
        w.join().expect("writer thread panicked");
    }

    let filter = registry.get("en_US").unwrap();
    assert_eq!(filter.count().unwrap(), 100);
    assert_eq!(filter.handle().pattern_count(), 100);
    assert_eq!(filter.sanitize("w3x24 w0x0 other"), "***** **** other");
}
