//! File watching for live reload.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period that ends a burst of file system events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WatchEvent {
    /// A content document was created or modified
    ContentChanged(PathBuf),

    /// A public asset was created or modified
    PublicChanged(PathBuf),

    /// A watched file was deleted
    Removed(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::ContentChanged(path)
            | WatchEvent::PublicChanged(path)
            | WatchEvent::Removed(path) => path,
        }
    }
}

/// File watcher over the content and public directories.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher.
    ///
    /// Returns the watcher and a channel to receive events. Each burst of
    /// changes is delivered once per distinct event after it goes quiet.
    pub fn new(
        content_dir: &Path,
        public_dir: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in [content_dir, public_dir] {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            } else {
                tracing::warn!("Not watching missing directory {}", path.display());
            }
        }

        // Paths from notify are absolute; compare against the absolute root
        let content_root = content_dir
            .canonicalize()
            .unwrap_or_else(|_| content_dir.to_path_buf());

        std::thread::spawn(move || {
            while let Ok(first) = sync_rx.recv() {
                let mut burst = vec![first];
                while let Ok(next) = sync_rx.recv_timeout(DEBOUNCE) {
                    burst.push(next);
                }

                let mut seen = HashSet::new();
                for event in burst {
                    for path in &event.paths {
                        let Some(watch_event) = classify_event(path, &event.kind, &content_root)
                        else {
                            continue;
                        };
                        if seen.insert(watch_event.clone())
                            && async_tx.blocking_send(watch_event).is_err()
                        {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind, content_root: &Path) -> Option<WatchEvent> {
    use notify::EventKind;

    let path = path.to_path_buf();

    match kind {
        EventKind::Remove(_) => Some(WatchEvent::Removed(path)),
        EventKind::Create(_) | EventKind::Modify(_) => {
            let is_content = path.starts_with(content_root)
                && path.extension().and_then(|e| e.to_str()) == Some("json");
            if is_content {
                Some(WatchEvent::ContentChanged(path))
            } else {
                Some(WatchEvent::PublicChanged(path))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_content_and_public_changes() {
        let root = Path::new("/site/content");

        assert_eq!(
            classify_event(
                Path::new("/site/content/home.json"),
                &EventKind::Modify(ModifyKind::Any),
                root
            ),
            Some(WatchEvent::ContentChanged(PathBuf::from("/site/content/home.json")))
        );
        assert_eq!(
            classify_event(
                Path::new("/site/public/gallary/gal1.jpg"),
                &EventKind::Create(CreateKind::File),
                root
            ),
            Some(WatchEvent::PublicChanged(PathBuf::from("/site/public/gallary/gal1.jpg")))
        );
        assert_eq!(
            classify_event(
                Path::new("/site/content/home.json"),
                &EventKind::Remove(RemoveKind::File),
                root
            ),
            Some(WatchEvent::Removed(PathBuf::from("/site/content/home.json")))
        );
        assert_eq!(
            classify_event(Path::new("/site/content/home.json"), &EventKind::Any, root),
            None
        );
    }

    #[tokio::test]
    async fn watches_content_changes() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let public = temp.path().join("public");
        fs::create_dir_all(&content).unwrap();
        fs::create_dir_all(&public).unwrap();

        let (watcher, mut rx) = FileWatcher::new(&content, &public).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(content.join("home.json"), "{}").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        let event = event
            .expect("timeout waiting for file watch event")
            .expect("channel should not be closed");
        assert!(event.path().ends_with("home.json"));
    }
}
