//! Gallery image dimension probing.
//!
//! Every gallery image is measured before the grid is laid out. Probes run
//! concurrently and settle independently: a probe that fails or times out
//! settles with fallback dimensions instead of an error, so one bad file
//! never holds back or breaks the others.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinSet;

/// Width used when an image cannot be measured.
pub const FALLBACK_WIDTH: u32 = 800;
/// Height used when an image cannot be measured.
pub const FALLBACK_HEIGHT: u32 = 600;
/// Default per-probe time limit.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

/// A gallery entry with layout dimensions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    /// `false` when the dimensions are the fallback values
    pub measured: bool,
}

impl GalleryImage {
    fn new(src: String, alt: String, width: u32, height: u32, measured: bool) -> Self {
        Self {
            src,
            alt,
            width,
            height,
            aspect_ratio: f64::from(width) / f64::from(height),
            measured,
        }
    }

    /// An entry with the 800x600 fallback dimensions.
    pub fn fallback(src: String, alt: String) -> Self {
        Self::new(src, alt, FALLBACK_WIDTH, FALLBACK_HEIGHT, false)
    }
}

/// Errors a single probe can settle with.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to read image {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Image {0} reports a zero dimension")]
    ZeroSize(String),

    #[error("Probe for {0} timed out")]
    Timeout(String),

    #[error("Probe task failed: {0}")]
    Task(String),
}

/// Measures the natural size of an image file.
pub trait DimensionProbe: Send + Sync + 'static {
    /// Return `(width, height)` in pixels.
    fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}

/// Reads dimensions from the image file header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileProbe;

impl DimensionProbe for FileProbe {
    fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        let size = imagesize::size(path).map_err(|e| ProbeError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let width = u32::try_from(size.width).unwrap_or(u32::MAX);
        let height = u32::try_from(size.height).unwrap_or(u32::MAX);
        Ok((width, height))
    }
}

/// One image to measure.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// Public URL
    pub src: String,
    pub alt: String,
    /// File on disk
    pub path: PathBuf,
}

/// Tracks a batch of probes until every one has settled.
#[derive(Debug)]
pub struct GalleryLoader {
    requests: Vec<ProbeRequest>,
    settled: Vec<Option<GalleryImage>>,
    timeout: Duration,
}

impl GalleryLoader {
    pub fn new(requests: Vec<ProbeRequest>, timeout: Duration) -> Self {
        let settled = vec![None; requests.len()];
        Self {
            requests,
            settled,
            timeout,
        }
    }

    /// Number of probes not yet settled.
    pub fn pending(&self) -> usize {
        self.settled.iter().filter(|slot| slot.is_none()).count()
    }

    /// True while at least one probe is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending() > 0
    }

    /// Record the outcome of probe `index`.
    ///
    /// Failures settle with fallback dimensions. Returns `false` if the index
    /// is unknown or already settled.
    pub fn settle(&mut self, index: usize, outcome: Result<(u32, u32), ProbeError>) -> bool {
        let (Some(request), Some(slot)) = (self.requests.get(index), self.settled.get_mut(index))
        else {
            return false;
        };
        if slot.is_some() {
            return false;
        }

        let image = match outcome {
            Ok((width, height)) if width > 0 && height > 0 => GalleryImage::new(
                request.src.clone(),
                request.alt.clone(),
                width,
                height,
                true,
            ),
            Ok(_) => {
                tracing::warn!("{}, using fallback dimensions", ProbeError::ZeroSize(request.src.clone()));
                GalleryImage::fallback(request.src.clone(), request.alt.clone())
            }
            Err(e) => {
                tracing::warn!("{}, using fallback dimensions", e);
                GalleryImage::fallback(request.src.clone(), request.alt.clone())
            }
        };

        *slot = Some(image);
        true
    }

    /// Settled entries in request order, once loading has finished.
    pub fn images(&self) -> Option<Vec<GalleryImage>> {
        self.settled.iter().cloned().collect()
    }

    /// Run every probe concurrently and wait for all of them to settle.
    pub async fn run<P: DimensionProbe>(mut self, probe: Arc<P>) -> Vec<GalleryImage> {
        let mut join_set = JoinSet::new();

        for (index, request) in self.requests.iter().enumerate() {
            let probe = Arc::clone(&probe);
            let path = request.path.clone();
            let src = request.src.clone();
            let timeout = self.timeout;

            join_set.spawn(async move {
                let read = read_detached(probe, path);
                let outcome = match tokio::time::timeout(timeout, read).await {
                    Ok(result) => result.and_then(|result| result),
                    Err(_) => Err(ProbeError::Timeout(src)),
                };
                (index, outcome)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    self.settle(index, outcome);
                }
                Err(e) => tracing::warn!("Gallery probe task aborted: {}", e),
            }
        }

        // A task that died without reporting still gets a usable entry.
        for index in 0..self.requests.len() {
            if self.settled[index].is_none() {
                self.settle(index, Err(ProbeError::Task("no result".to_string())));
            }
        }

        tracing::debug!(
            "Probed {} gallery images ({} measured)",
            self.settled.len(),
            self.settled.iter().flatten().filter(|i| i.measured).count()
        );

        self.images().unwrap_or_default()
    }
}

/// Read on a thread the runtime does not own, so a read that never returns
/// (a FIFO, a hung mount) cannot hold up runtime shutdown.
async fn read_detached<P: DimensionProbe>(
    probe: Arc<P>,
    path: PathBuf,
) -> Result<Result<(u32, u32), ProbeError>, ProbeError> {
    let (tx, rx) = oneshot::channel();

    std::thread::Builder::new()
        .name("gallery-probe".to_string())
        .spawn(move || {
            let _ = tx.send(probe.probe(&path));
        })
        .map_err(|e| ProbeError::Task(e.to_string()))?;

    rx.await.map_err(|e| ProbeError::Task(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    /// Probe that answers from a table, optionally after a delay.
    struct ScriptedProbe {
        sizes: HashMap<String, (u32, u32)>,
        delay: HashMap<String, Duration>,
    }

    impl DimensionProbe for ScriptedProbe {
        fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            if let Some(delay) = self.delay.get(&name) {
                std::thread::sleep(*delay);
            }
            self.sizes.get(&name).copied().ok_or(ProbeError::Unreadable {
                path: name,
                message: "missing".to_string(),
            })
        }
    }

    fn requests(n: usize) -> Vec<ProbeRequest> {
        (1..=n)
            .map(|i| ProbeRequest {
                src: format!("/gallary/gal{}.jpg", i),
                alt: format!("Gallery Image {}", i),
                path: PathBuf::from(format!("public/gallary/gal{}.jpg", i)),
            })
            .collect()
    }

    fn seven_with_one_missing() -> ScriptedProbe {
        let mut sizes = HashMap::new();
        for i in 1..=7 {
            if i != 4 {
                sizes.insert(format!("gal{}.jpg", i), (1200, 900 + i as u32 * 10));
            }
        }
        ScriptedProbe {
            sizes,
            delay: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn partial_failure_uses_fallback_for_that_entry() {
        let loader = GalleryLoader::new(requests(7), DEFAULT_PROBE_TIMEOUT);
        let images = loader.run(Arc::new(seven_with_one_missing())).await;

        assert_eq!(images.len(), 7);
        for image in &images {
            assert!(image.width > 0 && image.height > 0);
            assert_eq!(image.aspect_ratio, f64::from(image.width) / f64::from(image.height));
        }

        let failed = &images[3];
        assert_eq!(failed.src, "/gallary/gal4.jpg");
        assert!(!failed.measured);
        assert_eq!((failed.width, failed.height), (800, 600));
        assert_eq!(failed.aspect_ratio, 4.0 / 3.0);

        assert!(images.iter().enumerate().all(|(i, img)| i == 3 || img.measured));
    }

    #[tokio::test]
    async fn keeps_request_order() {
        let mut probe = seven_with_one_missing();
        probe
            .delay
            .insert("gal1.jpg".to_string(), Duration::from_millis(50));

        let images = GalleryLoader::new(requests(7), DEFAULT_PROBE_TIMEOUT)
            .run(Arc::new(probe))
            .await;

        let srcs: Vec<String> = images.iter().map(|i| i.src.clone()).collect();
        let expected: Vec<String> = (1..=7).map(|i| format!("/gallary/gal{}.jpg", i)).collect();
        assert_eq!(srcs, expected);
    }

    #[tokio::test]
    async fn stalled_probe_times_out_to_fallback() {
        let mut probe = seven_with_one_missing();
        probe
            .delay
            .insert("gal2.jpg".to_string(), Duration::from_millis(500));

        let images = GalleryLoader::new(requests(3), Duration::from_millis(50))
            .run(Arc::new(probe))
            .await;

        assert!(images[0].measured);
        assert!(!images[1].measured);
        assert_eq!(images[1].width, FALLBACK_WIDTH);
        assert!(images[2].measured);
    }

    #[test]
    fn loading_clears_only_when_all_settle() {
        let mut loader = GalleryLoader::new(requests(7), DEFAULT_PROBE_TIMEOUT);
        assert!(loader.is_loading());
        assert!(loader.images().is_none());

        // Settle out of order, with one failure.
        for index in [6, 0, 3, 2, 5, 1] {
            let outcome = if index == 3 {
                Err(ProbeError::Unreadable {
                    path: "gal4.jpg".to_string(),
                    message: "broken".to_string(),
                })
            } else {
                Ok((640, 480))
            };
            assert!(loader.settle(index, outcome));
            assert!(loader.is_loading(), "still loading after settling {}", index);
        }

        assert_eq!(loader.pending(), 1);
        assert!(loader.settle(4, Ok((640, 480))));
        assert!(!loader.is_loading());

        let images = loader.images().unwrap();
        assert_eq!(images[3].width, FALLBACK_WIDTH);
        assert_eq!(images[3].height, FALLBACK_HEIGHT);
    }

    #[test]
    fn stalled_read_does_not_hold_runtime_shutdown() {
        let mut probe = seven_with_one_missing();
        probe
            .delay
            .insert("gal2.jpg".to_string(), Duration::from_secs(5));

        let started = std::time::Instant::now();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let images = runtime.block_on(
            GalleryLoader::new(requests(3), Duration::from_millis(100)).run(Arc::new(probe)),
        );
        drop(runtime);

        assert!(!images[1].measured);
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "runtime shutdown waited {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn settles_each_probe_once() {
        let mut loader = GalleryLoader::new(requests(2), DEFAULT_PROBE_TIMEOUT);

        assert!(loader.settle(0, Ok((10, 10))));
        assert!(!loader.settle(0, Ok((20, 20))));
        assert!(!loader.settle(9, Ok((20, 20))));
        assert_eq!(loader.pending(), 1);
    }

    #[test]
    fn zero_dimension_falls_back() {
        let mut loader = GalleryLoader::new(requests(1), DEFAULT_PROBE_TIMEOUT);
        loader.settle(0, Ok((0, 480)));

        let images = loader.images().unwrap();
        assert!(!images[0].measured);
        assert_eq!(images[0].aspect_ratio, 4.0 / 3.0);
    }

    #[tokio::test]
    async fn empty_gallery_is_not_loading() {
        let loader = GalleryLoader::new(Vec::new(), DEFAULT_PROBE_TIMEOUT);
        assert!(!loader.is_loading());

        let images = loader.run(Arc::new(FileProbe)).await;
        assert!(images.is_empty());
    }

    #[test]
    fn file_probe_reads_png_header() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tiny.png");
        fs::write(&path, png_header(320, 200)).unwrap();

        assert_eq!(FileProbe.probe(&path).unwrap(), (320, 200));
        assert!(FileProbe.probe(&temp.path().join("missing.png")).is_err());
    }

    /// PNG signature followed by an IHDR chunk.
    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }
}
