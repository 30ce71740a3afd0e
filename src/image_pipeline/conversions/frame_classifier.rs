use std::sync::{Mutex, MutexGuard, TryLockError};

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    ArgbFrame, PipelineError, Result,
    classify::{Classifier, LabelTable, Recognition, select_top},
    conversions::{FrameGeometry, FramePreprocessor, Timer},
    transform::DisplayRotation,
    yuv::PlanarYuvFrame,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// A previous frame was still being processed, so this one was skipped.
    Dropped,
    Classified(Vec<Recognition>),
}

/// Runs the full frame → recognitions cycle for a camera callback.
///
/// At most one cycle runs at a time. A frame submitted while another is in
/// flight is dropped rather than queued, so latency and memory stay bounded
/// and results always describe a recent frame.
pub struct FrameClassifier<C: Classifier> {
    preprocessor: Mutex<FramePreprocessor>,
    classifier: C,
    labels: Option<LabelTable>,
}

impl<C: Classifier> FrameClassifier<C> {
    pub fn new(preprocessor: FramePreprocessor, classifier: C) -> Self {
        Self {
            preprocessor: Mutex::new(preprocessor),
            classifier,
            labels: None,
        }
    }

    pub fn with_labels(mut self, labels: LabelTable) -> Self {
        self.labels = Some(labels);
        self
    }

    #[instrument(skip_all, fields(width = frame.width, height = frame.height))]
    pub fn submit_frame(&self, frame: &PlanarYuvFrame<'_>) -> Result<FrameOutcome> {
        let mut preprocessor = match self.preprocessor.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                debug!("Pipeline busy, dropping frame");
                return Ok(FrameOutcome::Dropped);
            }
            // Every buffer is overwritten by the next frame, so a panic
            // mid-cycle leaves nothing stale behind.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let threshold = preprocessor.config().threshold;
        let max_results = preprocessor.config().max_results;

        let (tensor, mut timings) = preprocessor
            .preprocess_with_timings(frame)
            .inspect_err(|e| warn!("Skipping frame: {}", e))?;

        let scores = {
            let _span = tracing::info_span!("classify").entered();
            let timer = Timer::start("classify");
            let scores = self
                .classifier
                .classify(tensor)
                .inspect_err(|e| warn!("Classification failed: {}", e))?;
            timings.record(timer);
            scores
        };

        if let Some(labels) = &self.labels {
            if scores.len() != labels.len() {
                warn!(
                    "Classifier returned {} scores for {} labels",
                    scores.len(),
                    labels.len()
                );
                return Err(PipelineError::InvalidBufferSize {
                    expected: labels.len(),
                    actual: scores.len(),
                });
            }
        }

        let recognitions = select_top(&scores, self.labels.as_ref(), threshold, max_results);

        timings.log_summary();
        info!(
            results = recognitions.len(),
            elapsed_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Frame classified"
        );
        Ok(FrameOutcome::Classified(recognitions))
    }

    /// Applies a new camera geometry, waiting for any in-flight frame.
    pub fn reconfigure(&self, geometry: FrameGeometry, display_rotation: DisplayRotation) -> Result<()> {
        self.lock().reconfigure(geometry, display_rotation)
    }

    /// Copy of the classifier input built from the last frame.
    pub fn cropped_snapshot(&self) -> ArgbFrame {
        self.lock().cropped_frame().clone()
    }

    fn lock(&self) -> MutexGuard<'_, FramePreprocessor> {
        self.preprocessor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
