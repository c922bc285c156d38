#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scan session state machine.
//!
//! A scan session moves through `Idle → Capturing → Analyzing → Result`,
//! each transition triggered by exactly one external event (camera
//! opened, file selected, photo captured, analysis settled, reset).
//! Encoding the session as a tagged state rules out the impossible
//! combinations a flag-based design permits, such as an open camera and
//! a rendered result at the same time.

use carbon_receipt_models::{ImagePayload, RatingResult, Receipt};
use carbon_receipt_rating::rate_receipt;

/// Error returned when an event is not valid in the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("event {event} is not valid in state {state}")]
pub struct TransitionError {
    /// Name of the state the session was in.
    pub state: &'static str,
    /// Name of the rejected event.
    pub event: &'static str,
}

/// External events that drive a scan session.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// The user opened the live camera.
    CameraOpened,
    /// The user selected an image file to upload.
    FileSelected(ImagePayload),
    /// The user captured a photo from the open camera.
    PhotoCaptured(ImagePayload),
    /// The analysis call settled with a receipt (real or substituted).
    AnalysisSettled(Receipt),
    /// The user discarded the session to start over.
    Reset,
}

/// The state of one scan session.
#[derive(Debug, Clone)]
pub enum ScanState {
    /// Nothing captured yet; the upload surface is showing.
    Idle,
    /// The live camera is open, waiting for a capture.
    Capturing,
    /// An image is in flight to the analysis service.
    Analyzing {
        /// The captured or uploaded image being analyzed.
        image: ImagePayload,
    },
    /// A receipt has been analyzed and rated.
    Result {
        /// The analyzed receipt.
        receipt: Receipt,
        /// The rating derived from it, computed exactly once on entry.
        rating: RatingResult,
    },
}

impl ScanState {
    /// Applies one event, consuming the current state.
    ///
    /// `Reset` is legal from every state and returns to [`Self::Idle`];
    /// resetting while [`Self::Analyzing`] simply discards the pending
    /// result's effect rather than aborting the underlying transfer.
    /// Settling computes the rating via [`rate_receipt`] exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] if the event is not valid in the
    /// current state.
    pub fn apply(self, event: ScanEvent) -> Result<Self, TransitionError> {
        match (self, event) {
            (_, ScanEvent::Reset) => Ok(Self::Idle),
            (Self::Idle, ScanEvent::CameraOpened) => Ok(Self::Capturing),
            (Self::Idle, ScanEvent::FileSelected(image))
            | (Self::Capturing, ScanEvent::PhotoCaptured(image)) => Ok(Self::Analyzing { image }),
            (Self::Analyzing { .. }, ScanEvent::AnalysisSettled(receipt)) => {
                let rating = rate_receipt(&receipt);
                Ok(Self::Result { receipt, rating })
            }
            (state, event) => Err(TransitionError {
                state: state_name(&state),
                event: event_name(&event),
            }),
        }
    }

    /// Returns `true` once the session holds a rated receipt.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Result { .. })
    }
}

/// Static name for a state, for error reporting.
const fn state_name(state: &ScanState) -> &'static str {
    match state {
        ScanState::Idle => "Idle",
        ScanState::Capturing => "Capturing",
        ScanState::Analyzing { .. } => "Analyzing",
        ScanState::Result { .. } => "Result",
    }
}

/// Static name for an event, for error reporting.
const fn event_name(event: &ScanEvent) -> &'static str {
    match event {
        ScanEvent::CameraOpened => "CameraOpened",
        ScanEvent::FileSelected(_) => "FileSelected",
        ScanEvent::PhotoCaptured(_) => "PhotoCaptured",
        ScanEvent::AnalysisSettled(_) => "AnalysisSettled",
        ScanEvent::Reset => "Reset",
    }
}
