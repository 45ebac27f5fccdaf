use crate::config::UploadConfig;
use crate::error::Result;
use crate::http::Transport;
use crate::models::{
    SelectionEvent, UiState, UploadResponse, LARGE_FILE, TYPE_ERROR, TYPE_SUCCESS,
};
use crate::validator::{exceeds_size_limit, mime_matches, validate, ValidationResult};

/// Where the controller is in the selection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a selection
    #[default]
    Idle,
    /// Running the validation rules
    Validating,
    /// Last selection failed a rule; nothing was submitted
    Rejected,
    /// Last selection passed; a transport call is in flight
    Accepted,
}

/// Bridges file-selection events to validation and to the transport, and
/// owns the UI-facing state.
///
/// Each selection overwrites [`UiState`] unconditionally: there is no
/// queuing and no cancellation of an in-flight transport call, so a later
/// selection's state update may race with an earlier call's completion and
/// ordering between the two is not guaranteed.
pub struct UploadController<T: Transport> {
    config: UploadConfig,
    transport: T,
    state: UiState,
    phase: Phase,
    last_status: Option<u16>,
    on_state_change: Option<Box<dyn Fn(&UiState) + Send>>,
}

impl<T: Transport> UploadController<T> {
    /// Create a controller for one widget instance
    pub fn new(config: UploadConfig, transport: T) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            state: UiState::default(),
            phase: Phase::Idle,
            last_status: None,
            on_state_change: None,
        })
    }

    /// Handle one file-selection event.
    ///
    /// Runs both rules against the first entry of the selection, updates
    /// [`UiState`], and submits the file to the transport only when both
    /// rules pass. Returns the transport's response for a submitted file,
    /// `Ok(None)` when the selection was rejected or empty.
    pub async fn handle_selection(
        &mut self,
        event: SelectionEvent,
    ) -> Result<Option<UploadResponse>> {
        let Some(file) = event.into_first() else {
            self.state.reset();
            self.phase = Phase::Idle;
            self.notify();
            return Ok(None);
        };

        self.phase = Phase::Validating;

        // Two independent signals: the size rule drives the error label,
        // the type rule drives the status id.
        let too_large = exceeds_size_limit(file.size_bytes, &self.config);
        let type_ok = mime_matches(&file.mime_type, &self.config);

        self.state.error_label = too_large.then(|| LARGE_FILE.to_string());
        self.state.status_id = Some(if type_ok { TYPE_SUCCESS } else { TYPE_ERROR }.to_string());
        self.notify();

        match validate(file.size_bytes, &file.mime_type, &self.config) {
            ValidationResult::Ok => {}
            rejected => {
                log::debug!("selection {:?} rejected: {:?}", file.name, rejected);
                self.phase = Phase::Rejected;
                return Ok(None);
            }
        }

        self.phase = Phase::Accepted;

        let response = match self.transport.upload(&file).await {
            Ok(response) => response,
            Err(err) => {
                self.phase = Phase::Idle;
                return Err(err);
            }
        };

        // The status is recorded for observation only, never branched on
        self.last_status = Some(response.status);
        self.phase = Phase::Idle;

        Ok(Some(response))
    }

    /// Register a callback invoked after every [`UiState`] write
    pub fn set_on_state_change(&mut self, callback: impl Fn(&UiState) + Send + 'static) {
        self.on_state_change = Some(Box::new(callback));
    }

    /// Current UI-facing state, read-only to the rendering layer
    pub fn ui_state(&self) -> &UiState {
        &self.state
    }

    /// Current phase of the selection cycle
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status reported by the transport for the last submitted file
    pub fn last_status(&self) -> Option<u16> {
        self.last_status
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_state_change {
            callback(&self.state);
        }
    }
}
