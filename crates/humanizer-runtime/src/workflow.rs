use humanizer_engine::GateDecision;
use humanizer_types::{Humanized, Settings, SubscriptionTier};
use tracing::{debug, info, warn};

use crate::service::{TransformRequest, TransformService};
use crate::session::{Phase, Session, TransformResult, View};
use crate::sinks::{Clipboard, HistoryEntry, HistorySink};
use crate::{Error, Result};

/// Why a `process` call did not start a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyInput,
    Blocked,
    AlreadyProcessing,
    ShowingResults,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptyInput => "no text to humanize",
            Rejection::Blocked => "word limit exceeded for the current plan",
            Rejection::AlreadyProcessing => "a transformation is already in flight",
            Rejection::ShowingResults => "results are showing; reset before processing again",
        }
    }
}

/// Handle for one accepted dispatch, redeemed with [`WorkflowController::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTicket {
    pub generation: u64,
    pub request: TransformRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Started(TransformTicket),
    Rejected(Rejection),
}

/// What happened to a delivered outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was superseded by a clear, reset or cancel
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Rejected(Rejection),
}

/// Phase machine driving a single session from input to results.
///
/// Processing is split into [`process`](Self::process), which snapshots the
/// input and hands back a ticket without waiting, and
/// [`complete`](Self::complete), which applies the outcome when it arrives.
/// The owner awaits the service in between and stays free to dispatch other
/// commands; the generation counter makes late outcomes harmless.
#[derive(Debug, Default)]
pub struct WorkflowController {
    session: Session,
}

impl WorkflowController {
    pub fn new(tier: SubscriptionTier, settings: Settings) -> Self {
        Self {
            session: Session::new(tier, settings),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    pub fn gate(&self) -> GateDecision {
        self.session.gate()
    }

    pub fn result(&self) -> Option<&TransformResult> {
        self.session.result()
    }

    /// Replace the input text and re-evaluate gating.
    ///
    /// While processing only the pending text changes; the in-flight request
    /// keeps its snapshot. Blank text always clears back to `Idle`, abandoning
    /// any in-flight transformation.
    pub fn set_text(&mut self, text: impl Into<String>) -> Phase {
        self.session.input_text = text.into();
        if humanizer_types::is_blank(&self.session.input_text) {
            if self.session.phase == Phase::Processing {
                self.bump_generation();
            }
            self.session.result = None;
            self.transition(Phase::Idle);
        } else if self.session.phase != Phase::Processing {
            self.session.result = None;
            self.transition(self.gated_phase());
        }
        self.session.phase
    }

    pub fn clear_text(&mut self) {
        self.session.input_text.clear();
        self.session.result = None;
        self.session.last_error = None;
        self.bump_generation();
        self.transition(Phase::Idle);
    }

    /// Swap the subscription facts, e.g. after an upgrade
    pub fn set_tier(&mut self, tier: SubscriptionTier) -> Phase {
        self.session.tier = tier;
        if matches!(self.session.phase, Phase::Idle | Phase::Blocked) {
            self.transition(self.gated_phase());
        }
        self.session.phase
    }

    pub fn update_settings(&mut self, settings: Settings) {
        debug!(level = settings.level, style = %settings.style, "settings replaced");
        self.session.settings = settings;
    }

    /// Start a transformation of the current text.
    ///
    /// Invalid settings fail with [`Error::Validation`] and leave the phase
    /// untouched. Any other reason not to start is reported as
    /// [`Dispatch::Rejected`].
    pub fn process(&mut self) -> Result<Dispatch> {
        let rejection = match self.session.phase {
            Phase::Processing => Some(Rejection::AlreadyProcessing),
            Phase::Blocked => Some(Rejection::Blocked),
            Phase::Results => Some(Rejection::ShowingResults),
            Phase::Idle if humanizer_types::is_blank(&self.session.input_text) => {
                Some(Rejection::EmptyInput)
            }
            Phase::Idle => None,
        };
        if let Some(rejection) = rejection {
            debug!(phase = %self.session.phase, reason = rejection.message(), "process rejected");
            return Ok(Dispatch::Rejected(rejection));
        }

        self.session.settings.validate()?;

        self.bump_generation();
        self.session.last_error = None;
        let ticket = TransformTicket {
            generation: self.session.generation,
            request: TransformRequest {
                text: self.session.input_text.clone(),
                settings: self.session.settings,
            },
        };
        info!(
            generation = ticket.generation,
            words = self.session.word_count(),
            level = ticket.request.settings.level,
            "transformation dispatched"
        );
        self.transition(Phase::Processing);
        Ok(Dispatch::Started(ticket))
    }

    /// Deliver the outcome for a ticket.
    ///
    /// Stale tickets are discarded whatever their outcome. A failure for the
    /// live ticket returns the session to input with the text intact, records
    /// the message and is handed back to the caller.
    pub fn complete(
        &mut self,
        ticket: TransformTicket,
        outcome: Result<Humanized>,
    ) -> Result<Completion> {
        if ticket.generation != self.session.generation || self.session.phase != Phase::Processing
        {
            let error = outcome.as_ref().err().map(ToString::to_string);
            debug!(
                ticket = ticket.generation,
                current = self.session.generation,
                error = ?error,
                "discarding stale outcome"
            );
            return Ok(Completion::Discarded);
        }

        match outcome {
            Ok(humanized) => {
                info!(
                    generation = ticket.generation,
                    detection_score = humanized.detection_score,
                    "transformation completed"
                );
                self.session.result = Some(TransformResult {
                    original_text: ticket.request.text,
                    humanized_text: humanized.text,
                    detection_score: humanized.detection_score,
                    settings: ticket.request.settings,
                });
                self.transition(Phase::Results);
                Ok(Completion::Applied)
            }
            Err(err) => {
                warn!(generation = ticket.generation, error = %err, "transformation failed");
                self.session.last_error = Some(err.to_string());
                self.transition(self.gated_phase());
                Err(err)
            }
        }
    }

    /// Abandon the in-flight transformation; its outcome will be discarded
    pub fn cancel(&mut self) -> bool {
        if self.session.phase != Phase::Processing {
            return false;
        }
        self.bump_generation();
        self.transition(self.gated_phase());
        true
    }

    /// "Process another": drop the result, keep text and settings
    pub fn reset(&mut self) -> bool {
        if self.session.phase != Phase::Results {
            return false;
        }
        self.session.result = None;
        self.bump_generation();
        self.transition(self.gated_phase());
        true
    }

    /// Dispatch, await the service and apply its outcome in one step
    pub async fn run(&mut self, service: &dyn TransformService) -> Result<RunOutcome> {
        let ticket = match self.process()? {
            Dispatch::Started(ticket) => ticket,
            Dispatch::Rejected(rejection) => return Ok(RunOutcome::Rejected(rejection)),
        };
        let outcome = service.transform(&ticket.request).await;
        self.complete(ticket, outcome)?;
        Ok(RunOutcome::Completed)
    }

    /// Hand the current result to a history sink; the phase never changes
    pub fn save_result(&self, sink: &dyn HistorySink) -> Result<HistoryEntry> {
        let result = self.require_result("save")?;
        let entry = HistoryEntry::from_result(result);
        sink.save(&entry).map_err(|e| {
            warn!(error = %e, "saving to history failed");
            match e {
                Error::History(_) => e,
                other => Error::History(other.to_string()),
            }
        })?;
        info!(id = %entry.id, "result saved to history");
        Ok(entry)
    }

    /// Hand the humanized text, untouched, to a clipboard
    pub fn copy_result(&self, clipboard: &dyn Clipboard) -> Result<()> {
        let result = self.require_result("copy")?;
        clipboard.copy(&result.humanized_text)
    }

    fn require_result(&self, action: &str) -> Result<&TransformResult> {
        self.session.result.as_ref().ok_or_else(|| {
            Error::InvalidOperation(format!(
                "cannot {} while {}: no result available",
                action, self.session.phase
            ))
        })
    }

    fn gated_phase(&self) -> Phase {
        if self.session.gate().blocked {
            Phase::Blocked
        } else {
            Phase::Idle
        }
    }

    fn bump_generation(&mut self) {
        self.session.generation += 1;
    }

    fn transition(&mut self, next: Phase) {
        let previous = self.session.phase;
        if previous != next {
            debug!(from = %previous, to = %next, "phase transition");
        }
        self.session.phase = next;
        debug_assert_eq!(
            self.session.result.is_some(),
            next == Phase::Results,
            "result must be present exactly in the results phase"
        );
    }
}
