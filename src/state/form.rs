//! Contact form state and submission lifecycle.
//!
//! The form buffers three required fields and walks a submission
//! status machine: Idle -> Pending on submit, Pending -> Success or
//! Error when the simulated round trip completes, and back to Idle
//! after the acknowledgement window. There is no real network call;
//! the round trip is a timer, and the outcome is supplied by the
//! caller at delivery time. The shipped app always delivers success —
//! the failure leg exists for the seam, not for a reachable transport.
//!
//! Both transitions out of Pending/Success/Error are driven by
//! cancellable timers; resetting the form (or quitting) invalidates
//! anything in flight so no callback lands on discarded state.

use crate::motion::{TimerHandle, TimerQueue};
use std::time::{Duration, Instant};

/// Simulated round-trip time for a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// How long the success (or error) acknowledgement stays on screen.
pub const STATUS_WINDOW: Duration = Duration::from_secs(3);

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Submitted, waiting for the simulated round trip
    Pending,
    /// Delivered; acknowledgement showing
    Success,
    /// Delivery failed; acknowledgement showing
    Error,
}

/// What the simulated transport reports at delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message went through
    Delivered,
    /// The message did not go through
    Failed,
}

/// Deferred events the form schedules on the shared timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    /// The simulated round trip completed
    RoundTrip,
    /// The acknowledgement window elapsed
    Dismiss,
}

/// Form field selection, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Name field
    #[default]
    Name,
    /// Email field
    Email,
    /// Message field
    Message,
}

impl FormField {
    /// Get next field (wraps around)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Get previous field (wraps around)
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Name input buffer
    pub name: String,
    /// Email input buffer
    pub email: String,
    /// Message input buffer
    pub message: String,
    /// Currently focused field
    pub active_field: FormField,
    status: SubmissionStatus,
    round_trip: Option<TimerHandle>,
    dismiss: Option<TimerHandle>,
}

impl ContactForm {
    /// Creates an empty idle form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current submission status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The active field's input buffer (mutable).
    pub const fn active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// A field's input buffer.
    #[must_use]
    pub const fn field(&self, field: FormField) -> &String {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Move focus to the next field.
    pub const fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Move focus to the previous field.
    pub const fn previous_field(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Whether every required field is non-empty.
    ///
    /// This is the whole of validation — the analog of native
    /// required-field enforcement. Nothing inspects the email shape.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Whether the form currently accepts edits.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.status, SubmissionStatus::Idle | SubmissionStatus::Error)
    }

    /// Submits the form.
    ///
    /// Accepted only when the form is editable and complete. On
    /// acceptance the status moves to Pending immediately and the
    /// simulated round trip is scheduled. Returns whether the
    /// submission was accepted.
    pub fn submit(&mut self, timers: &mut TimerQueue<FormTimer>, now: Instant) -> bool {
        if !self.is_editable() || !self.is_complete() {
            return false;
        }

        // Re-submitting from the Error acknowledgement abandons the
        // pending dismiss.
        if let Some(handle) = self.dismiss.take() {
            timers.cancel(handle);
        }

        self.status = SubmissionStatus::Pending;
        self.round_trip = Some(timers.schedule(now + SUBMIT_DELAY, FormTimer::RoundTrip));
        true
    }

    /// Applies a delivered timer event.
    ///
    /// `outcome` is consulted only for [`FormTimer::RoundTrip`]; the
    /// caller decides what the simulated transport reported.
    pub fn handle_timer(
        &mut self,
        event: FormTimer,
        outcome: SubmitOutcome,
        timers: &mut TimerQueue<FormTimer>,
        now: Instant,
    ) {
        match event {
            FormTimer::RoundTrip => {
                if self.status != SubmissionStatus::Pending {
                    return;
                }
                self.round_trip = None;
                match outcome {
                    SubmitOutcome::Delivered => {
                        self.status = SubmissionStatus::Success;
                        self.name.clear();
                        self.email.clear();
                        self.message.clear();
                        self.active_field = FormField::Name;
                    }
                    SubmitOutcome::Failed => {
                        // Keep the fields so the user can retry.
                        self.status = SubmissionStatus::Error;
                    }
                }
                self.dismiss = Some(timers.schedule(now + STATUS_WINDOW, FormTimer::Dismiss));
            }
            FormTimer::Dismiss => {
                self.dismiss = None;
                if matches!(
                    self.status,
                    SubmissionStatus::Success | SubmissionStatus::Error
                ) {
                    self.status = SubmissionStatus::Idle;
                }
            }
        }
    }

    /// Resets the form and invalidates anything in flight.
    ///
    /// Called on teardown; a timer scheduled by a previous life of the
    /// form must never mutate the fresh one.
    pub fn reset(&mut self, timers: &mut TimerQueue<FormTimer>) {
        if let Some(handle) = self.round_trip.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = self.dismiss.take() {
            timers.cancel(handle);
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active_field = FormField::Name;
        self.status = SubmissionStatus::Idle;
    }
}
