use std::fmt;
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};
use classplan_core::{
    errors::PlanResult,
    models::slot::{SlotKind, day_code},
    schedule::classes_starting_at,
};
use serde::{Deserialize, Serialize};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::source::SubjectSource;

/// Source of the current local wall-clock time
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A class of some subject starting at the checked hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReminder {
    pub label: String,
    pub day: Weekday,
    pub hour: u32,
    pub kind: SlotKind,
    /// Time of the tick that produced the reminder
    pub at: NaiveDateTime,
}

impl fmt::Display for ClassReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SlotKind::Theory => "class",
            SlotKind::Lab => "lab",
        };
        write!(
            f,
            "{} {} starting now ({} {}:00)",
            self.label,
            kind,
            day_code(self.day),
            self.hour
        )
    }
}

/// Decides which reminders a tick should produce.
///
/// Every (date, hour) is checked at most once, so a one-minute tick does not
/// repeat the same reminder sixty times. A failed snapshot leaves the hour
/// unchecked and the next tick tries again.
pub struct ReminderChecker<S> {
    source: S,
    last_checked: Option<(NaiveDate, u32)>,
}

impl<S: SubjectSource> ReminderChecker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_checked: None,
        }
    }

    pub async fn check(&mut self, now: NaiveDateTime) -> PlanResult<Vec<ClassReminder>> {
        let key = (now.date(), now.hour());
        if self.last_checked == Some(key) {
            return Ok(Vec::new());
        }

        let subjects = self.source.snapshot().await?;
        self.last_checked = Some(key);

        let reminders: Vec<ClassReminder> = classes_starting_at(&subjects, now.weekday(), now.hour())
            .into_iter()
            .map(|tagged| ClassReminder {
                label: tagged.label,
                day: tagged.slot.day,
                hour: tagged.slot.start_hour(),
                kind: tagged.slot.kind,
                at: now,
            })
            .collect();

        debug!(at = %now, subjects = subjects.len(), reminders = reminders.len(), "Checked for starting classes");
        Ok(reminders)
    }
}

/// Handle to a running reminder task
pub struct ReminderHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReminderHandle {
    /// Signals the task to stop and waits for it to finish
    pub async fn shutdown(self) -> eyre::Result<()> {
        // the task may already be gone if the receiver was dropped
        let _ = self.shutdown.send(true);
        self.task.await?;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns the reminder loop on the current tokio runtime.
///
/// The loop ticks every `period`, checks `source` against `clock`, and sends
/// each reminder on `events` without waiting: when the channel is full the
/// reminder is dropped. The loop ends on [`ReminderHandle::shutdown`] or once
/// the receiving side of `events` is closed.
pub fn spawn_reminders<S, C>(
    source: S,
    clock: C,
    period: Duration,
    events: mpsc::Sender<ClassReminder>,
) -> ReminderHandle
where
    S: SubjectSource + 'static,
    C: Clock,
{
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut checker = ReminderChecker::new(source);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_secs = period.as_secs_f64(), "Reminder task started");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => break,
                _ = ticker.tick() => {
                    let reminders = match checker.check(clock.now()).await {
                        Ok(reminders) => reminders,
                        Err(err) => {
                            warn!(error = %err, "Skipping reminder tick");
                            continue;
                        }
                    };

                    if !deliver(&events, reminders) {
                        break;
                    }
                }
            }
        }

        info!("Reminder task stopped");
    });

    ReminderHandle { shutdown, task }
}

/// Sends reminders without blocking; returns false once nobody is listening
fn deliver(events: &mpsc::Sender<ClassReminder>, reminders: Vec<ClassReminder>) -> bool {
    for reminder in reminders {
        match events.try_send(reminder) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(reminder)) => {
                warn!(label = %reminder.label, "Reminder channel full, dropping reminder");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                info!("Reminder receiver closed");
                return false;
            }
        }
    }
    true
}
