mod utils;

pub mod catalog;
pub mod input;
pub mod preferences;
pub mod schedule;
pub mod time;
pub mod verifier;

use log::{info, warn};

use crate::input::Session;
use crate::schedule::{AssemblyMode, AssignedCourse, ScheduleAssembler, ScheduleSink, SlotSelector};
use crate::verifier::{Conflict, ScheduleValidator};

/// What came out of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The schedule satisfies the preferences.
    Accepted(Vec<AssignedCourse>),
    /// The schedule could not be created. Contains only the first conflict,
    /// unless every conflict has been asked for.
    Rejected(Vec<Conflict>),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(conflicts) => conflicts,
        }
    }
}

/// Assembles the schedule of the session and validates it.
#[must_use]
pub fn generate_schedule(session: &Session) -> Outcome {
    info!("generating your schedule with {}", session.preferences());

    let options = session.options();
    let validator = ScheduleValidator::new(session.preferences());

    let schedule = match options.assembly() {
        AssemblyMode::AllSlots => ScheduleAssembler.assemble(session.catalog()),
        AssemblyMode::SelectSlot => {
            match SlotSelector::new(&validator).select(session.catalog()) {
                Ok(schedule) => schedule,
                Err(conflict) => return Outcome::Rejected(vec![conflict]),
            }
        }
    };

    match validator.validate_with(&schedule, options.report()) {
        Ok(()) => {
            info!("schedule with {} courses is valid", schedule.len());
            Outcome::Accepted(schedule)
        }
        Err(conflicts) => Outcome::Rejected(conflicts),
    }
}

/// Generates the schedule and hands it to the `sink` if it is valid.
///
/// A rejected schedule is not an error, the sink will not see anything and
/// the conflicts are returned.
pub fn deliver_schedule<S>(session: &Session, sink: &mut S) -> anyhow::Result<Outcome>
where
    S: ScheduleSink + ?Sized,
{
    let outcome = generate_schedule(session);

    match &outcome {
        Outcome::Accepted(schedule) => sink.accept(schedule)?,
        Outcome::Rejected(conflicts) => {
            for conflict in conflicts {
                warn!("{} ({})", conflict, conflict.reason());
            }
        }
    }

    Ok(outcome)
}
