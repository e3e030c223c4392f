use log::{debug, warn};

use crate::order_form::Category;

/// Which dialog is on screen. A single enum, so the intake and success dialogs
/// can never be open at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    IntakeOpen,
    /// Carries the category that was submitted so the confirmation copy
    /// survives the form reset.
    SuccessOpen(Category),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTrigger {
    OpenIntake,
    DismissIntake,
    SubmissionSucceeded(Category),
    DismissSuccess,
}

impl ModalState {
    pub fn intake_open(&self) -> bool {
        matches!(self, ModalState::IntakeOpen)
    }

    pub fn success_open(&self) -> bool {
        matches!(self, ModalState::SuccessOpen(_))
    }

    /// Returns the next state, or `None` when the trigger is not legal from the
    /// current state.
    pub fn transition(self, trigger: ModalTrigger) -> Option<ModalState> {
        let next = match (self, trigger) {
            (ModalState::Closed, ModalTrigger::OpenIntake) => ModalState::IntakeOpen,
            (ModalState::IntakeOpen, ModalTrigger::DismissIntake) => ModalState::Closed,
            (ModalState::IntakeOpen, ModalTrigger::SubmissionSucceeded(category)) => {
                ModalState::SuccessOpen(category)
            }
            (ModalState::SuccessOpen(_), ModalTrigger::DismissSuccess) => ModalState::Closed,
            (state, trigger) => {
                warn!("Ignoring modal trigger {:?} while {:?}", trigger, state);
                return None;
            }
        };
        debug!("Modal {:?} -> {:?}", self, next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TRIGGERS: [ModalTrigger; 5] = [
        ModalTrigger::OpenIntake,
        ModalTrigger::DismissIntake,
        ModalTrigger::SubmissionSucceeded(Category::Custom),
        ModalTrigger::SubmissionSucceeded(Category::Brochure),
        ModalTrigger::DismissSuccess,
    ];

    #[test]
    fn test_full_lifecycle() {
        let state = ModalState::default();
        assert_eq!(state, ModalState::Closed);

        let state = state.transition(ModalTrigger::OpenIntake).unwrap();
        assert!(state.intake_open());

        let state = state
            .transition(ModalTrigger::SubmissionSucceeded(Category::Custom))
            .unwrap();
        assert_eq!(state, ModalState::SuccessOpen(Category::Custom));
        assert!(!state.intake_open());

        let state = state.transition(ModalTrigger::DismissSuccess).unwrap();
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_success_cannot_jump_back_to_intake() {
        let state = ModalState::SuccessOpen(Category::Brochure);
        assert_eq!(state.transition(ModalTrigger::OpenIntake), None);
        assert_eq!(state.transition(ModalTrigger::DismissIntake), None);
    }

    #[test]
    fn test_success_requires_open_intake() {
        assert_eq!(
            ModalState::Closed.transition(ModalTrigger::SubmissionSucceeded(Category::Custom)),
            None
        );
    }

    #[test]
    fn test_never_both_open_for_any_trigger_sequence() {
        // Every sequence of length 6 over the trigger alphabet.
        let mut sequences: Vec<Vec<ModalTrigger>> = vec![vec![]];
        for _ in 0..6 {
            sequences = sequences
                .into_iter()
                .flat_map(|seq| {
                    TRIGGERS.iter().map(move |trigger| {
                        let mut next = seq.clone();
                        next.push(*trigger);
                        next
                    })
                })
                .collect();
        }

        for sequence in sequences {
            let mut state = ModalState::Closed;
            for trigger in sequence {
                state = state.transition(trigger).unwrap_or(state);
                assert!(!(state.intake_open() && state.success_open()));
            }
        }
    }
}
