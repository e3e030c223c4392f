use std::rc::Rc;

use log::{debug, info, warn};
use yew::prelude::*;

use crate::modal::{ModalState, ModalTrigger};
use crate::order_form::{Category, OrderField, OrderRequest};
use crate::submission::{SubmissionStatus, SubmitError, SubmitResponse};

/// Dialog, form and submission state of the landing page. Every change goes
/// through [`LandingAction`] so the whole workflow is one reducer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub modal: ModalState,
    pub form: OrderRequest,
    pub status: SubmissionStatus,
    /// Bumped whenever an intake session starts or ends. A response tagged
    /// with an older session is dropped.
    pub session: u32,
}

pub enum LandingAction {
    OpenIntake,
    DismissIntake,
    DismissSuccess,
    SetCategory(Category),
    SetField(OrderField, String),
    SubmitStarted,
    SubmitFinished {
        session: u32,
        result: Result<SubmitResponse, SubmitError>,
    },
}

impl LandingState {
    pub fn can_submit(&self) -> bool {
        self.modal.intake_open() && !self.status.in_flight() && self.form.validate().is_ok()
    }

    fn fresh_session(&self, modal: ModalState) -> Self {
        Self {
            modal,
            form: OrderRequest::default(),
            status: SubmissionStatus::Idle,
            session: self.session.wrapping_add(1),
        }
    }

    fn apply(&self, action: LandingAction) -> Option<Self> {
        match action {
            LandingAction::OpenIntake => {
                let modal = self.modal.transition(ModalTrigger::OpenIntake)?;
                info!("Intake dialog opened");
                Some(self.fresh_session(modal))
            }
            LandingAction::DismissIntake => {
                let modal = self.modal.transition(ModalTrigger::DismissIntake)?;
                if self.status.in_flight() {
                    debug!("Intake dismissed with a submission in flight, its response will be dropped");
                }
                Some(self.fresh_session(modal))
            }
            LandingAction::DismissSuccess => {
                let modal = self.modal.transition(ModalTrigger::DismissSuccess)?;
                Some(Self { modal, ..self.clone() })
            }
            LandingAction::SetCategory(category) => {
                if !self.modal.intake_open() {
                    return None;
                }
                let mut next = self.clone();
                next.form.set_category(category);
                Some(next)
            }
            LandingAction::SetField(field, value) => {
                if !self.modal.intake_open() {
                    return None;
                }
                let mut next = self.clone();
                next.form.set_field(field, value);
                Some(next)
            }
            LandingAction::SubmitStarted => {
                if !self.modal.intake_open() || self.status.in_flight() {
                    warn!("Submit ignored: intake closed or a submission is already in flight");
                    return None;
                }
                if let Err(e) = self.form.validate() {
                    warn!("Submit blocked by validation: {}", e);
                    return Some(Self {
                        status: SubmissionStatus::Failed(e.to_string()),
                        ..self.clone()
                    });
                }
                Some(Self {
                    status: SubmissionStatus::Sending,
                    ..self.clone()
                })
            }
            LandingAction::SubmitFinished { session, result } => {
                if session != self.session || !self.status.in_flight() {
                    debug!("Dropping response for stale intake session {}", session);
                    return None;
                }
                let status = SubmissionStatus::from_result(&result);
                if status != SubmissionStatus::Succeeded {
                    return Some(Self { status, ..self.clone() });
                }

                // Brochure copy is the default confirmation variant.
                let category = self.form.category.unwrap_or(Category::Brochure);
                let modal = self
                    .modal
                    .transition(ModalTrigger::SubmissionSucceeded(category))?;
                info!("Order submitted, showing {} confirmation", category);
                Some(Self {
                    modal,
                    form: OrderRequest::default(),
                    status,
                    session: self.session,
                })
            }
        }
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
