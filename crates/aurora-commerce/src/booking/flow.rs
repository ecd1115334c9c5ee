//! Booking flow state machine.
//!
//! Models the cart -> guest details -> payment -> review -> complete
//! sequence a guest walks through at checkout, with per-step entry
//! requirements.

use crate::error::BookingError;
use crate::ids::FlowId;
use serde::{Deserialize, Serialize};

/// Steps in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowStep {
    /// Cart review.
    Cart,
    /// Guest contact details.
    GuestDetails,
    /// Payment details.
    Payment,
    /// Final review before submission.
    Review,
    /// Bookings submitted.
    Complete,
}

impl FlowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStep::Cart => "cart",
            FlowStep::GuestDetails => "guest_details",
            FlowStep::Payment => "payment",
            FlowStep::Review => "review",
            FlowStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FlowStep::Cart => "Cart",
            FlowStep::GuestDetails => "Guest Details",
            FlowStep::Payment => "Payment",
            FlowStep::Review => "Review",
            FlowStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            FlowStep::Cart => 1,
            FlowStep::GuestDetails => 2,
            FlowStep::Payment => 3,
            FlowStep::Review => 4,
            FlowStep::Complete => 5,
        }
    }
}

/// Booking flow state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingFlow {
    /// Unique flow identifier.
    pub id: FlowId,
    /// Current step.
    pub step: FlowStep,
    /// Completed steps.
    pub completed_steps: Vec<FlowStep>,
    /// Guest contact email.
    pub guest_email: Option<String>,
    /// Guest contact phone.
    pub guest_phone: Option<String>,
    /// Payment method token.
    pub payment_token: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl BookingFlow {
    /// Create a new flow at the cart step.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            id: FlowId::generate(),
            step: FlowStep::Cart,
            completed_steps: Vec::new(),
            guest_email: None,
            guest_phone: None,
            payment_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the flow can advance to a step.
    pub fn can_advance_to(&self, step: FlowStep) -> bool {
        match step {
            FlowStep::Cart => true,
            FlowStep::GuestDetails => true,
            FlowStep::Payment => self.guest_email.is_some(),
            FlowStep::Review => {
                self.can_advance_to(FlowStep::Payment) && self.payment_token.is_some()
            }
            FlowStep::Complete => self.can_advance_to(FlowStep::Review),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<FlowStep, BookingError> {
        let next = match self.step {
            FlowStep::Cart => FlowStep::GuestDetails,
            FlowStep::GuestDetails => FlowStep::Payment,
            FlowStep::Payment => FlowStep::Review,
            FlowStep::Review => FlowStep::Complete,
            FlowStep::Complete => {
                return Err(BookingError::InvalidFlowTransition {
                    from: "complete".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(BookingError::FlowIncomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;
        self.updated_at = current_timestamp();

        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<FlowStep, BookingError> {
        let prev = match self.step {
            FlowStep::Cart => {
                return Err(BookingError::InvalidFlowTransition {
                    from: "cart".to_string(),
                    to: "none".to_string(),
                })
            }
            FlowStep::GuestDetails => FlowStep::Cart,
            FlowStep::Payment => FlowStep::GuestDetails,
            FlowStep::Review => FlowStep::Payment,
            FlowStep::Complete => FlowStep::Review,
        };

        self.step = prev;
        self.updated_at = current_timestamp();

        Ok(prev)
    }

    /// Jump to a specific step, if allowed.
    pub fn go_to(&mut self, step: FlowStep) -> Result<(), BookingError> {
        // Any completed step or the current one can be revisited.
        if step == self.step || self.completed_steps.contains(&step) {
            self.step = step;
            self.updated_at = current_timestamp();
            Ok(())
        } else if self.can_advance_to(step) && step.number() == self.step.number() + 1 {
            self.advance()?;
            Ok(())
        } else {
            Err(BookingError::InvalidFlowTransition {
                from: self.step.as_str().to_string(),
                to: step.as_str().to_string(),
            })
        }
    }

    /// Get what's missing to enter a step.
    fn missing_for_step(&self, step: FlowStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            FlowStep::Payment => {
                if self.guest_email.is_none() {
                    missing.push("guest email");
                }
            }
            FlowStep::Review | FlowStep::Complete => {
                missing.extend(self.missing_for_step(FlowStep::Payment));
                if self.payment_token.is_none() {
                    missing.push("payment method");
                }
            }
            _ => {}
        }
        missing
    }

    /// Set the guest email.
    pub fn set_guest_email(&mut self, email: impl Into<String>) {
        self.guest_email = Some(email.into());
        self.updated_at = current_timestamp();
    }

    /// Set the guest phone number.
    pub fn set_guest_phone(&mut self, phone: impl Into<String>) {
        self.guest_phone = Some(phone.into());
        self.updated_at = current_timestamp();
    }

    /// Set the payment token.
    pub fn set_payment_token(&mut self, token: impl Into<String>) {
        self.payment_token = Some(token.into());
        self.updated_at = current_timestamp();
    }

    /// Check if the flow has completed.
    pub fn is_complete(&self) -> bool {
        self.step == FlowStep::Complete
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 5.0) * 100.0) as u8
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
