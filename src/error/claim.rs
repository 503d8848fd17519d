use thiserror::Error;

/// Rejection reasons for a claim attempt.
///
/// None of these mutate state: a rejected attempt creates no claim record and does not
/// consume quota.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimError {
    /// The session is not in the started state.
    #[error("Claim rejected: the button is not active")]
    NotActive,

    /// The member already used every claim they are allowed.
    #[error("Claim rejected: quota of {quota} claims exhausted")]
    QuotaExceeded {
        /// Quota that applied to the member at claim time
        quota: u64,
    },

    /// The counter is at or below the grace threshold.
    #[error("Claim rejected: counter at {seconds} is too low")]
    TooFast {
        /// Counter value observed when the attempt was rejected
        seconds: i64,
    },
}

impl ClaimError {
    /// Text shown to the member in the ephemeral reply.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotActive => "The button is not active right now.".to_string(),
            Self::QuotaExceeded { quota } => {
                format!("You already clicked {} times.", quota)
            }
            Self::TooFast { .. } => {
                "Clicking under 2 seconds? Let's call it a mistake, try again!".to_string()
            }
        }
    }
}
