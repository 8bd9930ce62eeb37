//! Newtype wrappers for store-assigned identifiers.
//!
//! Every table hands out positive integers from its own counter; the wrappers
//! keep a patient id from being passed where a record id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A table's counter has handed out `u32::MAX` and cannot advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} sequence exhausted")]
pub struct IdSpaceExhausted(pub &'static str);

macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// The id that follows this one in its table's sequence.
            pub fn next(self) -> Result<Self, IdSpaceExhausted> {
                self.0
                    .checked_add(1)
                    .map(Self)
                    .ok_or(IdSpaceExhausted(stringify!($name)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

int_id!(
    /// Identifies a user account (doctor or admin).
    UserId
);
int_id!(
    /// Identifies a patient.
    PatientId
);
int_id!(
    /// Identifies a medical record entry.
    RecordId
);
int_id!(
    /// Identifies an appointment.
    AppointmentId
);
