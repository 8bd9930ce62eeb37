//! Appointment domain types.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment.
///
/// Wire format keeps the Spanish labels clients already display. Every create
/// and update writes `Programada`; there is no transition operation yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "Programada")]
    Scheduled,
}
