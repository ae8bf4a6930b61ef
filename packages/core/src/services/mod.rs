//! Business Services
//!
//! This module contains the schedule-derivation service:
//!
//! - `ScheduleService` - assignment classification, even spacing, custom
//!   pacing propagation, and full-course date extraction
//! - `ScheduleConfig` - injected feature configuration
//! - `ScheduleError` - service-layer failures
//!
//! Services coordinate between the content tree access layer and the pacing
//! rules; they hold no state of their own beyond borrowed collaborators.

pub mod error;
pub mod schedule_service;

pub use error::ScheduleError;
pub use schedule_service::{ScheduleConfig, ScheduleService, SpacedSections};
