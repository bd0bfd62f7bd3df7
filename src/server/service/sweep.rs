use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::BookingPolicy, data::reservation::ReservationRepository, error::AppError,
    service::reservation::ReservationService,
};

/// Outcome of one sweep run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Reservations the sweep changed.
    pub processed: Vec<i32>,
    /// Reservations the sweep could not change; each failure is logged.
    pub failed: Vec<i32>,
}

/// Batch operations triggered by an external scheduler.
///
/// Each reservation is handled in its own transaction, so one failure does not undo the
/// rest of the run.
pub struct SweepService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a BookingPolicy,
}

impl<'a> SweepService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a BookingPolicy) -> Self {
        Self { db, policy }
    }

    /// Cancels open reservations created at or after `created_since` whose payment is
    /// still pending, freeing their rooms.
    pub async fn run_unpaid_sweep(
        &self,
        created_since: DateTime<Utc>,
    ) -> Result<SweepOutcome, AppError> {
        let stale = ReservationRepository::new(self.db)
            .get_pending_created_since(created_since)
            .await?;
        let reservations = ReservationService::new(self.db, self.policy);

        let mut outcome = SweepOutcome::default();
        for reservation in stale {
            match reservations.cancel(reservation.id).await {
                Ok(_) => outcome.processed.push(reservation.id),
                Err(e) => {
                    tracing::error!(
                        "Unpaid sweep failed to cancel reservation {}: {}",
                        reservation.id,
                        e
                    );
                    outcome.failed.push(reservation.id);
                }
            }
        }

        tracing::info!(
            "Unpaid sweep cancelled {} reservation(s), {} failure(s)",
            outcome.processed.len(),
            outcome.failed.len()
        );

        Ok(outcome)
    }

    /// Completes open reservations whose check-out date is before `today`, freeing their
    /// rooms.
    pub async fn run_completion_sweep(&self, today: NaiveDate) -> Result<SweepOutcome, AppError> {
        let overdue = ReservationRepository::new(self.db)
            .get_overdue(today)
            .await?;
        let reservations = ReservationService::new(self.db, self.policy);

        let mut outcome = SweepOutcome::default();
        for reservation in overdue {
            match reservations.close_stay(reservation.id).await {
                Ok(_) => outcome.processed.push(reservation.id),
                Err(e) => {
                    tracing::error!(
                        "Completion sweep failed to close reservation {}: {}",
                        reservation.id,
                        e
                    );
                    outcome.failed.push(reservation.id);
                }
            }
        }

        tracing::info!(
            "Completion sweep closed {} reservation(s), {} failure(s)",
            outcome.processed.len(),
            outcome.failed.len()
        );

        Ok(outcome)
    }
}
