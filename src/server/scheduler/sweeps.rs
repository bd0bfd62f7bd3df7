use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::{BookingPolicy, Config},
    error::AppError,
    service::sweep::SweepService,
};

/// Starts the reservation sweep scheduler
///
/// Registers two jobs on the configured cron schedules:
/// - Unpaid sweep: cancels reservations created today that still have no payment
/// - Completion sweep: closes reservations whose check-out date has passed
///
/// # Arguments
/// - `db`: Database connection
/// - `config`: Schedules and booking policy
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler, kept by the caller for shutdown
/// - `Err(AppError::SchedulerErr)`: Invalid schedule or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_policy = config.policy.clone();
    let unpaid = Job::new_async(config.unpaid_sweep_schedule.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let policy = job_policy.clone();

        Box::pin(async move {
            if let Err(e) = run_unpaid_sweep(&db, &policy).await {
                tracing::error!("Error running unpaid reservation sweep: {}", e);
            }
        })
    })?;

    let job_db = db;
    let job_policy = config.policy.clone();
    let completion = Job::new_async(
        config.completion_sweep_schedule.as_str(),
        move |_uuid, _lock| {
            let db = job_db.clone();
            let policy = job_policy.clone();

            Box::pin(async move {
                if let Err(e) = run_completion_sweep(&db, &policy).await {
                    tracing::error!("Error running completion sweep: {}", e);
                }
            })
        },
    )?;

    scheduler.add(unpaid).await?;
    scheduler.add(completion).await?;
    scheduler.start().await?;

    tracing::info!(
        "Sweep scheduler started (unpaid: {}, completion: {})",
        config.unpaid_sweep_schedule,
        config.completion_sweep_schedule
    );

    Ok(scheduler)
}

/// Cancels unpaid reservations created since midnight UTC.
async fn run_unpaid_sweep(db: &DatabaseConnection, policy: &BookingPolicy) -> Result<(), AppError> {
    let cutoff = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    SweepService::new(db, policy)
        .run_unpaid_sweep(cutoff)
        .await?;

    Ok(())
}

/// Closes reservations whose check-out date is before today (UTC).
async fn run_completion_sweep(
    db: &DatabaseConnection,
    policy: &BookingPolicy,
) -> Result<(), AppError> {
    SweepService::new(db, policy)
        .run_completion_sweep(Utc::now().date_naive())
        .await?;

    Ok(())
}
