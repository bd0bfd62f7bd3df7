use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillingStatus;
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use crate::server::{
    data::{billing::BillingRepository, report::ReportRepository, room::RoomRepository},
    error::AppError,
    model::report::{
        DailyOccupancy, NoShowEntry, OccupancyDay, RevenueBucket, RevenueGrouping,
        RevenueReport, RevenueTotals,
    },
};

const MAX_PROJECTION_DAYS: i64 = 366;

/// Read-only occupancy and revenue reporting.
///
/// Queries run outside transactions and only ever see committed bookings.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rooms in total and rooms in-house on one date.
    pub async fn daily_occupancy(
        &self,
        date: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<DailyOccupancy, AppError> {
        let total_rooms = RoomRepository::new(self.db).count(branch_id, None).await?;
        let occupied_rooms = ReportRepository::new(self.db)
            .occupied_room_count(date, branch_id)
            .await?;

        Ok(DailyOccupancy {
            date,
            total_rooms,
            occupied_rooms,
        })
    }

    /// Occupied and free room counts for every day of `[from, to]`, in date order.
    ///
    /// # Returns
    /// - `Ok(Vec<OccupancyDay>)` - One entry per calendar day
    /// - `Err(AppError::Validation)` - `from` is after `to`, or the range spans more than
    ///   366 days
    pub async fn projected_occupancy(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<Vec<OccupancyDay>, AppError> {
        ensure_ordered(from, to)?;
        let span = (to - from).num_days();
        if span >= MAX_PROJECTION_DAYS {
            return Err(AppError::Validation(format!(
                "Occupancy projections cover at most {} days",
                MAX_PROJECTION_DAYS
            )));
        }

        let total = RoomRepository::new(self.db).count(branch_id, None).await?;
        let reports = ReportRepository::new(self.db);

        let mut days = Vec::with_capacity(span as usize + 1);
        let mut next = Some(from);
        while let Some(date) = next.filter(|d| *d <= to) {
            let occupied = reports.occupied_room_count(date, branch_id).await?;
            days.push(OccupancyDay {
                date,
                occupied,
                available: total.saturating_sub(occupied),
            });
            next = date.succ_opt();
        }

        Ok(days)
    }

    /// Revenue from bills dated within `[from, to]`.
    ///
    /// Ungrouped, returns overall totals with paid/unpaid bill counts. Grouped, returns one
    /// bucket per day (`YYYY-MM-DD`) or month (`YYYY-MM`) that has bills, ordered by key.
    pub async fn revenue(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        branch_id: Option<i32>,
        grouping: RevenueGrouping,
    ) -> Result<RevenueReport, AppError> {
        ensure_ordered(from, to)?;

        let bills = BillingRepository::new(self.db)
            .get_between(from, to, branch_id)
            .await?;

        if grouping == RevenueGrouping::None {
            let mut totals = RevenueTotals::default();
            for bill in &bills {
                totals.total_revenue += bill.total_amount;
                totals.total_tax += bill.tax_amount;
                totals.total_other_charges += bill.other_charges;
                match bill.status {
                    BillingStatus::Paid => totals.paid_bills += 1,
                    BillingStatus::Unpaid => totals.unpaid_bills += 1,
                }
            }
            return Ok(RevenueReport::Total(totals));
        }

        let mut buckets: BTreeMap<String, RevenueBucket> = BTreeMap::new();
        for bill in bills {
            let Some(key) = grouping.key(bill.billing_date) else {
                continue;
            };
            let bucket = buckets
                .entry(key.clone())
                .or_insert_with(|| RevenueBucket {
                    key,
                    total_revenue: Default::default(),
                    total_tax: Default::default(),
                    total_other_charges: Default::default(),
                });
            bucket.total_revenue += bill.total_amount;
            bucket.total_tax += bill.tax_amount;
            bucket.total_other_charges += bill.other_charges;
        }
        let buckets: Vec<RevenueBucket> = buckets.into_values().collect();

        Ok(match grouping {
            RevenueGrouping::Daily => RevenueReport::Daily(buckets),
            _ => RevenueReport::Monthly(buckets),
        })
    }

    /// Reservations still marked `No_show`, latest check-in first.
    pub async fn no_shows(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        branch_id: Option<i32>,
    ) -> Result<Vec<NoShowEntry>, AppError> {
        if let (Some(from), Some(to)) = (from, to) {
            ensure_ordered(from, to)?;
        }

        Ok(ReportRepository::new(self.db)
            .no_shows(from, to, branch_id)
            .await?)
    }
}

fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> Result<(), AppError> {
    if from > to {
        return Err(AppError::Validation(format!(
            "Report start {} is after its end {}",
            from, to
        )));
    }
    Ok(())
}
