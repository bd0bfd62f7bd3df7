//! Occupancy and revenue report rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::report::{
    DailyOccupancyDto, NoShowDto, OccupancyDayDto, RevenueBucketDto, RevenueReportDto,
    RevenueTotalsDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyOccupancy {
    pub date: NaiveDate,
    pub total_rooms: u64,
    pub occupied_rooms: u64,
}

impl DailyOccupancy {
    pub fn into_dto(self) -> DailyOccupancyDto {
        DailyOccupancyDto {
            date: self.date,
            total_rooms: self.total_rooms,
            occupied_rooms: self.occupied_rooms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyDay {
    pub date: NaiveDate,
    pub occupied: u64,
    pub available: u64,
}

impl OccupancyDay {
    pub fn into_dto(self) -> OccupancyDayDto {
        OccupancyDayDto {
            date: self.date,
            occupied: self.occupied,
            available: self.available,
        }
    }
}

/// How revenue is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueGrouping {
    None,
    Daily,
    Monthly,
}

impl RevenueGrouping {
    /// Bucket key for a billing date: `YYYY-MM-DD` or `YYYY-MM`.
    pub fn key(&self, date: NaiveDate) -> Option<String> {
        match self {
            Self::None => None,
            Self::Daily => Some(date.format("%Y-%m-%d").to_string()),
            Self::Monthly => Some(date.format("%Y-%m").to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevenueTotals {
    pub total_revenue: Decimal,
    pub total_tax: Decimal,
    pub total_other_charges: Decimal,
    pub paid_bills: u64,
    pub unpaid_bills: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueBucket {
    pub key: String,
    pub total_revenue: Decimal,
    pub total_tax: Decimal,
    pub total_other_charges: Decimal,
}

impl RevenueBucket {
    pub fn into_dto(self) -> RevenueBucketDto {
        RevenueBucketDto {
            key: self.key,
            total_revenue: self.total_revenue,
            total_tax: self.total_tax,
            total_other_charges: self.total_other_charges,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevenueReport {
    Total(RevenueTotals),
    Daily(Vec<RevenueBucket>),
    Monthly(Vec<RevenueBucket>),
}

impl RevenueReport {
    pub fn into_dto(self) -> RevenueReportDto {
        let buckets = |b: Vec<RevenueBucket>| -> Vec<RevenueBucketDto> {
            b.into_iter().map(RevenueBucket::into_dto).collect()
        };
        match self {
            Self::Total(t) => RevenueReportDto::Total(RevenueTotalsDto {
                total_revenue: t.total_revenue,
                total_tax: t.total_tax,
                total_other_charges: t.total_other_charges,
                paid_bills: t.paid_bills,
                unpaid_bills: t.unpaid_bills,
            }),
            Self::Daily(b) => RevenueReportDto::Daily { buckets: buckets(b) },
            Self::Monthly(b) => RevenueReportDto::Monthly { buckets: buckets(b) },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoShowEntry {
    pub reservation_id: i32,
    pub customer_name: String,
    pub check_in_date: NaiveDate,
    pub number_of_rooms: i32,
    pub branch_name: String,
}

impl NoShowEntry {
    pub fn into_dto(self) -> NoShowDto {
        NoShowDto {
            reservation_id: self.reservation_id,
            customer_name: self.customer_name,
            check_in_date: self.check_in_date,
            number_of_rooms: self.number_of_rooms,
            branch_name: self.branch_name,
        }
    }
}
