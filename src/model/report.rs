use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DailyOccupancyDto {
    pub date: NaiveDate,
    pub total_rooms: u64,
    pub occupied_rooms: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OccupancyDayDto {
    pub date: NaiveDate,
    pub occupied: u64,
    pub available: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RevenueTotalsDto {
    pub total_revenue: Decimal,
    pub total_tax: Decimal,
    pub total_other_charges: Decimal,
    pub paid_bills: u64,
    pub unpaid_bills: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RevenueBucketDto {
    pub key: String,
    pub total_revenue: Decimal,
    pub total_tax: Decimal,
    pub total_other_charges: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "grouping", rename_all = "snake_case")]
pub enum RevenueReportDto {
    Total(RevenueTotalsDto),
    Daily { buckets: Vec<RevenueBucketDto> },
    Monthly { buckets: Vec<RevenueBucketDto> },
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct NoShowDto {
    pub reservation_id: i32,
    pub customer_name: String,
    pub check_in_date: NaiveDate,
    pub number_of_rooms: i32,
    pub branch_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AvailabilitySummaryDto {
    pub total_rooms: u64,
    pub available_rooms: u64,
}
