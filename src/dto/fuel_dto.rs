use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::fuel::{FuelRecord, PaymentStatus};
use crate::utils::formats::double_option;
use crate::utils::validation::validate_non_negative;

// Request para registrar un abastecimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelRecordRequest {
    pub date: NaiveDate,
    #[validate(custom = "validate_non_negative")]
    pub liters: Decimal,
    #[validate(custom = "validate_non_negative")]
    pub total_value: Decimal,
    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub odometer: Option<Decimal>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

// Request de actualización parcial; `null` limpia odómetro y descripción
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFuelRecordRequest {
    pub date: Option<NaiveDate>,
    #[validate(custom = "validate_non_negative")]
    pub liters: Option<Decimal>,
    #[validate(custom = "validate_non_negative")]
    pub total_value: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom = "validate_non_negative")]
    pub odometer: Option<Option<Decimal>>,
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateFuelRecordRequest {
    pub fn apply_to(self, current: &FuelRecord) -> FuelRecord {
        FuelRecord {
            id: current.id,
            machine_id: current.machine_id,
            machine_name: current.machine_name.clone(),
            date: self.date.unwrap_or(current.date),
            liters: self.liters.unwrap_or(current.liters),
            total_value: self.total_value.unwrap_or(current.total_value),
            odometer: self.odometer.unwrap_or(current.odometer),
            payment_status: self.payment_status.unwrap_or(current.payment_status),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            attachments: self.attachments.unwrap_or_else(|| current.attachments.clone()),
        }
    }
}
