//! Modelo de FuelRecord

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::collection::Record;

/// Estado de pago del abastecimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Paid,
    Reimbursed,
}

/// Registro de abastecimiento de una máquina
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelRecord {
    pub id: u64,
    pub machine_id: u64,
    pub machine_name: String,
    pub date: NaiveDate,
    pub liters: Decimal,
    pub total_value: Decimal,
    pub odometer: Option<Decimal>,
    pub payment_status: PaymentStatus,
    pub description: Option<String>,
    pub attachments: Vec<String>,
}

impl Record for FuelRecord {
    fn id(&self) -> u64 {
        self.id
    }
}
