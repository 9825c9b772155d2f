//! Submitted document record and its flat spreadsheet row

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::invoice::totals::compute_totals;
use crate::types::*;
use crate::utils::money::plain_amount;

/// Kind of billing document sharing the totals pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Quotation,
    PurchaseOrder,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Quotation => "Quotation",
            DocumentKind::PurchaseOrder => "Purchase Order",
        }
    }
}

/// Column headers matching [`InvoiceRecord::to_row`]
pub const ROW_HEADERS: [&str; 13] = [
    "ID",
    "Number",
    "Type",
    "Date",
    "Customer",
    "Items",
    "Subtotal",
    "Discount",
    "Tax",
    "Additional Charges",
    "Round Off",
    "Total",
    "Created At",
];

/// A submitted document with the totals computed at submission time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub number: String,
    pub kind: DocumentKind,
    pub date: NaiveDate,
    pub customer: String,
    pub items: Vec<LineItem>,
    pub adjustments: GlobalAdjustments,
    pub totals: TotalsResult,
    pub created_at: NaiveDateTime,
}

impl InvoiceRecord {
    /// Create a record, computing its totals from the draft
    pub fn new(
        number: String,
        kind: DocumentKind,
        date: NaiveDate,
        customer: String,
        items: Vec<LineItem>,
        adjustments: GlobalAdjustments,
    ) -> Self {
        let totals = compute_totals(&items, &adjustments);
        Self {
            id: Uuid::new_v4(),
            number,
            kind,
            date,
            customer,
            items,
            adjustments,
            totals,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Flatten into one spreadsheet row; items travel as a JSON cell
    pub fn to_row(&self) -> InvoiceResult<Vec<String>> {
        let items_json = serde_json::to_string(&self.items)?;

        Ok(vec![
            self.id.to_string(),
            self.number.clone(),
            self.kind.label().to_string(),
            self.date.format("%Y-%m-%d").to_string(),
            self.customer.clone(),
            items_json,
            plain_amount(&self.totals.subtotal),
            plain_amount(&self.totals.total_discount),
            plain_amount(&self.totals.tax_amount),
            plain_amount(&self.totals.additional_charges_total),
            plain_amount(&self.totals.round_off_amount),
            plain_amount(&self.totals.final_total),
            self.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        ])
    }

    /// Parse the items cell written by [`InvoiceRecord::to_row`]
    pub fn items_from_cell(cell: &str) -> InvoiceResult<Vec<LineItem>> {
        Ok(serde_json::from_str(cell)?)
    }
}
