//! Built-in default form used until a client registers its own.
//!
//! Field names, order, types and required flags are kept identical to the
//! form existing clients were built against; do not edit them.

use once_cell::sync::Lazy;

use super::field::{FieldSpec, FieldType};
use super::schema::FormSchema;

/// Title of the built-in default form.
pub const DEFAULT_FORM_TITLE: &str = "Mutual Fund Application Form";

static DEFAULT_FORM: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(DEFAULT_FORM_TITLE, default_fields())
});

/// Returns a copy of the built-in mutual fund application form.
pub fn default_form() -> FormSchema {
    DEFAULT_FORM.clone()
}

fn default_fields() -> Vec<FieldSpec> {
    vec![
        // Distributor Information
        FieldSpec::required("ARN", FieldType::String),
        FieldSpec::optional("Sub-broker ARN Code", FieldType::String),
        FieldSpec::required("EUIN", FieldType::String),
        FieldSpec::optional("RIA Code", FieldType::String),
        // Applicant Details
        FieldSpec::required("Applicant Name", FieldType::String),
        FieldSpec::required("Applicant PAN", FieldType::String),
        FieldSpec::required("Applicant Date of Birth", FieldType::Date),
        FieldSpec::optional("Applicant Father’s/Spouse’s Name", FieldType::String),
        FieldSpec::required("Applicant Gender", FieldType::String),
        FieldSpec::optional("Applicant Marital Status", FieldType::String),
        FieldSpec::required("Applicant Occupation", FieldType::String),
        FieldSpec::required("Mode of Holding", FieldType::String),
        FieldSpec::required("Tax Status", FieldType::String),
        FieldSpec::required("Contact Number – Mobile", FieldType::Phone),
        FieldSpec::required("Email ID", FieldType::String),
        // Mailing Address
        FieldSpec::required("Address Line 1", FieldType::String),
        FieldSpec::optional("Address Line 2", FieldType::String),
        FieldSpec::required("City", FieldType::String),
        FieldSpec::required("State", FieldType::String),
        FieldSpec::required("Pincode", FieldType::String),
        FieldSpec::required("Country", FieldType::String),
        // KYC & Income Details
        FieldSpec::required("Gross Annual Income", FieldType::String),
        FieldSpec::optional("Net Worth", FieldType::String),
        FieldSpec::required("PEP Status", FieldType::String),
        FieldSpec::required("Occupation Type", FieldType::String),
        // Investment Scheme Selection
        FieldSpec::required("Scheme Name", FieldType::String),
        FieldSpec::required("Amount", FieldType::Number),
        FieldSpec::required("Mode of Investment", FieldType::String),
        // Bank Account Details
        FieldSpec::required("Bank Name", FieldType::String),
        FieldSpec::required("Branch", FieldType::String),
        FieldSpec::required("Account Number", FieldType::String),
        FieldSpec::required("Account Type", FieldType::String),
        FieldSpec::required("IFSC Code", FieldType::String),
        FieldSpec::required("MICR", FieldType::String),
        // Investment & Payment Details
        FieldSpec::required("Total Investment Amount", FieldType::Number),
        FieldSpec::required("Payment Mode", FieldType::String),
        FieldSpec::optional("Cheque/DD/UTR No.", FieldType::String),
        FieldSpec::required("Payment Bank", FieldType::String),
        // FATCA/CRS Declaration
        FieldSpec::required("Country of Birth", FieldType::String),
        FieldSpec::required("Nationality", FieldType::String),
        FieldSpec::required("Tax Residency Country", FieldType::String),
        FieldSpec::optional("Tax Identification No.", FieldType::String),
        // Nomination Details
        FieldSpec::required("Nominee Name", FieldType::String),
        FieldSpec::required("Relationship with Applicant", FieldType::String),
        FieldSpec::optional("Nominee Date of Birth", FieldType::Date),
        FieldSpec::required("Nominee Address", FieldType::String),
        FieldSpec::optional("Nominee PAN", FieldType::String),
        FieldSpec::optional("Guardian Name", FieldType::String),
        // Declaration & Signature
        FieldSpec::required("Date of Declaration", FieldType::Date),
        FieldSpec::required("Place of Declaration", FieldType::String),
    ]
}
