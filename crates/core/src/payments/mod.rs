//! Payments module - record model, breakdown calculator and form layer.

mod payments_calculator;
mod payments_form;
mod payments_model;


pub use payments_calculator::{
    amount_from_f64, compute_breakdown, monthly_property_tax, parse_amount, round2,
    sanitize_amount,
};
pub use payments_form::{PaymentField, PaymentForm};
pub use payments_model::{PaymentBreakdown, PaymentRecord};
