//! # Pricing
//!
//! Fixed per-unit price table, in the store's currency. Totals are exact decimals.

use crate::model::Size;
use crate::order_actor::OrderError;
use rust_decimal::Decimal;

/// Price of one unit of `size`.
pub fn unit_price(size: Size) -> Decimal {
    let amount: i64 = match size {
        Size::Xs => 600,
        Size::S => 800,
        Size::M => 900,
        Size::L => 1000,
        Size::Xl => 1100,
        Size::Xxl => 1200,
    };
    Decimal::from(amount)
}

/// Total price of `quantity` units of `size`.
pub fn total_for(size: Size, quantity: u32) -> Decimal {
    unit_price(size) * Decimal::from(quantity)
}

/// Prices an order straight from the size code entered in the form.
///
/// # Errors
/// [`OrderError::InvalidSize`] if `size_code` is not one of the known codes.
pub fn price_for(size_code: &str, quantity: u32) -> Result<Decimal, OrderError> {
    let size = size_code.parse::<Size>()?;
    Ok(total_for(size, quantity))
}
