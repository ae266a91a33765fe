//! Core value types: dates, tenors, and currencies.

mod currency;
mod date;
mod date_or_tenor;
mod tenor;

pub use currency::Currency;
pub use date::Date;
pub use date_or_tenor::DateOrTenor;
pub use tenor::{Tenor, TimeUnit};
