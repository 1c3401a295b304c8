//! Domain model: closed enumerations and response entities.

mod balance;
mod course;
mod currency;
mod discount;
mod lifetime;
mod payment;
mod service;
mod status;

pub use balance::{Balance, Balances};
pub use course::Course;
pub use currency::{CourseSource, Currency, Network};
pub use discount::Discount;
pub use lifetime::Lifetime;
pub use payment::{Payment, PaymentConvert};
pub use service::{Service, ServiceCommission, ServiceLimit};
pub use status::{PaymentStatus, PayoutStatus, Priority, StaticWalletStatus};
