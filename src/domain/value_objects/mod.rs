//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`MemberId`]: Positive integer member identifier
//! - [`Money`]: Minor-unit currency amount with display formatting
//! - [`BenefitField`]: The figures reported per member

pub mod benefit_field;
pub mod member_id;
pub mod money;

pub use benefit_field::BenefitField;
pub use member_id::MemberId;
pub use money::Money;
