//! Rule descriptors interpreted by the evaluators in [`crate::checks`].

mod category;
mod kind;
mod value_set;

pub use category::RuleCategory;
pub use kind::{Denominator, RuleKind};
pub use value_set::{Condition, ConditionMode, ValueSet};
