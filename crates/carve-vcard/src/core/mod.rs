//! Core vCard content-line types.

pub mod parameter;
pub mod property;
pub mod structured;

pub use parameter::VcardParameter;
pub use property::VcardProperty;
pub use structured::StructuredName;
