pub mod convert;
pub mod generic;
