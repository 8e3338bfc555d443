pub mod info;
pub mod ops;
pub mod patients;
