pub mod employee;
pub mod region;
