//! Domain Models

pub mod employee;
pub mod order;

// Re-exports
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use order::{Order, OrderCreate, OrderDetail, OrderUpdate};
