// Domain layer - Pure calculation types and logic
pub mod interp;
pub mod production;
pub mod units;
pub mod well_ip;
