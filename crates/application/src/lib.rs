//! rootwalk application layer: ports, the iterative resolver and its use cases.
pub mod ports;
pub mod services;
pub mod use_cases;
