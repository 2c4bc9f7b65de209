pub mod domain;
pub mod framework_use_cases;
pub mod ports;
pub mod service;
