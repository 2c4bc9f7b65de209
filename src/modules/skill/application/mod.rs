pub mod domain;
pub mod skill_use_cases;
pub mod ports;
pub mod service;
