pub mod build_mart_use_case;
pub mod ports;
