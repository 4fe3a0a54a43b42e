pub mod net_cfg;
pub mod wifi;
