use crate::hal::net_cfg::NetConfig;
use crate::hal::wifi::Wifi;

pub mod net_cfg;
pub mod wifi;

#[cfg(test)]
pub(crate) mod mock;

pub trait Platform {
    fn net_config(&self) -> &(dyn NetConfig + '_);
    fn wifi(&self) -> &(dyn Wifi + '_);
}
