use std::fmt;

use anyhow::bail;

use crate::config::SysConfig;
use crate::hal::net_cfg::{MacAddress, NetConfig, NetConfigKind};
use crate::hal::wifi::{Wifi, WifiMode};

/// Outcome code of the platform initialization phase of boot.
#[repr(i32)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InitResult {
    Ok = 0,
    WifiInitFailed = -1,
}

impl InitResult {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&Result<(), InitError>> for InitResult {
    fn from(result: &Result<(), InitError>) -> Self {
        match result {
            Ok(()) => InitResult::Ok,
            Err(e) => e.result(),
        }
    }
}

#[derive(Debug)]
pub enum InitError {
    StationSetupFailed(anyhow::Error),
    AccessPointSetupFailed(anyhow::Error),
}

impl InitError {
    pub fn result(&self) -> InitResult {
        match self {
            InitError::StationSetupFailed(_) | InitError::AccessPointSetupFailed(_) => {
                InitResult::WifiInitFailed
            }
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::StationSetupFailed(e) => write!(f, "Wi-Fi station setup failed: {e}"),
            InitError::AccessPointSetupFailed(e) => {
                write!(f, "Wi-Fi access point setup failed: {e}")
            }
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::StationSetupFailed(e) | InitError::AccessPointSetupFailed(e) => {
                Some(e.as_ref())
            }
        }
    }
}

/// Writes the device MAC address into `mac`.
///
/// Succeeds only if the provider filled all six bytes.
pub fn get_mac_address(net: &dyn NetConfig, mac: &mut [u8; 6]) -> anyhow::Result<()> {
    let kind = NetConfigKind::StationMac;
    let len = net.get(kind, mac)?;

    if len != kind.size() {
        bail!("MAC address query returned {len} bytes, expected {}", kind.size())
    }

    Ok(())
}

pub fn device_mac_address(net: &dyn NetConfig) -> anyhow::Result<MacAddress> {
    let mut mac = [0u8; MacAddress::LEN];
    get_mac_address(net, &mut mac)?;
    Ok(MacAddress::from(mac))
}

/// Brings up Wi-Fi in the single mode selected by `cfg`.
pub fn init_platform(cfg: &SysConfig, wifi: &dyn Wifi) -> Result<(), InitError> {
    let mode = cfg.wifi.mode();

    log::info!("Setting up Wi-Fi in {} mode", mode.name());

    let result = match mode {
        WifiMode::Station(sta) => wifi.setup_sta(sta).map_err(InitError::StationSetupFailed),
        WifiMode::AccessPoint(ap) => wifi.setup_ap(ap).map_err(InitError::AccessPointSetupFailed),
    };

    if let Err(e) = &result {
        log::error!("{e}");
    }

    result
}
