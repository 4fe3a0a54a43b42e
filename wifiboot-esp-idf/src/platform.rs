use anyhow::anyhow;
use esp_idf_hal::peripherals::Peripherals;
use wifiboot::hal::net_cfg::NetConfig;
use wifiboot::hal::wifi::Wifi;
use wifiboot::hal::Platform;

use crate::drivers::net_cfg::EspNetConfig;
use crate::drivers::wifi::EspWifi;

pub struct PlatformImpl {
    wifi: EspWifi,
    net_config: EspNetConfig,
}

impl PlatformImpl {
    pub fn new() -> anyhow::Result<Self> {
        let peripherals = Peripherals::take().ok_or_else(|| anyhow!("Peripherals already taken"))?;

        // Creating the driver initializes esp_wifi, which the MAC query depends on
        let wifi = EspWifi::new(peripherals.modem)?;
        let net_config = EspNetConfig;

        Ok(Self { wifi, net_config })
    }
}

impl Platform for PlatformImpl {
    fn net_config(&self) -> &(dyn NetConfig + '_) {
        &self.net_config
    }

    fn wifi(&self) -> &(dyn Wifi + '_) {
        &self.wifi
    }
}
