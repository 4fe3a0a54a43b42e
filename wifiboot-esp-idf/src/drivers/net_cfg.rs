use anyhow::bail;
use esp_idf_sys::{
    esp, esp_wifi_get_mac, wifi_interface_t, wifi_interface_t_WIFI_IF_AP,
    wifi_interface_t_WIFI_IF_STA,
};
use wifiboot::hal::net_cfg::{NetConfig, NetConfigKind};

/// Reads device properties from the Wi-Fi driver, which must already be initialized.
pub struct EspNetConfig;

fn interface(kind: NetConfigKind) -> wifi_interface_t {
    match kind {
        NetConfigKind::StationMac => wifi_interface_t_WIFI_IF_STA,
        NetConfigKind::AccessPointMac => wifi_interface_t_WIFI_IF_AP,
    }
}

impl NetConfig for EspNetConfig {
    fn get(&self, kind: NetConfigKind, buf: &mut [u8]) -> anyhow::Result<usize> {
        let mut mac = [0u8; 6];

        if buf.len() < mac.len() {
            bail!("Buffer of {} bytes cannot hold {:?}", buf.len(), kind)
        }

        esp!(unsafe { esp_wifi_get_mac(interface(kind), mac.as_mut_ptr()) })?;

        buf[..mac.len()].copy_from_slice(&mac);
        Ok(mac.len())
    }
}
