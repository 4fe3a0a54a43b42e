use anyhow::{anyhow, bail};

use crate::hal::net_cfg::MacAddress;
use crate::hal::wifi::{ApConfig, StaConfig, WifiMode};

const MAC_PLACEHOLDER: char = '?';

#[derive(Debug, Default, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SysConfig {
    pub wifi: WifiSysConfig,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WifiSysConfig {
    pub sta: StaConfig,
    pub ap: ApConfig,
}

impl WifiSysConfig {
    /// Station takes precedence, there is no combined station + access point mode.
    pub fn mode(&self) -> WifiMode<'_> {
        if self.sta.enable {
            WifiMode::Station(&self.sta)
        } else {
            WifiMode::AccessPoint(&self.ap)
        }
    }
}

impl SysConfig {
    fn try_from_str(s: &str) -> anyhow::Result<Self> {
        let mut iter = s.splitn(3, ':');
        let mode = iter.next().ok_or_else(|| anyhow!("Missing Wi-Fi mode"))?;
        let ssid = iter.next().ok_or_else(|| anyhow!("Missing Wi-Fi SSID"))?;
        let pass = iter.next().ok_or_else(|| anyhow!("Missing Wi-Fi password"))?;

        let mut config = SysConfig::default();

        match mode {
            "sta" => {
                config.wifi.sta = StaConfig {
                    enable: true,
                    ssid: ssid.into(),
                    pass: pass.into(),
                };
            }
            "ap" => {
                config.wifi.sta.enable = false;
                config.wifi.ap.enable = true;
                config.wifi.ap.ssid = ssid.into();
                config.wifi.ap.pass = pass.into();
            }
            other => bail!("Unknown Wi-Fi mode {other:?}, expected \"sta\" or \"ap\""),
        }

        Ok(config)
    }

    /// Reads `WIFIBOOT_WIFI_CONFIG` (`mode:ssid:password`) captured at build time.
    pub fn from_env_var() -> anyhow::Result<Self> {
        if let Some(s) = option_env!("WIFIBOOT_WIFI_CONFIG") {
            SysConfig::try_from_str(s)
        } else {
            Err(anyhow!("WIFIBOOT_WIFI_CONFIG is not set"))
        }
    }

    /// Replaces `?` in the access point SSID with the trailing hex digits of `mac`.
    pub fn expand_mac_placeholders(&mut self, mac: &MacAddress) {
        let ssid = &mut self.wifi.ap.ssid;
        let count = ssid.chars().filter(|&c| c == MAC_PLACEHOLDER).count();

        if count == 0 {
            return;
        }

        if count % 2 != 0 || count > 2 * MacAddress::LEN {
            log::warn!("Cannot expand {count} MAC placeholders in {ssid:?}");
            return;
        }

        let hex = mac.to_hex();
        let mut digits = hex.chars().skip(hex.len() - count);

        *ssid = ssid
            .chars()
            .map(|c| match c {
                MAC_PLACEHOLDER => digits.next().unwrap_or(c),
                _ => c,
            })
            .collect();
    }
}
