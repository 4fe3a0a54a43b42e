use anyhow::bail;

pub const MAX_SSID_LEN: usize = 32;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 64;

pub trait Wifi {
    fn setup_sta(&self, config: &StaConfig) -> anyhow::Result<()>;

    fn setup_ap(&self, config: &ApConfig) -> anyhow::Result<()>;

    fn is_connected(&self) -> bool;
}

#[derive(Debug, Default, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaConfig {
    pub enable: bool,
    pub ssid: String,
    #[serde(skip_serializing)]
    pub pass: String,
}

impl StaConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_credentials(&self.ssid, &self.pass)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApConfig {
    pub enable: bool,
    pub ssid: String,
    #[serde(skip_serializing)]
    pub pass: String,
    pub channel: u8,
    pub hidden: bool,
    pub max_connections: u16,
}

impl Default for ApConfig {
    fn default() -> Self {
        ApConfig {
            enable: true,
            ssid: "wifiboot_??????".into(),
            pass: String::new(),
            channel: 6,
            hidden: false,
            max_connections: 4,
        }
    }
}

impl ApConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_credentials(&self.ssid, &self.pass)?;

        if !(1..=13).contains(&self.channel) {
            bail!("Wi-Fi channel {} is out of range 1..=13", self.channel)
        }

        Ok(())
    }
}

fn validate_credentials(ssid: &str, pass: &str) -> anyhow::Result<()> {
    if ssid.is_empty() {
        bail!("Wi-Fi SSID must be non-empty")
    }

    if ssid.len() > MAX_SSID_LEN {
        bail!("Wi-Fi SSID is longer than {MAX_SSID_LEN} bytes")
    }

    // Empty means an open network
    if !pass.is_empty() && !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&pass.len()) {
        bail!("Wi-Fi password must be {MIN_PASSWORD_LEN} to {MAX_PASSWORD_LEN} bytes long")
    }

    Ok(())
}

/// The single radio mode selected for this boot.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WifiMode<'a> {
    Station(&'a StaConfig),
    AccessPoint(&'a ApConfig),
}

impl WifiMode<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            WifiMode::Station(_) => "station",
            WifiMode::AccessPoint(_) => "access point",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sta(ssid: &str, pass: &str) -> StaConfig {
        StaConfig {
            enable: true,
            ssid: ssid.into(),
            pass: pass.into(),
        }
    }

    #[test]
    fn test_sta_open_network_is_valid() {
        assert!(sta("home", "").validate().is_ok());
    }

    #[test]
    fn test_sta_empty_ssid_is_invalid() {
        let err = sta("", "password").validate().unwrap_err();
        assert_eq!(err.to_string(), "Wi-Fi SSID must be non-empty");
    }

    #[test]
    fn test_sta_long_ssid_is_invalid() {
        let ssid = "x".repeat(MAX_SSID_LEN + 1);
        assert!(sta(&ssid, "").validate().is_err());
        assert!(sta(&ssid[..MAX_SSID_LEN], "").validate().is_ok());
    }

    #[test]
    fn test_sta_short_password_is_invalid() {
        assert!(sta("home", "1234567").validate().is_err());
        assert!(sta("home", "12345678").validate().is_ok());
    }

    #[test]
    fn test_ap_channel_range() {
        let mut ap = ApConfig {
            ssid: "lobby".into(),
            ..Default::default()
        };
        assert!(ap.validate().is_ok());

        ap.channel = 0;
        assert!(ap.validate().is_err());

        ap.channel = 14;
        assert!(ap.validate().is_err());
    }

    #[test]
    fn test_mode_name() {
        let sta = StaConfig::default();
        let ap = ApConfig::default();
        assert_eq!(WifiMode::Station(&sta).name(), "station");
        assert_eq!(WifiMode::AccessPoint(&ap).name(), "access point");
    }
}
