use std::cell::RefCell;
use std::time::Duration;

use anyhow::bail;
use embedded_svc::wifi::{
    AccessPointConfiguration, AuthMethod, ClientConfiguration, Configuration,
};
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::WifiWait;
use wifiboot::hal::wifi::{ApConfig, StaConfig, Wifi};

const START_TIMEOUT: Duration = Duration::from_secs(20);

pub struct EspWifi {
    esp_wifi: RefCell<esp_idf_svc::wifi::EspWifi<'static>>,
    sys_loop: EspSystemEventLoop,
}

fn auth_method(password: &str) -> AuthMethod {
    if password.is_empty() {
        log::info!("Wi-Fi password is empty. Authentication is disabled.");
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    }
}

fn to_esp_client_config(src: &StaConfig) -> anyhow::Result<Configuration> {
    src.validate()?;

    let config = ClientConfiguration {
        ssid: src.ssid.as_str().into(),
        password: src.pass.as_str().into(),
        channel: Default::default(),
        auth_method: auth_method(&src.pass),
        ..Default::default()
    };

    Ok(Configuration::Client(config))
}

fn to_esp_ap_config(src: &ApConfig) -> anyhow::Result<Configuration> {
    src.validate()?;

    let config = AccessPointConfiguration {
        ssid: src.ssid.as_str().into(),
        password: src.pass.as_str().into(),
        channel: src.channel,
        ssid_hidden: src.hidden,
        max_connections: src.max_connections,
        auth_method: auth_method(&src.pass),
        ..Default::default()
    };

    Ok(Configuration::AccessPoint(config))
}

impl EspWifi {
    pub fn new(modem: Modem) -> anyhow::Result<EspWifi> {
        let sys_loop = EspSystemEventLoop::take()?;
        let nvs = EspDefaultNvsPartition::take()?;
        let esp_wifi = esp_idf_svc::wifi::EspWifi::new(modem, sys_loop.clone(), Some(nvs))?;
        Ok(Self {
            esp_wifi: RefCell::new(esp_wifi),
            sys_loop,
        })
    }

    fn start(&self, config: &Configuration) -> anyhow::Result<()> {
        let mut esp_wifi = self.esp_wifi.try_borrow_mut()?;

        esp_wifi.set_configuration(config)?;
        esp_wifi.start()?;

        let started = {
            let matcher = || esp_wifi.is_started().unwrap_or(false);
            WifiWait::new(&self.sys_loop)?.wait_with_timeout(START_TIMEOUT, matcher)
        };

        if !started {
            bail!("Wi-Fi did not start within {}s", START_TIMEOUT.as_secs())
        }

        if matches!(config, Configuration::Client(_)) {
            esp_wifi.connect()?;
        }

        Ok(())
    }
}

impl Wifi for EspWifi {
    fn setup_sta(&self, config: &StaConfig) -> anyhow::Result<()> {
        log::info!("Joining Wi-Fi network {:?}", config.ssid);
        let config = to_esp_client_config(config)?;
        self.start(&config)
    }

    fn setup_ap(&self, config: &ApConfig) -> anyhow::Result<()> {
        log::info!(
            "Starting Wi-Fi access point {:?} on channel {}",
            config.ssid,
            config.channel
        );
        let config = to_esp_ap_config(config)?;
        self.start(&config)
    }

    fn is_connected(&self) -> bool {
        if let Ok(esp_wifi) = self.esp_wifi.try_borrow() {
            esp_wifi.is_up().unwrap_or(false)
        } else {
            false
        }
    }
}
