use std::time::{Duration, Instant};

use esp_idf_sys as _;
use wifiboot::app::{device_mac_address, init_platform, InitResult};
use wifiboot::config::SysConfig;
use wifiboot::hal::Platform;

use wifiboot_esp_idf::platform::PlatformImpl;

const TASK_WAKEUP_PERIOD: Duration = Duration::from_millis(500);

fn main() -> anyhow::Result<()> {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let mut config = SysConfig::from_env_var().unwrap_or_else(|e| {
        log::info!("{e}, using default config");
        SysConfig::default()
    });

    log::info!("Create platform");
    let platform = PlatformImpl::new()?;

    match device_mac_address(platform.net_config()) {
        Ok(mac) => {
            log::info!("MAC address {mac}");
            config.expand_mac_placeholders(&mac);
        }
        Err(e) => log::warn!("Cannot read MAC address: {e}"),
    }

    log::info!("config: {}", serde_json::to_string(&config)?);

    let result = init_platform(&config, platform.wifi());
    let code = InitResult::from(&result);

    if let Err(e) = result {
        log::error!("Platform init failed ({})", code.code());
        return Err(e.into());
    }

    log::info!("Platform init done");

    let mut was_connected = false;

    loop {
        let next_wakeup = Instant::now() + TASK_WAKEUP_PERIOD;

        let is_connected = platform.wifi().is_connected();
        if is_connected != was_connected {
            log::info!("Wi-Fi {}", if is_connected { "up" } else { "down" });
            was_connected = is_connected;
        }

        if let Some(delay) = next_wakeup.checked_duration_since(Instant::now()) {
            std::thread::sleep(delay);
        }
    }
}
