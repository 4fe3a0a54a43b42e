//! Recording test doubles for the hardware traits

use std::cell::RefCell;

use anyhow::anyhow;

use crate::hal::net_cfg::{NetConfig, NetConfigKind};
use crate::hal::wifi::{ApConfig, StaConfig, Wifi};
use crate::hal::Platform;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SetupCall {
    Station(StaConfig),
    AccessPoint(ApConfig),
}

/// Wi-Fi double that records every setup call and answers with a fixed outcome.
pub struct MockWifi {
    succeed: bool,
    calls: RefCell<Vec<SetupCall>>,
}

impl MockWifi {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            succeed: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SetupCall> {
        self.calls.borrow().clone()
    }

    fn outcome(&self) -> anyhow::Result<()> {
        if self.succeed {
            Ok(())
        } else {
            Err(anyhow!("radio did not start"))
        }
    }
}

impl Wifi for MockWifi {
    fn setup_sta(&self, config: &StaConfig) -> anyhow::Result<()> {
        self.calls
            .borrow_mut()
            .push(SetupCall::Station(config.clone()));
        self.outcome()
    }

    fn setup_ap(&self, config: &ApConfig) -> anyhow::Result<()> {
        self.calls
            .borrow_mut()
            .push(SetupCall::AccessPoint(config.clone()));
        self.outcome()
    }

    fn is_connected(&self) -> bool {
        self.succeed && !self.calls.borrow().is_empty()
    }
}

/// Network configuration double backed by a fixed MAC.
pub struct MockNetConfig {
    mac: Option<[u8; 6]>,
    reported_len: Option<usize>,
    queries: RefCell<Vec<NetConfigKind>>,
}

impl MockNetConfig {
    pub fn with_mac(mac: [u8; 6]) -> Self {
        Self {
            mac: Some(mac),
            reported_len: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            mac: None,
            reported_len: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Writes the MAC as usual but reports `len` bytes to the caller.
    pub fn reporting_len(mut self, len: usize) -> Self {
        self.reported_len = Some(len);
        self
    }

    pub fn queries(&self) -> Vec<NetConfigKind> {
        self.queries.borrow().clone()
    }
}

impl NetConfig for MockNetConfig {
    fn get(&self, kind: NetConfigKind, buf: &mut [u8]) -> anyhow::Result<usize> {
        self.queries.borrow_mut().push(kind);

        let mac = self.mac.ok_or_else(|| anyhow!("driver query failed"))?;
        let n = mac.len().min(buf.len());
        buf[..n].copy_from_slice(&mac[..n]);

        Ok(self.reported_len.unwrap_or(n))
    }
}

pub struct MockPlatform {
    pub net_config: MockNetConfig,
    pub wifi: MockWifi,
}

impl Platform for MockPlatform {
    fn net_config(&self) -> &(dyn NetConfig + '_) {
        &self.net_config
    }

    fn wifi(&self) -> &(dyn Wifi + '_) {
        &self.wifi
    }
}
