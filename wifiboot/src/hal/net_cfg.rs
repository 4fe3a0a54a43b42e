use std::fmt;

pub trait NetConfig {
    /// Copies the requested device property into `buf` and returns how many bytes were written.
    fn get(&self, kind: NetConfigKind, buf: &mut [u8]) -> anyhow::Result<usize>;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NetConfigKind {
    StationMac,
    AccessPointMac,
}

impl NetConfigKind {
    pub const fn size(&self) -> usize {
        match self {
            NetConfigKind::StationMac | NetConfigKind::AccessPointMac => MacAddress::LEN,
        }
    }
}

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const LEN: usize = 6;

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Upper-case hex digits without separators, e.g. `A1B2C3D4E5F6`.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02X}")).collect()
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}
