use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// One week in seconds
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Service bit advertised by full nodes
pub const NODE_NETWORK: u64 = 1;

/// DNS seed entry: a display name and the hostname to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        DnsSeed {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Compiled seed record. IPv4 peers are stored IPv4-mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        SeedSpec6 {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Fixed seeds compiled into mainnet builds
pub const SEED6_MAIN: &[SeedSpec6] = &[SeedSpec6::ipv4(134, 209, 244, 29, 24072)];

/// Testnet ships no fixed seeds
pub const SEED6_TEST: &[SeedSpec6] = &[];

/// Bootstrap peer address with the "last seen" time the address manager ranks by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    pub address: SocketAddr,
    pub services: u64,
    pub last_seen: i64,
}

/// Expand compiled seed records into peer addresses.
///
/// Each entry is dated between one and two weeks before `now`, so fixed seeds
/// look old and lose out to any peers learned over the network.
pub fn convert_seed6<R: Rng>(
    specs: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) -> Vec<PeerAddress> {
    let peers: Vec<PeerAddress> = specs
        .iter()
        .map(|spec| PeerAddress {
            address: spec.socket_addr(),
            services: NODE_NETWORK,
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect();

    debug!("Converted {} fixed seeds", peers.len());
    peers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::net::Ipv4Addr;

    #[test]
    fn test_ipv4_mapped_seed_becomes_v4_socket() {
        let spec = SeedSpec6::ipv4(134, 209, 244, 29, 24072);
        assert_eq!(
            spec.socket_addr(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(134, 209, 244, 29)), 24072)
        );
    }

    #[test]
    fn test_native_ipv6_seed_is_kept() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let spec = SeedSpec6 { addr, port: 1 };
        assert!(spec.socket_addr().is_ipv6());
    }

    #[test]
    fn test_convert_keeps_count_and_time_window() {
        let specs: Vec<SeedSpec6> = (0..50u8)
            .map(|i| SeedSpec6::ipv4(10, 0, 0, i, 24072))
            .collect();
        let now = 1_700_000_000;
        let mut rng = StdRng::seed_from_u64(7);

        let peers = convert_seed6(&specs, now, &mut rng);

        assert_eq!(peers.len(), specs.len());
        for (peer, spec) in peers.iter().zip(&specs) {
            assert_eq!(peer.address, spec.socket_addr());
            assert_eq!(peer.services, NODE_NETWORK);
            assert!(peer.last_seen >= now - 2 * ONE_WEEK);
            assert!(peer.last_seen <= now - ONE_WEEK);
        }
    }

    #[test]
    fn test_convert_empty_table() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(convert_seed6(SEED6_TEST, 0, &mut rng).is_empty());
    }
}
