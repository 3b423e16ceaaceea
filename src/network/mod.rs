//! Peer bootstrap data
//!
//! DNS seed records and the compiled fixed-seed tables, plus the conversion
//! that turns those tables into dated peer addresses. Nothing here touches
//! the network.

pub mod seeds;

pub use seeds::{
    convert_seed6, DnsSeed, PeerAddress, SeedSpec6, NODE_NETWORK, ONE_WEEK, SEED6_MAIN,
    SEED6_TEST,
};
