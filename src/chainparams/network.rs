use crate::error::{ChainParamsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The networks a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "test")]
    Testnet,
    #[serde(rename = "regtest")]
    Regtest,
    #[serde(rename = "unittest")]
    UnitTest,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Testnet,
        Network::Regtest,
        Network::UnitTest,
    ];

    /// Identifier used on the command line, in data directory names and RPC
    pub fn id(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Network::Main => 0,
            Network::Testnet => 1,
            Network::Regtest => 2,
            Network::UnitTest => 3,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self> {
        Network::ALL
            .into_iter()
            .find(|network| network.id() == s)
            .ok_or_else(|| ChainParamsError::UnknownNetwork(s.to_string()))
    }
}
