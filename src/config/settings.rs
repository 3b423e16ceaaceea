use crate::chainparams::Network;
use clap::Args;

/// Network selection flags shared by every binary
#[derive(Debug, Clone, Default, Args)]
pub struct NetworkArgs {
    #[arg(long, help = "Use the public test network")]
    pub testnet: bool,
    #[arg(long, help = "Use the local regression test network")]
    pub regtest: bool,
}

impl NetworkArgs {
    /// Network named by the flags; `None` when they contradict each other
    pub fn network_id(&self) -> Option<Network> {
        network_from_flags(self.testnet, self.regtest)
    }
}

pub fn network_from_flags(testnet: bool, regtest: bool) -> Option<Network> {
    match (testnet, regtest) {
        (true, true) => None,
        (false, true) => Some(Network::Regtest),
        (true, false) => Some(Network::Testnet),
        (false, false) => Some(Network::Main),
    }
}
