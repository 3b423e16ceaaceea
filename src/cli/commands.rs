use crate::config::NetworkArgs;
use crate::core::{DoubleSha256, HeaderHasher, Quark};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "bitwin-chainparams", about = "Inspect compiled-in chain parameters")]
pub struct Opt {
    #[command(flatten)]
    pub network: NetworkArgs,
    #[arg(
        long = "hasher",
        value_enum,
        default_value_t = HasherChoice::Quark,
        help = "Header hash used to rebuild the genesis block"
    )]
    pub hasher: HasherChoice,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HasherChoice {
    Quark,
    Sha256d,
}

impl HasherChoice {
    pub fn hasher(self) -> Box<dyn HeaderHasher> {
        match self {
            HasherChoice::Quark => Box::new(Quark),
            HasherChoice::Sha256d => Box::new(DoubleSha256),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "genesis",
        about = "Rebuild the genesis block and compare it with the pinned identity"
    )]
    Genesis,
    #[command(name = "params", about = "Print the network's compiled-in constants")]
    Params,
    #[command(name = "checkpoints", about = "List the checkpoint table")]
    Checkpoints,
    #[command(name = "seeds", about = "Print DNS seeds and dated fixed seeds")]
    Seeds,
    #[command(name = "zerocoin", about = "Derive the zerocoin group parameters")]
    Zerocoin {
        #[arg(long = "v1", help = "Read the modulus as hexadecimal")]
        v1: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::Network;

    #[test]
    fn test_network_flags_precede_subcommand() {
        let opt = Opt::try_parse_from(["bitwin-chainparams", "--regtest", "genesis"]).unwrap();
        assert_eq!(opt.network.network_id(), Some(Network::Regtest));
        assert!(matches!(opt.command, Command::Genesis));
    }

    #[test]
    fn test_zerocoin_encoding_flag() {
        let opt = Opt::try_parse_from(["bitwin-chainparams", "zerocoin", "--v1"]).unwrap();
        assert!(matches!(opt.command, Command::Zerocoin { v1: true }));
        assert_eq!(opt.network.network_id(), Some(Network::Main));
    }

    #[test]
    fn test_hasher_defaults_to_quark() {
        let opt = Opt::try_parse_from(["bitwin-chainparams", "genesis"]).unwrap();
        assert_eq!(opt.hasher, HasherChoice::Quark);
        assert_eq!(opt.hasher.hasher().name(), "quark");

        let opt =
            Opt::try_parse_from(["bitwin-chainparams", "--hasher", "sha256d", "genesis"]).unwrap();
        assert_eq!(opt.hasher.hasher().name(), "sha256d");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Opt::try_parse_from(["bitwin-chainparams"]).is_err());
    }
}
