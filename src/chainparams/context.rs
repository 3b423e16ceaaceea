use crate::chainparams::checkpoints::CheckpointData;
use crate::chainparams::modifiable::ModifiableParams;
use crate::chainparams::registry::NetworkRegistry;
use crate::chainparams::{ChainParams, Network};
use crate::config::NetworkArgs;
use crate::error::{ChainParamsError, Result};
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::sync::{Arc, RwLock};

/// The registry plus the one network the process is running on
#[derive(Debug)]
pub struct ChainContext {
    registry: NetworkRegistry,
    active: RwLock<Option<Network>>,
}

impl ChainContext {
    pub fn new(registry: NetworkRegistry) -> Self {
        ChainContext {
            registry,
            active: RwLock::new(None),
        }
    }

    /// Read access to every network's parameters.
    ///
    /// Mutation is not reachable from here:
    ///
    /// ```compile_fail
    /// use bitwin_chainparams::{ChainContext, Network};
    ///
    /// fn bypass(context: &ChainContext) {
    ///     let _ = context.registry().modifiable(Network::UnitTest);
    /// }
    /// ```
    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn params(&self, network: Network) -> Arc<ChainParams> {
        self.registry.get(network)
    }

    pub fn checkpoints(&self, network: Network) -> Arc<CheckpointData> {
        self.registry.get(network).checkpoints()
    }

    pub fn select_network(&self, network: Network) {
        let mut active = self
            .active
            .write()
            .expect("Failed to acquire write lock on active network - this should never happen");
        *active = Some(network);
        info!("Selected network: {network}");
    }

    /// Select the network named on the command line. Returns false, leaving
    /// the selection untouched, when the flags do not name a single network.
    pub fn select_network_from_command_line(&self, args: &NetworkArgs) -> bool {
        match args.network_id() {
            Some(network) => {
                self.select_network(network);
                true
            }
            None => {
                warn!("Invalid combination of -regtest and -testnet");
                false
            }
        }
    }

    pub fn active_network(&self) -> Option<Network> {
        *self
            .active
            .read()
            .expect("Failed to acquire read lock on active network - this should never happen")
    }

    /// # Panics
    ///
    /// Panics when no network has been selected yet.
    pub fn active_params(&self) -> Arc<ChainParams> {
        match self.active_network() {
            Some(network) => self.params(network),
            None => panic!("chain parameters requested before a network was selected"),
        }
    }

    /// # Panics
    ///
    /// Panics unless the unit test network is the active one.
    pub fn modifiable_params(&self) -> ModifiableParams<'_> {
        match self.active_network() {
            Some(Network::UnitTest) => self
                .registry
                .modifiable(Network::UnitTest)
                .expect("unit test network is always stored as modifiable"),
            other => panic!(
                "modifiable parameters are only available on unittest, active network is {}",
                other.map_or("none", |network| network.id())
            ),
        }
    }
}

static CHAIN_CONTEXT: OnceCell<ChainContext> = OnceCell::new();

/// Install the process-wide context. Must happen once, before any lookup.
pub fn install(context: ChainContext) -> Result<&'static ChainContext> {
    CHAIN_CONTEXT
        .set(context)
        .map_err(|_| ChainParamsError::ContextAlreadyInstalled)?;
    Ok(chain_context())
}

/// # Panics
///
/// Panics when [`install`] has not been called.
pub fn chain_context() -> &'static ChainContext {
    CHAIN_CONTEXT
        .get()
        .expect("chain context used before install()")
}

/// Parameters of the active network
pub fn params() -> Arc<ChainParams> {
    chain_context().active_params()
}

pub fn params_for(network: Network) -> Arc<ChainParams> {
    chain_context().params(network)
}

pub fn checkpoints(network: Network) -> Arc<CheckpointData> {
    chain_context().checkpoints(network)
}

pub fn select_params(network: Network) {
    chain_context().select_network(network)
}

pub fn select_params_from_command_line(args: &NetworkArgs) -> bool {
    chain_context().select_network_from_command_line(args)
}

pub fn modifiable_params() -> ModifiableParams<'static> {
    chain_context().modifiable_params()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_test_context;

    #[test]
    fn test_nothing_selected_initially() {
        let context = create_test_context();
        assert_eq!(context.active_network(), None);
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_params_without_selection_panics() {
        let context = create_test_context();
        let _ = context.active_params();
    }

    #[test]
    fn test_select_network_switches_active_params() {
        let context = create_test_context();
        context.select_network(Network::Regtest);
        assert_eq!(context.active_params().network(), Network::Regtest);
        context.select_network(Network::Main);
        assert_eq!(context.active_params().default_port(), 24072);
        assert_eq!(context.active_params().network_id(), "main");
    }

    #[test]
    fn test_command_line_selection() {
        let context = create_test_context();
        let args = NetworkArgs {
            testnet: true,
            regtest: false,
        };
        assert!(context.select_network_from_command_line(&args));
        assert_eq!(context.active_network(), Some(Network::Testnet));
    }

    #[test]
    fn test_contradictory_flags_keep_previous_selection() {
        let context = create_test_context();
        context.select_network(Network::Regtest);
        let args = NetworkArgs {
            testnet: true,
            regtest: true,
        };
        assert!(!context.select_network_from_command_line(&args));
        assert_eq!(context.active_network(), Some(Network::Regtest));
    }

    #[test]
    #[should_panic(expected = "only available on unittest")]
    fn test_modifiable_params_panic_on_main() {
        let context = create_test_context();
        context.select_network(Network::Main);
        let _ = context.modifiable_params();
    }

    #[test]
    #[should_panic(expected = "only available on unittest")]
    fn test_modifiable_params_panic_on_testnet() {
        let context = create_test_context();
        context.select_network(Network::Testnet);
        let _ = context.modifiable_params();
    }

    #[test]
    #[should_panic(expected = "only available on unittest")]
    fn test_modifiable_params_panic_on_regtest() {
        let context = create_test_context();
        context.select_network(Network::Regtest);
        let _ = context.modifiable_params();
    }

    #[test]
    #[should_panic(expected = "active network is none")]
    fn test_modifiable_params_panic_without_selection() {
        let context = create_test_context();
        let _ = context.modifiable_params();
    }

    #[test]
    fn test_modifiable_params_on_unittest() {
        let context = create_test_context();
        context.select_network(Network::UnitTest);

        let handle = context.modifiable_params();
        handle.set_enforce_block_upgrade_majority(51);
        handle.set_reject_block_outdated_majority(75);
        handle.set_to_check_block_upgrade_majority(100);
        handle.set_default_consistency_checks(false);
        handle.set_allow_min_difficulty_blocks(true);

        let active = context.active_params();
        assert_eq!(active.consensus().enforce_block_upgrade_majority, 51);
        assert_eq!(active.consensus().reject_block_outdated_majority, 75);
        assert_eq!(active.consensus().to_check_block_upgrade_majority, 100);
        assert!(!active.default_consistency_checks());
        assert!(active.allow_min_difficulty_blocks());
    }

    #[test]
    fn test_checkpoint_lookup_per_network() {
        let context = create_test_context();
        for network in Network::ALL {
            let checkpoints = context.checkpoints(network);
            assert_eq!(
                checkpoints.get(0),
                Some(&context.params(network).hash_genesis_block())
            );
        }
    }
}
