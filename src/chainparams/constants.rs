// Compiled-in constants for every network.
//
// Mainnet is written out in full by `baseline`. The other networks are
// produced by override functions that start from their parent and replace
// only the fields they name, so anything a derived network does not mention
// is inherited unchanged.

use crate::chainparams::checkpoints::{CheckpointHash, CheckpointSpec};
use crate::chainparams::Network;
use crate::core::monetary::conversions::coins;
use crate::core::{Amount, GenesisCheck, GenesisDescriptor, Hash256, CENT, COIN};
use crate::network::{DnsSeed, SeedSpec6, SEED6_MAIN, SEED6_TEST};
use crate::zerocoin::ZEROCOIN_MODULUS;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Height or time used to switch a privacy-coin activation off
pub const ACTIVATION_DISABLED: i64 = i32::MAX as i64;

const MAIN_GENESIS_MESSAGE: &str =
    "Bitcoin is 10 years old today — here's a look back at its crazy history";
const MAIN_GENESIS_PUBKEY: &str = "045777AA773E88BBBF2B31FB859D4E3C73B527B6F1FB12FFFDD6B331AB585C1CBD0CCBAF0E40B947235A49B04A806AE3C38FBC23BAB96CCF3252A312BE0BB0E61C";
const MAIN_GENESIS_HASH: &str = "000000772114d8a6c2b9a36be07cc74b05a67db48bdacb1cac16aa96b3f29308";
const MAIN_GENESIS_MERKLE_ROOT: &str =
    "59b032829f89c69e4e3f4f378b46aed9f6898d4c4ea1a4786e05e640c2a53b9c";
const MAIN_GENESIS_TIME: u32 = 1_572_494_400;

const TESTNET_GENESIS_TIME: u32 = 1_540_944_001;
const TESTNET_SPORK_KEY: &str = "045b8dc72b3429ef0ab12d80c26bb1025d2eee81abe3f284face90df0cdd341b1ab0b28d3741d6fb876c33b4355b9d4b15e1747c805b2416d0016c9546e9094f03";

/// Proof-of-work ceiling `(2^256 - 1) >> shift` in internal byte order
pub fn pow_limit_from_shift(shift: u32) -> Hash256 {
    let max = (BigUint::from(1u32) << 256u32) - BigUint::from(1u32);
    let limit = max >> shift;
    let mut bytes = [0u8; 32];
    let le = limit.to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);
    Hash256::from_bytes(bytes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub pow_limit: Hash256,
    pub subsidy_halving_interval: u32,
    pub max_reorganization_depth: u32,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub miner_threads: u32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub coinbase_maturity: u32,
    pub last_pow_block: u32,
    pub modifier_update_block: u32,
    pub block_reward: Amount,
    /// Reduced reward tier
    pub block_reward_secondary: Amount,
    pub max_supply: Amount,
    pub max_money_out: Amount,
    pub blocks_per_year: u32,
    /// Coins filtered through exchanges that still count as valid
    pub invalid_amount_filtered: Amount,
    /// Confirmations required on a budget finalization fee
    pub budget_fee_confirmations: u32,
}

impl ConsensusParams {
    pub fn pow_limit_target(&self) -> BigUint {
        BigUint::from_bytes_le(self.pow_limit.as_bytes())
    }
}

/// One-time token swap paid out through the first proof-of-work coinbases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapParams {
    pub amount: Amount,
    pub pow_blocks: u32,
    pub coinbase_value: Amount,
}

impl SwapParams {
    /// The per-block value always follows from amount and block count
    pub fn new(amount: Amount, pow_blocks: u32) -> Self {
        SwapParams {
            amount,
            pow_blocks,
            coinbase_value: amount / Amount::from(pow_blocks.max(1)),
        }
    }
}

/// Activation points of the privacy-coin subsystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZerocoinActivation {
    pub start_height: i64,
    pub start_time: i64,
    pub block_v2: i64,
    pub block_recalculate_accumulators: i64,
    pub block_enforce_serial_range: i64,
    pub block_first_fraudulent: i64,
    pub block_last_good_checkpoint: i64,
    pub block_enforce_invalid_utxo: i64,
}

impl ZerocoinActivation {
    pub fn disabled() -> Self {
        ZerocoinActivation {
            start_height: ACTIVATION_DISABLED,
            start_time: ACTIVATION_DISABLED,
            block_v2: ACTIVATION_DISABLED,
            block_recalculate_accumulators: ACTIVATION_DISABLED,
            block_enforce_serial_range: ACTIVATION_DISABLED,
            block_first_fraudulent: ACTIVATION_DISABLED,
            block_last_good_checkpoint: ACTIVATION_DISABLED,
            block_enforce_invalid_utxo: ACTIVATION_DISABLED,
        }
    }

    fn values(&self) -> [i64; 8] {
        [
            self.start_height,
            self.start_time,
            self.block_v2,
            self.block_recalculate_accumulators,
            self.block_enforce_serial_range,
            self.block_first_fraudulent,
            self.block_last_good_checkpoint,
            self.block_enforce_invalid_utxo,
        ]
    }

    pub fn is_disabled(&self) -> bool {
        self.values().iter().all(|v| *v == ACTIVATION_DISABLED)
    }

    /// Either every activation is switched off or none is
    pub fn is_consistent(&self) -> bool {
        let disabled = self
            .values()
            .iter()
            .filter(|v| **v == ACTIVATION_DISABLED)
            .count();
        disabled == 0 || disabled == self.values().len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZerocoinPolicy {
    /// Accumulator modulus as a digit string
    pub modulus: String,
    pub max_spends_per_transaction: u32,
    pub min_mint_fee: Amount,
    pub mint_required_confirmations: u32,
    pub required_accumulation: u32,
    pub default_security_level: u32,
    pub header_version: i32,
    pub required_stake_depth: u32,
}

/// Keys that sign network feature toggles, and when the rotation happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SporkParams {
    pub key: String,
    pub key_old: String,
    /// Messages signed after this time must use `key`
    pub enforce_new_key_time: i64,
    /// `key_old` is rejected outright after this time
    pub reject_old_key_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasternodeParams {
    pub count_drift: u32,
    pub tolerance: u32,
    pub start_payments: i64,
    pub pool_max_transactions: u32,
    pub obfuscation_pool_dummy_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    /// BIP44 coin type
    pub ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
    pub zerocoin_enabled: bool,
}

/// Which compiled fixed-seed table a network bootstraps from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedSeeds {
    Main,
    Test,
    None,
}

impl FixedSeeds {
    pub fn table(self) -> &'static [SeedSpec6] {
        match self {
            FixedSeeds::Main => SEED6_MAIN,
            FixedSeeds::Test => SEED6_TEST,
            FixedSeeds::None => &[],
        }
    }
}

/// Everything that distinguishes one network, before anything is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConstants {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pubkey: String,
    pub default_port: u16,
    pub consensus: ConsensusParams,
    pub swap: SwapParams,
    pub zerocoin_activation: ZerocoinActivation,
    pub zerocoin: ZerocoinPolicy,
    pub spork: SporkParams,
    pub masternode: MasternodeParams,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: FixedSeeds,
    pub policy: PolicyFlags,
    pub genesis: GenesisDescriptor,
    pub checkpoints: CheckpointSpec,
}

/// Mainnet, the network every other one derives from
pub fn baseline() -> ChainConstants {
    let coinbase_maturity = 100;
    let swap = SwapParams::new(coins(6_998_995), 10);

    ChainConstants {
        network: Network::Main,
        // Rarely used upper ASCII, not valid as UTF-8
        message_start: [0x1b, 0xee, 0x2c, 0x6e],
        alert_pubkey: "0457cbd0e4325dbcdf526f4b27d459383b7ddca9bb4bdfa61ada823a3f8522b6f9c7afbc4375f51ed22989de3eced8612dd99f110936fe313938d22b5f838c775a".to_string(),
        default_port: 24072,
        consensus: ConsensusParams {
            pow_limit: pow_limit_from_shift(6),
            subsidy_halving_interval: 210_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            coinbase_maturity,
            // Staking starts once the swap coinbases have matured twice over
            last_pow_block: coinbase_maturity * 2 + swap.pow_blocks + 1,
            modifier_update_block: 1,
            block_reward: 5 * COIN,
            block_reward_secondary: COIN / 2,
            max_supply: coins(21_000_000),
            max_money_out: swap.amount,
            blocks_per_year: 365 * 24 * 60,
            invalid_amount_filtered: 0,
            budget_fee_confirmations: 6,
        },
        swap,
        zerocoin_activation: ZerocoinActivation::disabled(),
        zerocoin: ZerocoinPolicy {
            modulus: ZEROCOIN_MODULUS.to_string(),
            max_spends_per_transaction: 7,
            min_mint_fee: CENT,
            mint_required_confirmations: 20,
            required_accumulation: 1,
            default_security_level: 100,
            header_version: 4,
            required_stake_depth: 200,
        },
        spork: SporkParams {
            key: "04955AD7A25E39ED4A9DDC0977972909E6221092EB706F380687CDDF4A520DCE4E87E2576E2353615075FF0CFFBD0777A04AA51834FF64D58622ACB37CB7FAD425".to_string(),
            key_old: "043306b8b174192b112b453536cc899e862351b8b408640de8a150876447c9a62eb7f4125ae9ecd965f45ecf2e5bb259e32fcf7cec84cedbb3fb67ecdab15a2081".to_string(),
            enforce_new_key_time: 1_525_158_000,
            reject_old_key_time: 1_527_811_200,
        },
        masternode: MasternodeParams {
            count_drift: 20,
            tolerance: 2,
            start_payments: i64::from(MAIN_GENESIS_TIME),
            pool_max_transactions: 3,
            obfuscation_pool_dummy_address: "GSkW1Z9n94rdjfHd1VWVXfDgcDkMXhYNWr".to_string(),
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![38],
            script_address: vec![15],
            secret_key: vec![142],
            ext_public_key: vec![0x02, 0x2d, 0x25, 0x33],
            ext_secret_key: vec![0x02, 0x21, 0x31, 0x2b],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x77],
        },
        dns_seeds: vec![DnsSeed::new("134.209.244.29", "134.209.244.29")],
        fixed_seeds: FixedSeeds::Main,
        policy: PolicyFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
            zerocoin_enabled: false,
        },
        genesis: GenesisDescriptor {
            message: MAIN_GENESIS_MESSAGE.to_string(),
            output_value: 0,
            output_pubkey: MAIN_GENESIS_PUBKEY.to_string(),
            version: 1,
            time: MAIN_GENESIS_TIME,
            bits: 0x1e0ffff0,
            nonce: 92_133_373,
            check: Some(GenesisCheck {
                hash: MAIN_GENESIS_HASH.to_string(),
                merkle_root: MAIN_GENESIS_MERKLE_ROOT.to_string(),
            }),
        },
        checkpoints: CheckpointSpec {
            entries: vec![(0, CheckpointHash::Literal(MAIN_GENESIS_HASH.to_string()))],
            last_checkpoint_time: 1_540_617_434,
            transactions_last_checkpoint: 1,
            transactions_per_day: 1000.0,
        },
    }
}

/// Public test network. Max money out and the last PoW block are not
/// recomputed from the new swap amount; they stay at mainnet's values.
pub fn derive_testnet(main: &ChainConstants) -> ChainConstants {
    ChainConstants {
        network: Network::Testnet,
        message_start: [0x26, 0xb7, 0xdc, 0xf9],
        alert_pubkey: "042abb9fbdbdad29ed411ffc04c465f3f3a0e0f0ae183b4777886f771bdc143481eb0ad3c5fb67ecbcd0568f5f602039fde73015975d998f242d7fe5c3d2a059ce".to_string(),
        default_port: 17174,
        consensus: ConsensusParams {
            block_reward: 5 * COIN,
            max_supply: coins(400_000_000),
            budget_fee_confirmations: 3,
            ..main.consensus.clone()
        },
        swap: SwapParams::new(coins(6_999_005), 10),
        spork: SporkParams {
            key: TESTNET_SPORK_KEY.to_string(),
            key_old: TESTNET_SPORK_KEY.to_string(),
            ..main.spork.clone()
        },
        masternode: MasternodeParams {
            start_payments: i64::from(TESTNET_GENESIS_TIME),
            pool_max_transactions: 2,
            obfuscation_pool_dummy_address: "TSegSsewERsEduCNCNnenuNDU2tYNrAj8Y".to_string(),
            ..main.masternode.clone()
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![65],
            script_address: vec![10],
            secret_key: vec![135],
            ext_public_key: vec![0x3a, 0x80, 0x61, 0xa0],
            ext_secret_key: vec![0x3a, 0x80, 0x58, 0x37],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        },
        dns_seeds: Vec::new(),
        fixed_seeds: FixedSeeds::Test,
        policy: PolicyFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            ..main.policy
        },
        genesis: GenesisDescriptor {
            time: TESTNET_GENESIS_TIME,
            nonce: 2_376_021,
            check: None,
            ..main.genesis.clone()
        },
        checkpoints: CheckpointSpec {
            entries: vec![(0, CheckpointHash::Genesis)],
            last_checkpoint_time: 1_740_710,
            transactions_last_checkpoint: 0,
            transactions_per_day: 250.0,
        },
        ..main.clone()
    }
}

/// Local regression testing: instant blocks, permissive policy, no peers
pub fn derive_regtest(testnet: &ChainConstants) -> ChainConstants {
    ChainConstants {
        network: Network::Regtest,
        message_start: [0xa1, 0xb7, 0xdc, 0xac],
        default_port: 24072,
        consensus: ConsensusParams {
            subsidy_halving_interval: 150,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 1,
            target_timespan: 24 * 60 * 60,
            target_spacing: 60,
            pow_limit: pow_limit_from_shift(1),
            block_reward: 5 * COIN,
            max_supply: coins(400_000_000),
            ..testnet.consensus.clone()
        },
        dns_seeds: Vec::new(),
        fixed_seeds: FixedSeeds::None,
        policy: PolicyFlags {
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..testnet.policy
        },
        genesis: GenesisDescriptor {
            time: 1_540_944_002,
            nonce: 2,
            check: None,
            ..testnet.genesis.clone()
        },
        checkpoints: CheckpointSpec {
            entries: vec![(0, CheckpointHash::Genesis)],
            last_checkpoint_time: 1_540_617_434,
            transactions_last_checkpoint: 0,
            transactions_per_day: 100.0,
        },
        ..testnet.clone()
    }
}

/// Unit test network: mainnet rules, no peers, mutable at runtime
pub fn derive_unittest(main: &ChainConstants) -> ChainConstants {
    ChainConstants {
        network: Network::UnitTest,
        default_port: 51478,
        dns_seeds: Vec::new(),
        fixed_seeds: FixedSeeds::None,
        policy: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..main.policy
        },
        ..main.clone()
    }
}

/// Constants for `network`, walking the override chain from the baseline
pub fn constants_for(network: Network) -> ChainConstants {
    let main = baseline();
    match network {
        Network::Main => main,
        Network::Testnet => derive_testnet(&main),
        Network::Regtest => derive_regtest(&derive_testnet(&main)),
        Network::UnitTest => derive_unittest(&main),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeSet;

    /// Dotted paths of every leaf that differs between two constant sets.
    /// Arrays compare as a whole.
    fn changed_fields(parent: &ChainConstants, child: &ChainConstants) -> BTreeSet<String> {
        fn walk(prefix: &str, a: &Value, b: &Value, out: &mut BTreeSet<String>) {
            match (a, b) {
                (Value::Object(left), Value::Object(right)) => {
                    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
                    for key in keys {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(
                            &path,
                            left.get(key).unwrap_or(&Value::Null),
                            right.get(key).unwrap_or(&Value::Null),
                            out,
                        );
                    }
                }
                _ if a != b => {
                    out.insert(prefix.to_string());
                }
                _ => {}
            }
        }

        let mut out = BTreeSet::new();
        walk(
            "",
            &serde_json::to_value(parent).unwrap(),
            &serde_json::to_value(child).unwrap(),
            &mut out,
        );
        out
    }

    fn set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_testnet_overrides_exactly_its_fields() {
        let main = baseline();
        let diff = changed_fields(&main, &derive_testnet(&main));
        assert_eq!(
            diff,
            set(&[
                "alert_pubkey",
                "base58_prefixes.ext_coin_type",
                "base58_prefixes.ext_public_key",
                "base58_prefixes.ext_secret_key",
                "base58_prefixes.pubkey_address",
                "base58_prefixes.script_address",
                "base58_prefixes.secret_key",
                "checkpoints.entries",
                "checkpoints.last_checkpoint_time",
                "checkpoints.transactions_last_checkpoint",
                "checkpoints.transactions_per_day",
                "consensus.budget_fee_confirmations",
                "consensus.max_supply",
                "default_port",
                "dns_seeds",
                "fixed_seeds",
                "genesis.check",
                "genesis.nonce",
                "genesis.time",
                "masternode.obfuscation_pool_dummy_address",
                "masternode.pool_max_transactions",
                "masternode.start_payments",
                "message_start",
                "network",
                "policy.allow_min_difficulty_blocks",
                "policy.testnet_to_be_deprecated_field_rpc",
                "spork.key",
                "spork.key_old",
                "swap.amount",
                "swap.coinbase_value",
            ])
        );
    }

    #[test]
    fn test_regtest_overrides_exactly_its_fields() {
        let testnet = derive_testnet(&baseline());
        let diff = changed_fields(&testnet, &derive_regtest(&testnet));
        assert_eq!(
            diff,
            set(&[
                "checkpoints.last_checkpoint_time",
                "checkpoints.transactions_per_day",
                "consensus.miner_threads",
                "consensus.pow_limit",
                "consensus.subsidy_halving_interval",
                "consensus.target_timespan",
                "default_port",
                "fixed_seeds",
                "genesis.nonce",
                "genesis.time",
                "message_start",
                "network",
                "policy.default_consistency_checks",
                "policy.mine_blocks_on_demand",
                "policy.mining_requires_peers",
                "policy.require_standard",
                "policy.testnet_to_be_deprecated_field_rpc",
            ])
        );
    }

    #[test]
    fn test_unittest_overrides_exactly_its_fields() {
        let main = baseline();
        let diff = changed_fields(&main, &derive_unittest(&main));
        assert_eq!(
            diff,
            set(&[
                "default_port",
                "dns_seeds",
                "fixed_seeds",
                "network",
                "policy.default_consistency_checks",
                "policy.mine_blocks_on_demand",
                "policy.mining_requires_peers",
            ])
        );
    }

    #[test]
    fn test_swap_values_are_derived() {
        let main = baseline();
        assert_eq!(main.swap.coinbase_value, 699_899_50_000_000);
        assert_eq!(main.consensus.max_money_out, main.swap.amount);
        assert_eq!(main.consensus.last_pow_block, 211);

        let testnet = derive_testnet(&main);
        assert_eq!(testnet.swap.coinbase_value, coins(6_999_005) / 10);
        // Not recomputed for testnet
        assert_eq!(testnet.consensus.max_money_out, coins(6_998_995));
        assert_eq!(testnet.consensus.last_pow_block, 211);
    }

    #[test]
    fn test_pow_limits() {
        let main = pow_limit_from_shift(6);
        assert_eq!(main.as_bytes()[31], 0x03);
        assert!(main.as_bytes()[..31].iter().all(|b| *b == 0xff));
        assert_eq!(
            main.to_string(),
            format!("03{}", "f".repeat(62))
        );

        let regtest = pow_limit_from_shift(1);
        assert_eq!(regtest.as_bytes()[31], 0x7f);

        let consensus = baseline().consensus;
        assert_eq!(consensus.pow_limit_target().bits(), 250);
    }

    #[test]
    fn test_zerocoin_activation_sentinels() {
        let activation = ZerocoinActivation::disabled();
        assert!(activation.is_disabled());
        assert!(activation.is_consistent());

        let mixed = ZerocoinActivation {
            start_height: 100,
            ..ZerocoinActivation::disabled()
        };
        assert!(!mixed.is_consistent());

        let enabled = ZerocoinActivation {
            start_height: 1,
            start_time: 2,
            block_v2: 3,
            block_recalculate_accumulators: 4,
            block_enforce_serial_range: 5,
            block_first_fraudulent: 6,
            block_last_good_checkpoint: 7,
            block_enforce_invalid_utxo: 8,
        };
        assert!(enabled.is_consistent());
        assert!(!enabled.is_disabled());
    }

    #[test]
    fn test_every_network_keeps_activations_consistent() {
        for network in Network::ALL {
            let constants = constants_for(network);
            assert_eq!(constants.network, network);
            assert!(constants.zerocoin_activation.is_consistent());
        }
    }

    #[test]
    fn test_prefix_lookup() {
        let prefixes = baseline().base58_prefixes;
        assert_eq!(prefixes.get(Base58Type::PubkeyAddress), &[38]);
        assert_eq!(prefixes.get(Base58Type::ScriptAddress), &[15]);
        assert_eq!(prefixes.get(Base58Type::SecretKey), &[142]);
        assert_eq!(prefixes.get(Base58Type::ExtCoinType), &[0x80, 0x00, 0x00, 0x77]);
    }

    #[test]
    fn test_regtest_inherits_testnet_identity_material() {
        let testnet = derive_testnet(&baseline());
        let regtest = derive_regtest(&testnet);
        assert_eq!(regtest.base58_prefixes, testnet.base58_prefixes);
        assert_eq!(regtest.spork, testnet.spork);
        assert_eq!(regtest.masternode.start_payments, i64::from(TESTNET_GENESIS_TIME));
        assert!(regtest.genesis.check.is_none());
    }
}
