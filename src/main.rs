// Inspection tool for the compiled-in chain parameters.
// It works from the constants directly and never pins genesis identity, so it
// can show what the bundled header hash produces even where that disagrees
// with the published values.
use bitwin_chainparams::chainparams::{constants_for, ChainConstants, CheckpointData};
use bitwin_chainparams::core::monetary::conversions::format_amount;
use bitwin_chainparams::core::{Genesis, GenesisBuilder, HeaderHasher};
use bitwin_chainparams::network::convert_seed6;
use bitwin_chainparams::utils::current_unix_time;
use bitwin_chainparams::zerocoin::zerocoin_params;
use bitwin_chainparams::{Command, Opt};
use clap::Parser;
use log::{error, info, LevelFilter};
use serde_json::{json, Value};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    let network = opt
        .network
        .network_id()
        .ok_or("Invalid combination of --testnet and --regtest")?;
    let constants = constants_for(network);
    info!("Inspecting {network} parameters");

    let hasher = opt.hasher.hasher();
    let output = match opt.command {
        Command::Genesis => genesis_report(&constants, hasher.as_ref())?,
        Command::Params => params_report(&constants)?,
        Command::Checkpoints => {
            let genesis = GenesisBuilder::new(hasher.as_ref()).build(&constants.genesis)?;
            let checkpoints = CheckpointData::resolve(&constants.checkpoints, genesis.get_hash())?;
            checkpoints_report(&checkpoints)
        }
        Command::Seeds => {
            let now = current_unix_time()?;
            let fixed = convert_seed6(constants.fixed_seeds.table(), now, &mut rand::thread_rng());
            json!({
                "network": network,
                "dns_seeds": constants.dns_seeds,
                "fixed_seeds": fixed,
            })
        }
        Command::Zerocoin { v1 } => {
            let params = zerocoin_params(v1)?;
            json!({
                "encoding": params.encoding,
                "modulus_bits": params.modulus_bits(),
                "security_level": params.security_level,
                "accumulator_base": params.accumulator_base.to_string(),
                "coin_commitment_group": params.coin_commitment_group,
                "accumulator_pok_commitment_group": params.accumulator_pok_commitment_group,
                "qrn_g_bits": params.accumulator_qrn_commitment_group.g.bits(),
                "qrn_h_bits": params.accumulator_qrn_commitment_group.h.bits(),
                "zkp_iterations": params.zkp_iterations,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn genesis_report(
    constants: &ChainConstants,
    hasher: &dyn HeaderHasher,
) -> Result<Value, Box<dyn std::error::Error>> {
    let genesis: Genesis = GenesisBuilder::new(hasher).build(&constants.genesis)?;
    let verdict = match &constants.genesis.check {
        Some(check) => Some(genesis.verify(check)?),
        None => None,
    };

    Ok(json!({
        "network": constants.network,
        "hasher": hasher.name(),
        "header": hex::encode(genesis.get_block().get_header().to_bytes()),
        "hash": genesis.get_hash(),
        "merkle_root": genesis.get_merkle_root(),
        "expected": constants.genesis.check,
        "verdict": verdict,
    }))
}

fn params_report(constants: &ChainConstants) -> Result<Value, Box<dyn std::error::Error>> {
    let mut value = serde_json::to_value(constants)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "max_money_out_display".to_string(),
            json!(format_amount(constants.consensus.max_money_out)),
        );
        map.insert(
            "swap_coinbase_value_display".to_string(),
            json!(format_amount(constants.swap.coinbase_value)),
        );
    }
    Ok(value)
}

fn checkpoints_report(checkpoints: &CheckpointData) -> Value {
    let entries: Vec<Value> = checkpoints
        .iter()
        .map(|(height, hash)| json!({ "height": height, "hash": hash }))
        .collect();

    json!({
        "checkpoints": entries,
        "last_checkpoint_time": checkpoints.last_checkpoint_time,
        "transactions_last_checkpoint": checkpoints.transactions_last_checkpoint,
        "transactions_per_day": checkpoints.transactions_per_day,
    })
}
