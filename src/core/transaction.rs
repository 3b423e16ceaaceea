// Transactions as they appear on the wire. Genesis only ever builds one of
// these, a coinbase, but the encoding is the general one because the txid and
// therefore the merkle root are taken over these exact bytes.

use crate::core::{Hash256, Script};
use crate::utils::{double_sha256, serialize, Encodable};
use serde::{Deserialize, Serialize};

/// Reference to an output of an earlier transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub index: u32,
}

impl OutPoint {
    /// The "no previous output" marker a coinbase input carries
    pub fn null() -> Self {
        OutPoint {
            txid: Hash256::ZERO,
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == u32::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub const CURRENT_VERSION: i32 = 1;

    /// Single-input, single-output coinbase
    pub fn new_coinbase(script_sig: Script, value: i64, script_pubkey: Script) -> Self {
        Transaction {
            version: Self::CURRENT_VERSION,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    pub fn txid(&self) -> Hash256 {
        Hash256::from_bytes(double_sha256(&serialize(self)))
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        self.index.consensus_encode(out);
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.prevout.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        self.sequence.consensus_encode(out);
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.value.consensus_encode(out);
        self.script_pubkey.consensus_encode(out);
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        self.lock_time.consensus_encode(out);
    }
}
