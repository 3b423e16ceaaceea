use crate::chainparams::ChainParams;
use std::sync::{Arc, RwLock};

/// Storage for a network whose parameters can be changed after startup
#[derive(Debug)]
pub struct ModifiableSlot {
    current: RwLock<Arc<ChainParams>>,
}

impl ModifiableSlot {
    pub fn new(params: ChainParams) -> Self {
        ModifiableSlot {
            current: RwLock::new(Arc::new(params)),
        }
    }

    pub fn snapshot(&self) -> Arc<ChainParams> {
        let current = self
            .current
            .read()
            .expect("Failed to acquire read lock on chain params - this should never happen");
        Arc::clone(&current)
    }

    fn update(&self, change: impl FnOnce(&mut ChainParams)) {
        let mut current = self
            .current
            .write()
            .expect("Failed to acquire write lock on chain params - this should never happen");
        // Copy-on-write: readers holding the previous Arc keep a stable view
        change(Arc::make_mut(&mut *current));
    }
}

/// Setters for the values unit tests are allowed to change.
///
/// Changes are visible to every later parameter lookup; values already
/// fetched stay as they were.
pub struct ModifiableParams<'a> {
    slot: &'a ModifiableSlot,
}

impl<'a> ModifiableParams<'a> {
    pub(crate) fn new(slot: &'a ModifiableSlot) -> Self {
        ModifiableParams { slot }
    }

    pub fn set_subsidy_halving_interval(&self, interval: u32) {
        self.slot.update(|params| {
            params.constants_mut().consensus.subsidy_halving_interval = interval
        });
    }

    pub fn set_enforce_block_upgrade_majority(&self, majority: u32) {
        self.slot.update(|params| {
            params.constants_mut().consensus.enforce_block_upgrade_majority = majority
        });
    }

    pub fn set_reject_block_outdated_majority(&self, majority: u32) {
        self.slot.update(|params| {
            params.constants_mut().consensus.reject_block_outdated_majority = majority
        });
    }

    pub fn set_to_check_block_upgrade_majority(&self, window: u32) {
        self.slot.update(|params| {
            params.constants_mut().consensus.to_check_block_upgrade_majority = window
        });
    }

    pub fn set_default_consistency_checks(&self, enabled: bool) {
        self.slot.update(|params| {
            params.constants_mut().policy.default_consistency_checks = enabled
        });
    }

    pub fn set_allow_min_difficulty_blocks(&self, allowed: bool) {
        self.slot.update(|params| {
            params.constants_mut().policy.allow_min_difficulty_blocks = allowed
        });
    }

    pub fn set_skip_proof_of_work_check(&self, skip: bool) {
        self.slot.update(|params| {
            params.constants_mut().policy.skip_proof_of_work_check = skip
        });
    }
}
