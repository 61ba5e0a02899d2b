//! Recent dispatch history, queried per deposit and per outcome.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::deposits::DepositId;

use super::results::{DispatchOutcome, DispatchRecord};

/// Records kept before the oldest is dropped.
const RETAINED_RECORDS: usize = 64;

/// Outcome counts since the log was created, including evicted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub accepted: u32,
    pub rejected: u32,
    pub stale: u32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DispatchLog {
    records: VecDeque<DispatchRecord>,
    tally: OutcomeTally,
}

impl DispatchLog {
    pub fn push(&mut self, record: DispatchRecord) {
        match record.outcome {
            DispatchOutcome::Accepted => self.tally.accepted += 1,
            DispatchOutcome::Rejected => self.tally.rejected += 1,
            DispatchOutcome::StaleTarget => self.tally.stale += 1,
        }
        if self.records.len() == RETAINED_RECORDS {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn last(&self) -> Option<&DispatchRecord> {
        self.records.back()
    }

    /// Most recent retained dispatch aimed at `deposit`.
    pub fn latest_for(&self, deposit: DepositId) -> Option<&DispatchRecord> {
        self.records.iter().rev().find(|r| r.deposit == deposit)
    }

    pub fn tally(&self) -> OutcomeTally {
        self.tally
    }

    /// Retained records, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &DispatchRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposits::SpaceObjectId;
    use crate::dispatch::DispatchVerb;

    fn record(verb: DispatchVerb, deposit: u32, outcome: DispatchOutcome) -> DispatchRecord {
        DispatchRecord {
            verb,
            deposit: DepositId(deposit),
            object: SpaceObjectId(1000 + u64::from(deposit)),
            outcome,
        }
    }

    #[test]
    fn test_latest_for_deposit() {
        let mut log = DispatchLog::default();
        log.push(record(DispatchVerb::Deploy, 3, DispatchOutcome::Rejected));
        log.push(record(DispatchVerb::Retrieve, 5, DispatchOutcome::Accepted));
        log.push(record(DispatchVerb::Deploy, 3, DispatchOutcome::Accepted));

        let latest = log.latest_for(DepositId(3)).copied();
        assert_eq!(latest.map(|r| r.outcome), Some(DispatchOutcome::Accepted));
        assert_eq!(
            log.latest_for(DepositId(5)).map(|r| r.verb),
            Some(DispatchVerb::Retrieve)
        );
        assert!(log.latest_for(DepositId(9)).is_none());
        assert_eq!(log.last().map(|r| r.deposit), Some(DepositId(3)));
    }

    #[test]
    fn test_tally_survives_eviction() {
        let mut log = DispatchLog::default();
        for i in 0..50 {
            log.push(record(DispatchVerb::Deploy, i, DispatchOutcome::Accepted));
        }
        for i in 50..80 {
            log.push(record(DispatchVerb::Retrieve, i, DispatchOutcome::Rejected));
        }
        log.push(record(DispatchVerb::Deploy, 80, DispatchOutcome::StaleTarget));

        assert_eq!(log.len(), RETAINED_RECORDS);
        assert_eq!(
            log.tally(),
            OutcomeTally {
                accepted: 50,
                rejected: 30,
                stale: 1,
            }
        );
        // Deposit 16 was the 17th push of 81 and fell out of the window.
        assert!(log.latest_for(DepositId(16)).is_none());
        assert!(log.latest_for(DepositId(17)).is_some());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = DispatchLog::default();
        assert!(log.is_empty());
        for i in 0..3 {
            log.push(record(DispatchVerb::Deploy, i, DispatchOutcome::Accepted));
        }
        let order: Vec<_> = log.recent().map(|r| r.deposit.0).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
