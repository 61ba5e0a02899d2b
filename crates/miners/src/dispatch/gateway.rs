//! Turns a deploy/retrieve action into an order on the mission subsystem.
//!
//! The presentation item is never touched here: the next aggregation pass is
//! what shows the new mission state.

use bevy::prelude::*;

use crate::backend::MissionSystem;
use crate::presentation::{DispatchTarget, ItemTable};

use super::results::{DispatchOutcome, DispatchVerb};

pub fn dispatch<M: MissionSystem + ?Sized>(
    verb: DispatchVerb,
    target: &DispatchTarget,
    table: &ItemTable,
    missions: &mut M,
) -> DispatchOutcome {
    if !table.contains(target.handle) {
        debug!(
            "Miners dispatch: {:?} for {:?} ignored, item is not in pass {}",
            verb,
            target.handle,
            table.generation()
        );
        return DispatchOutcome::StaleTarget;
    }

    let accepted = match verb {
        DispatchVerb::Deploy => missions.try_order_deployment_to(target.object),
        DispatchVerb::Retrieve => missions.try_order_retrieval_from(target.object),
    };
    let outcome = DispatchOutcome::from_accepted(accepted);
    info!(
        "Miners dispatch: {:?} to {:?} (deposit {:?}) -> {:?}",
        verb, target.object, target.handle.deposit, outcome
    );
    outcome
}

pub fn dispatch_deploy<M: MissionSystem + ?Sized>(
    target: &DispatchTarget,
    table: &ItemTable,
    missions: &mut M,
) -> DispatchOutcome {
    dispatch(DispatchVerb::Deploy, target, table, missions)
}

pub fn dispatch_retrieve<M: MissionSystem + ?Sized>(
    target: &DispatchTarget,
    table: &ItemTable,
    missions: &mut M,
) -> DispatchOutcome {
    dispatch(DispatchVerb::Retrieve, target, table, missions)
}
