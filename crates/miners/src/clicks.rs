//! Executes the action bound to a clicked item.

use crate::backend::MiningBackend;
use crate::deposits::{DepositId, IconId, SpaceObjectId};
use crate::diagnostics::ClickFailure;
use crate::dispatch::{dispatch, DispatchRecord, DispatchVerb};
use crate::events::SurfaceRequest;
use crate::presentation::{DispatchTarget, ItemAction, ItemTable};

/// What a click turned into. The plugin turns these into events.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickEffect {
    Dispatched(DispatchRecord),
    Focus {
        deposit: DepositId,
        object: SpaceObjectId,
    },
    Popup {
        icon: IconId,
        title: String,
        text: String,
    },
    Surface(SurfaceRequest),
}

pub fn execute_click<B: MiningBackend + ?Sized>(
    action: &ItemAction,
    backend: &mut B,
    table: &ItemTable,
) -> Result<ClickEffect, ClickFailure> {
    match action {
        ItemAction::Deploy(target) => Ok(dispatch_effect(
            DispatchVerb::Deploy,
            target,
            backend,
            table,
        )),
        ItemAction::Retrieve(target) => Ok(dispatch_effect(
            DispatchVerb::Retrieve,
            target,
            backend,
            table,
        )),
        ItemAction::Focus { deposit, .. } => {
            // Re-resolve: the body may have moved or vanished since the pass.
            if backend.try_get_deposit(deposit.0).is_none() {
                return Err(ClickFailure::DepositVanished(*deposit));
            }
            let object = backend
                .find(*deposit)
                .ok_or(ClickFailure::ObjectVanished(*deposit))?;
            Ok(ClickEffect::Focus {
                deposit: *deposit,
                object: object.id,
            })
        }
        ItemAction::ShowPopup { icon, title, text } => Ok(ClickEffect::Popup {
            icon: icon.clone(),
            title: title.clone(),
            text: text.clone(),
        }),
        ItemAction::OpenSurface(surface) => {
            Ok(ClickEffect::Surface(SurfaceRequest::Open(*surface)))
        }
        ItemAction::CloseSurface(surface) => {
            Ok(ClickEffect::Surface(SurfaceRequest::Close(*surface)))
        }
    }
}

fn dispatch_effect<B: MiningBackend + ?Sized>(
    verb: DispatchVerb,
    target: &DispatchTarget,
    backend: &mut B,
    table: &ItemTable,
) -> ClickEffect {
    let outcome = dispatch(verb, target, table, backend);
    ClickEffect::Dispatched(DispatchRecord {
        verb,
        deposit: target.handle.deposit,
        object: target.object,
        outcome,
    })
}
