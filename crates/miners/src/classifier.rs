use crate::deposits::{Deposit, LocationId, SpaceObject};

/// How a deposit relates to mining and to the player's current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub is_auto_mined: bool,
    pub is_in_scope: bool,
}

/// Strictly above `threshold`; a rate equal to it is still noise.
pub fn is_auto_mined(deposit: &Deposit, threshold: f32) -> bool {
    deposit.auto_mine_rate > threshold
}

/// Whether the body lies in the location the player is viewing.
///
/// An unknown body or an unknown player location is never in scope.
pub fn is_in_scope(object: Option<&SpaceObject>, player_location: Option<LocationId>) -> bool {
    match (object.and_then(|o| o.parent), player_location) {
        (Some(parent), Some(player)) => parent == player,
        _ => false,
    }
}

pub fn classify(
    deposit: &Deposit,
    object: Option<&SpaceObject>,
    player_location: Option<LocationId>,
    threshold: f32,
) -> Classification {
    Classification {
        is_auto_mined: is_auto_mined(deposit, threshold),
        is_in_scope: is_in_scope(object, player_location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AUTOMINE_THRESHOLD;
    use crate::deposits::{DepositId, ResourceTypeCode, SpaceObjectId};

    fn deposit(rate: f32) -> Deposit {
        Deposit {
            id: DepositId(0),
            resource_type: ResourceTypeCode(1),
            auto_mine_rate: rate,
            unretrieved: 0.0,
            unretrieved_max: 100.0,
        }
    }

    fn object(parent: Option<u64>) -> SpaceObject {
        SpaceObject {
            id: SpaceObjectId(7),
            parent: parent.map(LocationId),
            parent_path: "Sol".to_string(),
        }
    }

    #[test]
    fn test_threshold_boundary_is_not_mined() {
        assert!(!is_auto_mined(&deposit(AUTOMINE_THRESHOLD), AUTOMINE_THRESHOLD));
    }

    #[test]
    fn test_residual_noise_is_not_mined() {
        assert!(!is_auto_mined(&deposit(0.00005), AUTOMINE_THRESHOLD));
        assert!(!is_auto_mined(&deposit(0.0), AUTOMINE_THRESHOLD));
        assert!(!is_auto_mined(&deposit(-0.5), AUTOMINE_THRESHOLD));
    }

    #[test]
    fn test_above_threshold_is_mined() {
        assert!(is_auto_mined(&deposit(0.0002), AUTOMINE_THRESHOLD));
        assert!(is_auto_mined(&deposit(3.25), AUTOMINE_THRESHOLD));
    }

    #[test]
    fn test_threshold_is_a_parameter() {
        assert!(!is_auto_mined(&deposit(0.5), 1.0));
        assert!(is_auto_mined(&deposit(0.5), 0.0));
    }

    #[test]
    fn test_in_scope_same_parent() {
        let o = object(Some(3));
        assert!(is_in_scope(Some(&o), Some(LocationId(3))));
        assert!(!is_in_scope(Some(&o), Some(LocationId(4))));
    }

    #[test]
    fn test_unknowns_are_out_of_scope() {
        assert!(!is_in_scope(None, Some(LocationId(3))));
        assert!(!is_in_scope(Some(&object(None)), None));
        assert!(!is_in_scope(Some(&object(Some(3))), None));
        assert!(!is_in_scope(None, None));
    }

    #[test]
    fn test_classify_combines_both_predicates() {
        let o = object(Some(1));
        let c = classify(&deposit(0.5), Some(&o), Some(LocationId(2)), AUTOMINE_THRESHOLD);
        assert_eq!(
            c,
            Classification {
                is_auto_mined: true,
                is_in_scope: false,
            }
        );
    }
}
