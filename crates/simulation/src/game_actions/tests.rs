use super::*;
use crate::blueprints::BlueprintId;
use crate::buildings::BuildingId;
use crate::grid::CellCoord;
use crate::placement::PlacementError;

#[test]
fn test_game_action_json_shape() {
    let action = GameAction::SelectBlueprint {
        id: BlueprintId::from("solar_panel"),
    };
    assert_eq!(
        serde_json::to_string(&action).unwrap(),
        r#"{"type":"select_blueprint","id":"solar_panel"}"#
    );

    let decoded: GameAction =
        serde_json::from_str(r#"{"type":"attempt_placement","row":-1,"col":4}"#).unwrap();
    assert_eq!(decoded, GameAction::AttemptPlacement { row: -1, col: 4 });

    let decoded: GameAction = serde_json::from_str(r#"{"type":"cancel_selection"}"#).unwrap();
    assert_eq!(decoded, GameAction::CancelSelection);

    let decoded: GameAction = serde_json::from_str(
        r#"{"type":"place_building","row":2,"col":3,"blueprint":"house"}"#,
    )
    .unwrap();
    assert_eq!(
        decoded,
        GameAction::PlaceBuilding {
            row: 2,
            col: 3,
            blueprint: BlueprintId::from("house"),
        }
    );
}

#[test]
fn test_unknown_action_type_fails_to_parse() {
    assert!(serde_json::from_str::<GameAction>(r#"{"type":"bulldoze","row":0,"col":0}"#).is_err());
}

#[test]
fn test_action_result_json_shape() {
    let placed = ActionResult::Placed {
        building: BuildingId(3),
        cell: CellCoord::new(1, 2),
    };
    let json = serde_json::to_string(&placed).unwrap();
    assert_eq!(
        json,
        r#"{"status":"placed","building":3,"cell":{"row":1,"col":2}}"#
    );
    assert!(placed.is_success());

    let err = ActionResult::from(PlacementError::CellOccupied);
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"status":"error","error":"cell_occupied"}"#);
    assert!(!err.is_success());
    assert_eq!(err.error(), Some(PlacementError::CellOccupied));
}
