use super::*;
use crate::data::RuleBook;
use crate::error::SbcError;
use serde_json::{json, Value};

const SOLO_RULES: &str = r#"
edition: solo
formations:
  "4-3-3":
    positions: [GK, LB, CB, CB, RB, CDM, LM, CAM, RM, LW, ST]
    adjacency: {}
"#;

fn slots_433(players: Vec<(usize, Value)>) -> Value {
    let positions = ["GK", "LB", "CB", "CB", "RB", "CDM", "LM", "CAM", "RM", "LW", "ST"];
    let mut slots: Vec<Value> = positions
        .iter()
        .map(|p| json!({ "position": p }))
        .collect();
    for (i, player) in players {
        slots[i]["player"] = player;
    }
    Value::Array(slots)
}

fn player(id: &str, rating: u8, position: &str, club: &str) -> Value {
    json!({ "id": id, "rating": rating, "position": position, "club": club })
}

fn request_433(players: Vec<(usize, Value)>) -> Value {
    json!({ "schemaVersion": 1, "formation": "4-3-3", "slots": slots_433(players) })
}

fn evaluate(request: &Value) -> Value {
    let response = evaluate_squad_json(&request.to_string()).unwrap();
    serde_json::from_str(&response).unwrap()
}

fn evaluate_err(request: &Value) -> SbcError {
    evaluate_squad_json(&request.to_string()).unwrap_err()
}

#[test]
fn test_evaluate_with_requirements() {
    let request = json!({
        "schemaVersion": 1,
        "formation": "4-3-3",
        "slots": slots_433(vec![
            (0, player("gk", 80, "GK", "ACME")),
            (1, player("lb", 76, "LB", "ACME")),
            (2, player("cb", 70, "CB", "ACME")),
        ]),
        "requirements": {
            "maxPlayersFromSameClub": 2,
            "minBronzePlayers": null,
            "minSilverPlayers": 1,
            "numberOfPlayers": 4
        }
    });

    let response = evaluate(&request);

    assert_eq!(response["schemaVersion"], 1);
    assert_eq!(response["report"]["teamRating"], 75);
    assert_eq!(response["report"]["players"].as_array().unwrap().len(), 3);
    assert_eq!(response["validation"]["valid"], false);
    assert_eq!(
        response["validation"]["issues"],
        json!(["Too many players from same club: 3 from ACME (max 2)"])
    );
    assert_eq!(response["slotsToFill"], json!([3, 4, 5, 6]));
    assert_eq!(response["searchQuality"], "silver");
}

#[test]
fn test_evaluate_without_requirements_skips_validation() {
    let response = evaluate(&request_433(vec![]));
    assert!(response.get("validation").is_none());
    assert_eq!(response["report"]["teamChemistry"], 0);
    assert_eq!(response["slotsToFill"].as_array().unwrap().len(), 11);
}

#[test]
fn test_unknown_formation_degrades_to_no_links() {
    let mut request = request_433(vec![
        (0, player("gk", 80, "GK", "ACME")),
        (1, player("lb", 80, "LB", "ACME")),
    ]);
    request["formation"] = json!("3-3-3-1");
    let response = evaluate(&request);
    assert_eq!(response["report"]["knownFormation"], false);
    assert_eq!(response["report"]["teamChemistry"], 0);
}

#[test]
fn test_quality_derived_when_missing() {
    let keeper = json!({ "id": "gk", "rating": 66, "position": "gk" });
    let request: SquadRequest = serde_json::from_value(request_433(vec![(0, keeper)])).unwrap();
    let (squad, _) = request.into_squad().unwrap();
    let gk = squad.occupant(0).unwrap();
    assert_eq!(gk.quality, crate::models::Quality::Silver);
    assert_eq!(gk.rarity, crate::models::Rarity::Common);
}

#[test]
fn test_contract_violations_fail_loudly() {
    let mut short = request_433(vec![]);
    short["slots"].as_array_mut().unwrap().pop();
    assert!(matches!(
        evaluate_err(&short),
        SbcError::InvalidSquadSize {
            expected: 11,
            found: 10
        }
    ));

    let err = evaluate_err(&request_433(vec![(3, player("x", 70, "SW", "C"))]));
    assert!(matches!(err, SbcError::InvalidPosition(ref p) if p == "SW"));

    let err = evaluate_err(&request_433(vec![(3, player("x", 105, "CB", "C"))]));
    assert!(matches!(err, SbcError::InvalidRating(105)));
}

#[test]
fn test_schema_version_checked() {
    let mut request = request_433(vec![]);
    request["schemaVersion"] = json!(2);
    assert!(matches!(
        evaluate_err(&request),
        SbcError::UnsupportedSchema {
            found: 2,
            expected: 1
        }
    ));
}

#[test]
fn test_malformed_json_is_an_error() {
    let result = evaluate_squad_json("{not json");
    assert!(matches!(result, Err(SbcError::Json(_))));
}

#[test]
fn test_alternate_rule_book() {
    let rules = RuleBook::from_yaml_str(SOLO_RULES).unwrap();
    let request = request_433(vec![
        (0, player("gk", 80, "GK", "ACME")),
        (1, player("lb", 80, "LB", "ACME")),
    ]);
    let body = request.to_string();
    let solo = evaluate_squad_json_with(&rules, &body).unwrap();
    let solo: Value = serde_json::from_str(&solo).unwrap();
    assert_eq!(evaluate(&request)["report"]["teamChemistry"], 2);
    assert_eq!(solo["report"]["teamChemistry"], 0);
}

#[test]
fn test_request_schema_describes_slots() {
    let schema: Value = serde_json::from_str(&request_schema().unwrap()).unwrap();
    assert!(schema["properties"]["slots"].is_object());
    let required = schema["required"].as_array().unwrap();
    assert!(required.contains(&json!("formation")));
    assert!(required.contains(&json!("schemaVersion")));
}

#[test]
fn test_envelope_is_camel_case() {
    let mut snake = request_433(vec![]);
    let fields = snake.as_object_mut().unwrap();
    let version = fields.remove("schemaVersion").unwrap();
    fields.insert("schema_version".into(), version);
    assert!(matches!(evaluate_err(&snake), SbcError::Json(_)));

    let response = evaluate(&request_433(vec![]));
    let keys: Vec<&str> = response
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.iter().all(|k| !k.contains('_')), "{keys:?}");
}
