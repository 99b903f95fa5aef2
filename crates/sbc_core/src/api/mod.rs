// JSON boundary for the page-automation layer

pub mod squad_json;

#[cfg(test)]
mod squad_json_test;

pub use squad_json::{
    evaluate_squad, evaluate_squad_json, evaluate_squad_json_with, request_schema, PlayerData,
    SlotData, SquadRequest, SquadResponse,
};
