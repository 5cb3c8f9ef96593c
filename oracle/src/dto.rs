use engine::{Move, Position};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct FenStatusRequest<'a> {
    pub fens: &'a [Position],
}

#[derive(Deserialize, Debug)]
pub struct FenStatusResponse {
    pub statuses: Vec<i64>,
    pub legal_moves: Vec<Vec<Move>>,
}

#[derive(Serialize, Debug)]
pub struct NextFenRequest<'a> {
    pub fens: &'a [Position],
    pub sans: &'a [Move],
}

#[derive(Deserialize, Debug)]
pub struct NextFenResponse {
    pub next_fens: Vec<Position>,
}

#[derive(Serialize, Debug)]
pub struct NextSanRequest<'a> {
    pub fens: &'a [Position],
    pub legal_moves: &'a [Vec<Move>],
}

#[derive(Deserialize, Debug)]
pub struct NextSanResponse {
    pub next_sans: Vec<Move>,
}
