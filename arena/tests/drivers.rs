use arena::{
    Game, GameResult, HttpPlayers, Measurement, MeasurementReport, PlayerOptions, Players, Trajectory,
};
use assert_approx_eq::assert_approx_eq;
use engine::fake::{
    FailingMovement, FakeStatus, FlippingMovement, PrefixStatus, ScriptedStatus, FIRST_FEN, FIRST_SAN,
};
use engine::{Color, Move, OracleError, Outcome, Position, Service};

const N: Outcome = Outcome::None;
const D: Outcome = Outcome::Draw;
const W: Outcome = Outcome::Decisive;

fn p0() -> Position {
    Position::starting()
}

fn first() -> Position {
    Position::new(FIRST_FEN)
}

fn m() -> Move {
    Move::new(FIRST_SAN)
}

#[tokio::test]
async fn test_trajectory_reports_white_then_black() {
    let status = PrefixStatus::checkmate(2);
    let movement = FlippingMovement::new();
    let trajectory = Trajectory::new(Players::new(&status, &movement, &movement));

    let trace = trajectory.executed(&[p0(), p0()], 3).await.unwrap();

    assert_eq!(
        trace.positions,
        vec![
            vec![p0(), p0()],
            vec![p0(), p0()],
            vec![first(), Position::end(Color::Black)],
            vec![first(), Position::end(Color::Black)],
        ]
    );
    assert_eq!(trace.moves, vec![vec![m()]; 4]);
    assert_eq!(trace.outcomes, vec![vec![N, N], vec![N, N], vec![N, W], vec![N, W]]);
}

#[tokio::test]
async fn test_trajectory_defaults_to_starting_position() {
    let status = FakeStatus::new();
    let movement = FlippingMovement::new();
    let players = Players::new(&status, &movement, &movement).with_starting(first());

    let trace = Trajectory::new(players).executed(&[], 0).await.unwrap();

    assert_eq!(trace.positions, vec![vec![first()]]);
    assert_eq!(trace.outcomes, vec![vec![N]]);
    assert_eq!(status.calls(), 1);
    assert_eq!(movement.calls(), 0);
}

#[tokio::test]
async fn test_game_is_labelled_after_end_correction() {
    let status = PrefixStatus::checkmate(2);
    let movement = FlippingMovement::new();
    let game = Game::new(Players::new(&status, &movement, &movement));

    let record = game.executed().await.unwrap();

    assert_eq!(record.positions, vec![p0(), first(), p0()]);
    assert_eq!(record.moves, vec![m(), m()]);
    assert_eq!(record.result, GameResult::BlackWin);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["result"], "0-1");
}

#[tokio::test]
async fn test_black_first_game_is_labelled_from_first_mover() {
    let status = PrefixStatus::checkmate(2);
    let movement = FlippingMovement::new();
    let players = Players::new(&status, &movement, &movement).with_starting(first());

    let record = Game::new(players).executed().await.unwrap();

    assert_eq!(record.positions, vec![first(), p0(), first()]);
    assert_eq!(record.result, GameResult::WhiteWin);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["result"], "1-0");
}

#[tokio::test]
async fn test_game_draw() {
    let status = PrefixStatus::stalemate(1);
    let movement = FlippingMovement::new();
    let game = Game::new(Players::new(&status, &movement, &movement));

    let record = game.executed().await.unwrap();

    assert_eq!(record.positions, vec![p0(), first()]);
    assert_eq!(record.result, GameResult::Draw);
}

#[tokio::test]
async fn test_game_without_side_to_move_fails() {
    let status = FakeStatus::new();
    let movement = FlippingMovement::new();
    let players = Players::new(&status, &movement, &movement).with_starting(Position::new("8/8/8/8/8/8/8/8"));

    assert!(Game::new(players).executed().await.is_err());
    assert_eq!(status.calls(), 0);
}

#[tokio::test]
async fn test_measurement_tallies_batch() {
    let status = ScriptedStatus::new(vec![vec![N, N, N], vec![W, D, N], vec![W]]);
    let movement = FlippingMovement::new();
    let measurement = Measurement::new(Players::new(&status, &movement, &movement));

    let report = measurement.executed(3).await.unwrap();

    for info in [report.white_info, report.black_info] {
        assert_approx_eq!(info.score, 1.5);
        assert_eq!((info.win, info.draw, info.lose), (1, 1, 1));
    }
}

#[tokio::test]
async fn test_measurement_counts_black_wins() {
    let status = PrefixStatus::checkmate(2);
    let movement = FlippingMovement::new();
    let measurement = Measurement::new(Players::new(&status, &movement, &movement));

    let report = measurement.executed(4).await.unwrap();

    assert_approx_eq!(report.black_info.score, 4.0);
    assert_eq!(report.black_info.win, 4);
    assert_eq!(report.white_info.lose, 4);
    assert_eq!(status.calls(), 3);
}

#[tokio::test]
async fn test_measurement_from_black_first_start() {
    let status = PrefixStatus::checkmate(2);
    let movement = FlippingMovement::new();
    let players = Players::new(&status, &movement, &movement).with_starting(first());

    let report = Measurement::new(players).executed(2).await.unwrap();

    assert_eq!((report.white_info.win, report.white_info.lose), (2, 0));
    assert_eq!((report.black_info.win, report.black_info.lose), (0, 2));
    assert_approx_eq!(report.white_info.score, 2.0);
}

#[tokio::test]
async fn test_zero_playtime_makes_no_calls() {
    let status = FakeStatus::new();
    let movement = FlippingMovement::new();
    let measurement = Measurement::new(Players::new(&status, &movement, &movement));

    let report = measurement.executed(0).await.unwrap();

    assert_eq!(report, MeasurementReport::default());
    assert_eq!(status.calls(), 0);
    assert_eq!(movement.calls(), 0);
}

#[tokio::test]
async fn test_oracle_error_is_kept_as_source() {
    let expected = OracleError::ResponseStatus {
        service: Service::NextFen,
        url: "http://localhost:8000/model/next-fen".to_string(),
        status: 500,
        body: "boom".to_string(),
    };
    let status = FakeStatus::new();
    let white = FailingMovement(expected.clone());
    let black = FlippingMovement::new();
    let game = Game::new(Players::new(&status, &white, &black));

    let err = game.executed().await.unwrap_err();

    assert_eq!(err.downcast_ref::<OracleError>(), Some(&expected));
}

#[test]
fn test_http_players_from_options() {
    let options = PlayerOptions::default();
    let players = HttpPlayers::from_urls(&options, "http://white:8001", "http://black:8002").unwrap();

    assert_eq!(players.starting, Position::starting());
}
