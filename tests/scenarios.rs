//! End-to-end action sequences against a recording player.

use playstate::core::StateKind;
use playstate::report::Transcript;
use playstate::{Action, Player};

fn player() -> Player<Transcript> {
    Player::with_reporter(Transcript::default())
}

#[test]
fn demonstration_sequence() {
    let mut player = player();

    player.play();
    player.play();
    player.pause();
    player.stop();

    assert_eq!(player.state(), StateKind::Stopped);
    assert_eq!(
        player.reporter().lines(),
        vec![
            "changing from Stopped to Playing state",
            "Illegal state transition from Playing to Playing",
            "changing from Playing to Paused state",
            "changing from Paused to Stopped state",
        ]
    );
}

#[test]
fn step_by_step_states() {
    let mut player = player();

    player.play();
    assert_eq!(player.state(), StateKind::Playing);

    player.play();
    assert_eq!(player.state(), StateKind::Playing);

    player.pause();
    assert_eq!(player.state(), StateKind::Paused);

    player.stop();
    assert_eq!(player.state(), StateKind::Stopped);
}

#[test]
fn parsed_sequence_matches_direct_calls() {
    let actions: Vec<Action> = ["play", "pause", "play", "stop", "stop"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();

    let mut parsed = player();
    parsed.run(actions);

    let mut direct = player();
    direct.play();
    direct.pause();
    direct.play();
    direct.stop();
    direct.stop();

    assert_eq!(parsed.reporter(), direct.reporter());
    assert_eq!(
        parsed.reporter().lines().last().map(String::as_str),
        Some("Illegal state transition from Stopped to Stopped")
    );
}

#[test]
fn transcript_json_lists_every_action() {
    let mut player = player();
    player.run([Action::Stop, Action::Play]);

    let json = player.reporter().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "kind": "illegal", "from": "Stopped", "to": "Stopped" },
            { "kind": "changed", "from": "Stopped", "to": "Playing" },
        ])
    );
}

#[test]
fn history_path_follows_cycle() {
    let mut player = player();
    player.run([
        Action::Play,
        Action::Pause,
        Action::Play,
        Action::Stop,
        Action::Play,
    ]);

    assert_eq!(
        player.history().path(),
        vec![
            StateKind::Stopped,
            StateKind::Playing,
            StateKind::Paused,
            StateKind::Playing,
            StateKind::Stopped,
            StateKind::Playing,
        ]
    );
}
