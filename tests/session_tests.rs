// tests/session_tests.rs
use wayback::config::Config;
use wayback::history::error::NavigationError;
use wayback::history::waypoint::Waypoint;
use wayback::host::event::{Command, HostEvent, Position};
use wayback::host::Session;
use wayback::replay::host::RecordingHost;

fn moved(path: &str, from: usize, to: usize) -> HostEvent {
    HostEvent::CursorMoved {
        position: Position::in_file(path, to),
        previous_line: Some(from),
    }
}

fn opened(path: &str, line: usize) -> HostEvent {
    HostEvent::TabOpened {
        position: Position::in_file(path, line),
    }
}

/// Delivers the host's echo of its last navigation, as an editor would.
async fn settle(session: &mut Session<RecordingHost>) {
    for event in session.host_mut().take_events() {
        session.handle_event(event).await.unwrap();
    }
}

#[tokio::test]
async fn test_small_moves_are_filtered() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());

    session.handle_event(moved("greek-letters.txt", 0, 5)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 0);

    session.handle_event(moved("greek-letters.txt", 0, 6)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 1);
}

#[tokio::test]
async fn test_threshold_comes_from_config() {
    let config = Config {
        line_threshold: 0,
        ..Config::default()
    };
    let mut session = Session::activate(&config, RecordingHost::new());
    assert_eq!(session.filter().line_threshold(), 0);

    for line in 1..=8 {
        session.handle_event(moved("the-raven.txt", line - 1, line)).await.unwrap();
    }
    assert_eq!(session.engine().num_waypoints(), 2);
}

#[tokio::test]
async fn test_disabled_session_records_nothing() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    session.run_command(Command::Toggle).await.unwrap();
    assert!(!session.engine().is_enabled());

    session.handle_event(moved("greek-letters.txt", 0, 6)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 0);
}

#[tokio::test]
async fn test_activate_disabled_from_config() {
    let config = Config {
        enabled: false,
        ..Config::default()
    };
    let session = Session::activate(&config, RecordingHost::new());
    assert!(!session.engine().is_enabled());
}

#[tokio::test]
async fn test_end_to_end_within_one_file() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());

    session.handle_event(moved("the-raven.txt", 0, 20)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 1);
    session.handle_event(moved("the-raven.txt", 20, 44)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 2);
    session.handle_event(moved("the-raven.txt", 44, 78)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 3);

    let target = session.run_command(Command::NavigateBackward).await.unwrap();
    assert_eq!(target, Some(Waypoint::at_path("the-raven.txt", 44)));
    assert_eq!(session.engine().num_waypoints(), 3);
    settle(&mut session).await;

    let target = session.run_command(Command::NavigateForward).await.unwrap();
    assert_eq!(target, Some(Waypoint::at_path("the-raven.txt", 78)));
    settle(&mut session).await;

    session.run_command(Command::NavigateBackward).await.unwrap();
    settle(&mut session).await;
    session.run_command(Command::NavigateBackward).await.unwrap();
    settle(&mut session).await;

    assert_eq!(
        session.engine().current(),
        Some(&Waypoint::at_path("the-raven.txt", 20))
    );
    assert_eq!(session.engine().num_waypoints(), 3);
}

#[tokio::test]
async fn test_backward_between_files() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());

    session.handle_event(opened("greek-letters.txt", 7)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 1);
    session.handle_event(opened("the-raven.txt", 37)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 2);

    let target = session.run_command(Command::NavigateBackward).await.unwrap();
    assert_eq!(target, Some(Waypoint::at_path("greek-letters.txt", 7)));
    settle(&mut session).await;

    let target = session.run_command(Command::NavigateForward).await.unwrap();
    assert_eq!(target, Some(Waypoint::at_path("the-raven.txt", 37)));
}

#[tokio::test]
async fn test_navigating_empty_history_reports_error() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    let err = session.run_command(Command::NavigateBackward).await.unwrap_err();
    assert!(matches!(err, NavigationError::EmptyBackHistory));
}

#[tokio::test]
async fn test_ignored_prefixes_not_recorded() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    session.handle_event(opened("atom://config", 0)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 0);

    let config = Config {
        ignored_prefixes: vec!["settings:".to_string()],
        ..Config::default()
    };
    let mut session = Session::activate(&config, RecordingHost::new());
    session.handle_event(opened("settings:keymap", 0)).await.unwrap();
    session.handle_event(opened("atom://config", 0)).await.unwrap();
    assert_eq!(session.engine().num_waypoints(), 1);
}

#[tokio::test]
async fn test_clear_command() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    session.handle_event(opened("a.txt", 0)).await.unwrap();
    session.handle_event(opened("b.txt", 0)).await.unwrap();

    assert_eq!(session.run_command(Command::Clear).await.unwrap(), None);
    assert_eq!(session.engine().num_waypoints(), 0);
}

#[tokio::test]
async fn test_deactivate_discards_history_and_returns_host() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    session.handle_event(opened("a.txt", 3)).await.unwrap();
    session.handle_event(opened("b.txt", 9)).await.unwrap();
    session.run_command(Command::NavigateBackward).await.unwrap();

    let host = session.deactivate();
    assert_eq!(host.requests().len(), 1);
}

#[tokio::test]
async fn test_tab_added_event_reindexes() {
    let mut session = Session::activate(&Config::default(), RecordingHost::new());
    session
        .handle_event(HostEvent::TabOpened {
            position: Position::in_tab(0, 2),
        })
        .await
        .unwrap();
    session.handle_event(HostEvent::TabAdded { index: 0 }).await.unwrap();

    assert_eq!(
        session.engine().current(),
        Some(&Waypoint::at_tab(1, 2))
    );
}
