use super::*;
use chrono::TimeZone;
use tempfile::TempDir;

use ctr_playtime_core::GameRecord;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn timer(elapsed_secs: i64) -> SessionTimer {
    let mut timer = SessionTimer::new();
    timer.start_at(at(0));
    timer.stop_at(at(elapsed_secs)).unwrap();
    timer
}

/// Reports "exited" after a fixed number of polls.
#[derive(Debug)]
struct FakeProcess {
    polls_until_exit: u32,
}

impl Liveness for FakeProcess {
    fn has_exited(&mut self) -> std::io::Result<bool> {
        if self.polls_until_exit == 0 {
            return Ok(true);
        }
        self.polls_until_exit -= 1;
        Ok(false)
    }
}

#[derive(Debug)]
struct BrokenProcess;

impl Liveness for BrokenProcess {
    fn has_exited(&mut self) -> std::io::Result<bool> {
        Err(std::io::Error::other("no such process"))
    }
}

fn shared_ledger(tmp: &TempDir) -> Mutex<PlaytimeLedger> {
    let records = vec![GameRecord::new("CTR-P-ABCE", "Test", "/roms/test.3ds")];
    let path = tmp.path().join("times.json");
    Mutex::new(PlaytimeLedger::load_or_initialize(path, &records).unwrap())
}

// -- SessionTimer --

#[test]
fn test_duration_whole_minutes() {
    assert_eq!(timer(0).duration_minutes().unwrap(), 0);
    assert_eq!(timer(60).duration_minutes().unwrap(), 1);
    assert_eq!(timer(45 * 60).duration_minutes().unwrap(), 45);
}

#[test]
fn test_duration_rounds_to_nearest() {
    assert_eq!(timer(29).duration_minutes().unwrap(), 0);
    assert_eq!(timer(31).duration_minutes().unwrap(), 1);
    assert_eq!(timer(89).duration_minutes().unwrap(), 1);
    assert_eq!(timer(91).duration_minutes().unwrap(), 2);
}

#[test]
fn test_duration_rounds_half_to_even() {
    assert_eq!(timer(30).duration_minutes().unwrap(), 0);
    assert_eq!(timer(90).duration_minutes().unwrap(), 2);
    assert_eq!(timer(150).duration_minutes().unwrap(), 2);
    assert_eq!(timer(210).duration_minutes().unwrap(), 4);
}

#[test]
fn test_duration_clock_went_backwards() {
    assert_eq!(timer(-300).duration_minutes().unwrap(), 0);
}

#[test]
fn test_duration_before_start() {
    let timer = SessionTimer::new();
    assert!(matches!(
        timer.duration_minutes(),
        Err(SessionError::NotStarted)
    ));
}

#[test]
fn test_duration_before_stop() {
    let mut timer = SessionTimer::new();
    timer.start();
    assert!(matches!(
        timer.duration_minutes(),
        Err(SessionError::NotStopped)
    ));
}

#[test]
fn test_stop_before_start() {
    let mut timer = SessionTimer::new();
    assert!(matches!(timer.stop(), Err(SessionError::NotStarted)));
}

#[test]
fn test_restart_clears_stop() {
    let mut timer = timer(120);
    timer.start_at(at(500));
    assert_eq!(timer.started_at(), Some(at(500)));
    assert!(timer.stopped_at().is_none());
    assert!(matches!(
        timer.duration_minutes(),
        Err(SessionError::NotStopped)
    ));
}

// -- PlaySession --

#[test]
fn test_poll_running_then_finished() {
    let tmp = TempDir::new().unwrap();
    let ledger = shared_ledger(&tmp);
    let session = PlaySession::start_at("CTR-P-ABCE", FakeProcess { polls_until_exit: 2 }, at(0));

    let session = match session.poll_at(&ledger, at(60)).unwrap() {
        PollOutcome::Running(s) => s,
        PollOutcome::Finished(_) => panic!("finished too early"),
    };
    let session = match session.poll_at(&ledger, at(120)).unwrap() {
        PollOutcome::Running(s) => s,
        PollOutcome::Finished(_) => panic!("finished too early"),
    };
    assert_eq!(ledger.lock().unwrap().entry("CTR-P-ABCE").unwrap().time_played, 0);

    match session.poll_at(&ledger, at(25 * 60)).unwrap() {
        PollOutcome::Finished(summary) => {
            assert_eq!(summary.minutes, 25);
            assert_eq!(summary.entry.time_played, 25);
            assert_eq!(summary.entry.last_time_played, Some(at(25 * 60).timestamp()));
        }
        PollOutcome::Running(_) => panic!("expected the session to finish"),
    }
}

#[test]
fn test_sessions_accumulate() {
    let tmp = TempDir::new().unwrap();
    let ledger = shared_ledger(&tmp);

    for _ in 0..3 {
        let session =
            PlaySession::start_at("CTR-P-ABCE", FakeProcess { polls_until_exit: 0 }, at(0));
        assert!(matches!(
            session.poll_at(&ledger, at(600)).unwrap(),
            PollOutcome::Finished(_)
        ));
    }
    assert_eq!(ledger.lock().unwrap().entry("CTR-P-ABCE").unwrap().time_played, 30);
}

#[test]
fn test_poll_unknown_game() {
    let tmp = TempDir::new().unwrap();
    let ledger = shared_ledger(&tmp);
    let session = PlaySession::start_at("CTR-P-ZZZE", FakeProcess { polls_until_exit: 0 }, at(0));

    let err = session.poll_at(&ledger, at(60)).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Ledger(LedgerError::UnknownGameId(_))
    ));
}

#[test]
fn test_poll_process_error() {
    let tmp = TempDir::new().unwrap();
    let ledger = shared_ledger(&tmp);
    let session = PlaySession::start_at("CTR-P-ABCE", BrokenProcess, at(0));
    assert!(matches!(
        session.poll_at(&ledger, at(60)),
        Err(SessionError::Process(_))
    ));
}

#[test]
fn test_game_status_display() {
    assert_eq!(GameStatus::Installed.to_string(), "installed");
    assert_eq!(GameStatus::Running.to_string(), "running");
}
