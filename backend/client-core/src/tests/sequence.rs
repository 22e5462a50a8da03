use crate::controller::RequestSequence;

#[test]
fn given_new_sequence_when_queried_then_no_latest_ticket() {
    let sequence = RequestSequence::new();
    assert!(sequence.latest().is_none());
}

/// **VALUE**: Only the newest ticket is current.
///
/// **WHY THIS MATTERS**: This is the whole stale-response guard. If an older ticket
/// still counted as current, a slow first request could overwrite a newer result.
#[test]
fn given_two_tickets_when_checked_then_only_newest_is_current() {
    // GIVEN: Two tickets issued in order
    let sequence = RequestSequence::new();
    let first = sequence.begin();
    let second = sequence.begin();

    // THEN: Strictly increasing, only the second is current
    assert!(second > first);
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));
    assert_eq!(sequence.latest(), Some(second));
}

#[test]
fn given_tickets_when_issued_then_ids_start_at_one() {
    let sequence = RequestSequence::new();
    assert_eq!(sequence.begin().id(), 1);
    assert_eq!(sequence.begin().id(), 2);
    assert_eq!(sequence.begin().to_string(), "#3");
}
