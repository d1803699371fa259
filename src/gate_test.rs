use super::*;

use crate::field::Validity::{Invalid, Unknown, Valid};

#[test]
fn default_quiet_period_is_500ms() {
    assert_eq!(FormGate::default().quiet_period(), Duration::from_millis(500));
}

#[test]
fn first_observation_schedules_without_evaluating() {
    let mut gate = FormGate::default();
    let ticket = gate.observe(&[Unknown, Unknown]);
    assert!(ticket.is_some());
    assert!(gate.is_pending());
    assert!(!gate.submittable());
    assert_eq!(gate.recomputations(), 0);
}

#[test]
fn unchanged_validities_do_not_reschedule() {
    let mut gate = FormGate::default();
    let first = gate.observe(&[Valid, Invalid]).unwrap();
    assert_eq!(gate.observe(&[Valid, Invalid]), None);
    assert_eq!(gate.fire(first), Some(false));
}

#[test]
fn fire_computes_and_of_all_validities() {
    let mut gate = FormGate::default();
    let ticket = gate.observe(&[Valid, Valid]).unwrap();
    assert_eq!(gate.fire(ticket), Some(true));
    assert!(gate.submittable());
    assert!(!gate.is_pending());

    let ticket = gate.observe(&[Valid, Unknown]).unwrap();
    assert_eq!(gate.fire(ticket), Some(false));
    assert!(!gate.submittable());
}

#[test]
fn superseded_ticket_has_no_effect() {
    let mut gate = FormGate::default();
    let stale = gate.observe(&[Valid, Valid]).unwrap();
    let latest = gate.observe(&[Valid, Invalid]).unwrap();

    assert_eq!(gate.fire(stale), None);
    assert_eq!(gate.recomputations(), 0);
    assert_eq!(gate.fire(latest), Some(false));
    assert_eq!(gate.recomputations(), 1);
}

#[test]
fn burst_of_changes_recomputes_once_against_last() {
    let mut gate = FormGate::default();
    let mut tickets = Vec::new();
    for validities in [[Unknown, Unknown], [Valid, Unknown], [Invalid, Unknown], [Valid, Invalid], [Valid, Valid]] {
        tickets.extend(gate.observe(&validities));
    }
    let applied: Vec<_> = tickets.into_iter().filter_map(|t| gate.fire(t)).collect();
    assert_eq!(applied, vec![true]);
    assert_eq!(gate.recomputations(), 1);
}

#[test]
fn ticket_fires_at_most_once() {
    let mut gate = FormGate::default();
    let ticket = gate.observe(&[Valid, Valid]).unwrap();
    assert_eq!(gate.fire(ticket), Some(true));
    assert_eq!(gate.fire(ticket), None);
    assert_eq!(gate.recomputations(), 1);
}

#[test]
fn cancel_drops_pending_recomputation() {
    let mut gate = FormGate::default();
    let ticket = gate.observe(&[Valid, Valid]).unwrap();
    assert!(gate.cancel());
    assert!(!gate.cancel());
    assert_eq!(gate.fire(ticket), None);
    assert!(!gate.submittable());
}

#[test]
fn teardown_before_quiet_period_writes_nothing() {
    let mut gate = FormGate::default();
    let ticket = gate.observe(&[Valid, Valid]).unwrap();
    gate.teardown();

    assert_eq!(gate.fire(ticket), None);
    assert!(!gate.submittable());
    assert_eq!(gate.recomputations(), 0);
    assert!(gate.is_torn_down());
    assert_eq!(gate.observe(&[Invalid, Invalid]), None);
}
