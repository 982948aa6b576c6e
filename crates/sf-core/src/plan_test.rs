use super::*;

const TITLES: &[&str] = &["add_users", "add_orders", "add_invoices"];

#[test]
fn test_up_no_target_selects_everything_pending() {
    for pos in 0..=TITLES.len() {
        let range = plan(TITLES, pos, Direction::Up, None).unwrap();
        assert_eq!(range.indices, (pos..TITLES.len()).collect::<Vec<_>>());
        assert_eq!(range.new_pos, TITLES.len());
    }
}

#[test]
fn test_down_no_target_selects_everything_applied_newest_first() {
    for pos in 0..=TITLES.len() {
        let range = plan(TITLES, pos, Direction::Down, None).unwrap();
        assert_eq!(range.indices, (0..pos).rev().collect::<Vec<_>>());
        assert_eq!(range.new_pos, 0);
    }
}

#[test]
fn test_up_to_target_is_inclusive() {
    let range = plan(TITLES, 0, Direction::Up, Some("add_orders")).unwrap();
    assert_eq!(range.indices, vec![0, 1]);
    assert_eq!(range.new_pos, 2);
}

#[test]
fn test_up_to_target_behind_cursor_is_noop() {
    let range = plan(TITLES, 2, Direction::Up, Some("add_users")).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, 2);
}

#[test]
fn test_up_to_target_at_cursor_runs_one_step() {
    let range = plan(TITLES, 1, Direction::Up, Some("add_orders")).unwrap();
    assert_eq!(range.indices, vec![1]);
    assert_eq!(range.new_pos, 2);
}

#[test]
fn test_down_to_target_is_inclusive_and_reversed() {
    let range = plan(TITLES, 3, Direction::Down, Some("add_users")).unwrap();
    assert_eq!(range.indices, vec![2, 1, 0]);
    assert_eq!(range.new_pos, 0);
}

#[test]
fn test_down_to_unapplied_target_is_noop() {
    // Target at the cursor has not been applied, so nothing rolls back.
    let range = plan(TITLES, 1, Direction::Down, Some("add_orders")).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, 1);

    let range = plan(TITLES, 1, Direction::Down, Some("add_invoices")).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, 1);
}

#[test]
fn test_down_to_newest_applied_target_runs_one_step() {
    let range = plan(TITLES, 2, Direction::Down, Some("add_orders")).unwrap();
    assert_eq!(range.indices, vec![1]);
    assert_eq!(range.new_pos, 1);
}

#[test]
fn test_unknown_target_is_an_error_in_both_directions() {
    for direction in [Direction::Up, Direction::Down] {
        let err = plan(TITLES, 0, direction, Some("add_payments")).unwrap_err();
        assert!(matches!(err, CoreError::UnknownStep { ref name } if name == "add_payments"));
    }
}

#[test]
fn test_cursor_is_clamped_to_list_length() {
    // A record saved against a longer list must not break the invariant.
    let range = plan(TITLES, 7, Direction::Up, None).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, TITLES.len());

    let range = plan(TITLES, 7, Direction::Down, None).unwrap();
    assert_eq!(range.indices, vec![2, 1, 0]);
    assert_eq!(range.new_pos, 0);
}

#[test]
fn test_empty_list() {
    let range = plan(&[], 0, Direction::Up, None).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, 0);

    let range = plan(&[], 0, Direction::Down, None).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.new_pos, 0);
}

#[test]
fn test_cursor_stays_in_bounds_for_all_inputs() {
    for pos in 0..=TITLES.len() {
        for direction in [Direction::Up, Direction::Down] {
            for target in std::iter::once(None).chain(TITLES.iter().map(|t| Some(*t))) {
                let range = plan(TITLES, pos, direction, target).unwrap();
                assert!(range.new_pos <= TITLES.len());
                match direction {
                    Direction::Up => assert!(range.new_pos >= pos),
                    Direction::Down => assert!(range.new_pos <= pos),
                }
                assert_eq!(
                    range.new_pos,
                    match direction {
                        Direction::Up => pos + range.len(),
                        Direction::Down => pos - range.len(),
                    }
                );
            }
        }
    }
}
