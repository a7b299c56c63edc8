//! End-to-end allocation scenarios.

use rand::Rng;

use formation::{
    audit, transfer, Dimension, Formation, FormationConfig, GroupSet, MoveOutcome, Student,
};

fn formation_with(td_capacity: u32, tp_capacity: u32, students: usize) -> Formation {
    let mut f = Formation::new("M1 Informatique", "E. Le Bras", "e.lebras@univ.fr").unwrap();
    f.set_capacity(Dimension::Td, td_capacity);
    f.set_capacity(Dimension::Tp, tp_capacity);
    for i in 0..students {
        f.register_student("Student", "Test", format!("s{i}@univ.fr"))
            .unwrap();
    }
    f
}

fn td_sizes(f: &Formation) -> Vec<usize> {
    let groups = f.groups(Dimension::Td);
    let mut sizes: Vec<usize> = groups.ids().map(|id| groups.size_of(id)).collect();
    sizes.sort_unstable();
    sizes
}

#[test]
fn ten_students_capacity_four_gives_three_groups() {
    let mut f = formation_with(4, 4, 10);
    f.auto_assign().unwrap();

    assert_eq!(f.td_group_count(), 3);
    assert_eq!(td_sizes(&f), vec![3, 3, 4]);
    audit(&f).unwrap();
}

#[test]
fn nine_students_capacity_three_is_balanced_without_moves() {
    let mut f = formation_with(3, 3, 9);
    f.auto_assign().unwrap();

    assert_eq!(f.td_group_count(), 3);
    assert_eq!(td_sizes(&f), vec![3, 3, 3]);

    // Seeding alone reaches the band: one message per dimension per
    // student, nothing from the rebalancer.
    for s in f.directory().students() {
        assert_eq!(s.messages.len(), 2);
    }
    audit(&f).unwrap();
}

#[test]
fn moving_into_a_full_group_changes_nothing() {
    let mut f = formation_with(4, 4, 10);
    f.auto_assign().unwrap();

    // Find a full TD group and a student outside it.
    let groups = f.groups(Dimension::Td);
    let full = groups.ids().find(|&id| groups.size_of(id) == 4).unwrap();
    let outsider = f
        .directory()
        .students()
        .find(|s| s.td_group != Some(full))
        .map(|s| s.id)
        .unwrap();

    let before_group = f.student(outsider).unwrap().td_group;
    let before_members = f.td_group(full).unwrap().clone();
    let before_messages = f.student(outsider).unwrap().messages.len();

    let outcome = f.move_student(outsider, Some(full), None).unwrap();
    assert_eq!(outcome, MoveOutcome::TdFull);
    assert_eq!(f.student(outsider).unwrap().td_group, before_group);
    assert_eq!(f.td_group(full).unwrap(), &before_members);
    assert_eq!(f.student(outsider).unwrap().messages.len(), before_messages);
    audit(&f).unwrap();
}

#[test]
fn tp_only_move_leaves_td_untouched() {
    let mut cfg = FormationConfig::new();
    cfg.set_capacity(Dimension::Td, 4);
    cfg.set_capacity(Dimension::Tp, 4);
    let mut tds = GroupSet::new();
    tds.grow_to(2);
    let mut tps = GroupSet::new();
    tps.grow_to(1);

    // Student in TD group 2, TP unassigned.
    let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
    transfer(&mut s, &mut tds, &mut tps, &cfg, Some(2), None);
    assert_eq!(s.td_group, Some(2));
    assert_eq!(s.tp_group, None);
    let td_members_before = tds.members(2).unwrap().clone();
    let messages_before = s.messages.len();

    let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, None, Some(1));
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(s.tp_group, Some(1));
    assert_eq!(s.td_group, Some(2));
    assert_eq!(tds.members(2).unwrap(), &td_members_before);
    assert_eq!(s.messages.len(), messages_before + 1);
    assert_eq!(s.messages.last().unwrap().body, "new group: 1");
}

#[test]
fn notifications_carry_twenty_char_titles() {
    let mut f = formation_with(4, 4, 10);
    f.auto_assign().unwrap();

    for s in f.directory().students() {
        assert!(!s.messages.is_empty());
        for m in &s.messages {
            let preview: String = m.body.chars().take(20).collect();
            assert_eq!(m.title, format!("{preview}..."));
        }
    }
}

#[test]
fn growing_roster_between_runs_stays_balanced() {
    let mut f = formation_with(4, 3, 6);
    f.auto_assign().unwrap();
    audit(&f).unwrap();

    for i in 0..7 {
        f.register_student("Late", "Arrival", format!("late{i}@univ.fr"))
            .unwrap();
    }
    f.auto_assign().unwrap();

    assert_eq!(f.td_group_count(), 4); // ceil(13 / 4)
    assert_eq!(f.tp_group_count(), 5); // ceil(13 / 3)
    for dim in [Dimension::Td, Dimension::Tp] {
        let groups = f.groups(dim);
        let target = f.directory().len() as f64 / groups.count() as f64;
        assert!(groups.is_balanced(target));
    }
    audit(&f).unwrap();
}

#[test]
fn random_rosters_converge_to_the_band() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let td_capacity = rng.random_range(1..=8);
        let tp_capacity = rng.random_range(1..=8);
        let first_wave = rng.random_range(0..=25);
        let second_wave = rng.random_range(0..=25);

        let mut f = formation_with(td_capacity, tp_capacity, first_wave);
        f.auto_assign().unwrap();
        for i in 0..second_wave {
            f.register_student("Wave", "Two", format!("w{i}@univ.fr"))
                .unwrap();
        }
        f.auto_assign().unwrap();

        audit(&f).unwrap();
        let roster = f.directory().len();
        for dim in [Dimension::Td, Dimension::Tp] {
            let groups = f.groups(dim);
            if roster == 0 {
                assert!(groups.is_empty());
                continue;
            }
            let target = roster as f64 / groups.count() as f64;
            assert!(
                groups.is_balanced(target),
                "unbalanced {dim} groups for roster {roster}: {:?}",
                groups.ids().map(|id| groups.size_of(id)).collect::<Vec<_>>()
            );
            assert_eq!(
                groups.total_members(),
                roster,
                "not everyone placed in {dim}"
            );
        }
    }
}
