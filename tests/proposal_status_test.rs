use omega_dao::types::ProposalStatus;

const ALL: [ProposalStatus; 4] = [
    ProposalStatus::Active,
    ProposalStatus::Passed,
    ProposalStatus::Rejected,
    ProposalStatus::Executed,
];

#[test]
fn test_only_three_transitions_are_legal() {
    let legal = [
        (ProposalStatus::Active, ProposalStatus::Passed),
        (ProposalStatus::Active, ProposalStatus::Rejected),
        (ProposalStatus::Passed, ProposalStatus::Executed),
    ];

    for from in ALL {
        for to in ALL {
            assert_eq!(
                from.can_transition_to(to),
                legal.contains(&(from, to)),
                "{from:?} -> {to:?}"
            );
        }
    }
}

#[test]
fn test_executed_only_reachable_from_passed() {
    assert!(!ProposalStatus::Active.can_transition_to(ProposalStatus::Executed));
    assert!(!ProposalStatus::Rejected.can_transition_to(ProposalStatus::Executed));
    assert!(ProposalStatus::Passed.can_transition_to(ProposalStatus::Executed));
}

#[test]
fn test_terminal_states() {
    assert!(!ProposalStatus::Active.is_terminal());
    assert!(!ProposalStatus::Passed.is_terminal());
    assert!(ProposalStatus::Rejected.is_terminal());
    assert!(ProposalStatus::Executed.is_terminal());

    for terminal in [ProposalStatus::Rejected, ProposalStatus::Executed] {
        for to in ALL {
            assert!(!terminal.can_transition_to(to));
        }
    }
}
