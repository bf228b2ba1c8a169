//! Tests for step kinds and their accessors

#[cfg(test)]
mod tests {
    use queens_trace::{BoardSize, Position, Step, StepKind, solve};

    const KINDS: [StepKind; 8] = [
        StepKind::InitialPlace,
        StepKind::AttemptPlace,
        StepKind::PlaceQueen,
        StepKind::Conflict,
        StepKind::Backtrack,
        StepKind::SolutionFound,
        StepKind::NoSolutionPossible,
        StepKind::FinishedAllSolutions,
    ];

    fn trace(n: usize) -> Vec<Step> {
        BoardSize::new(n).map_or_else(|error| unreachable!("{error}"), |size| solve(size, None))
    }

    // Tests only the two end kinds are terminal
    // Verified by treating SolutionFound as terminal
    #[test]
    fn test_terminal_kinds() {
        let terminal: Vec<StepKind> = KINDS
            .into_iter()
            .filter(|kind| kind.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![
                StepKind::NoSolutionPossible,
                StepKind::FinishedAllSolutions
            ]
        );
    }

    // Tests tags match the serialized kind names
    // Verified by serializing kinds in camel case
    #[test]
    fn test_tags_match_serialization() {
        for kind in KINDS {
            let json = serde_json::to_string(&kind).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", kind.tag()));
        }
        assert_eq!(StepKind::AttemptPlace.tag(), "ATTEMPT_PLACE");
    }

    // Tests optional fields are set by kind
    // Verified by attaching conflicts to attempt steps
    #[test]
    fn test_optional_fields_follow_kind() {
        for step in trace(5) {
            let kind = step.kind();
            assert_eq!(step.conflicts().is_some(), kind == StepKind::Conflict);
            assert_eq!(step.solution().is_some(), kind == StepKind::SolutionFound);
            match kind {
                StepKind::AttemptPlace
                | StepKind::PlaceQueen
                | StepKind::Conflict
                | StepKind::Backtrack => assert!(step.active().is_some()),
                StepKind::InitialPlace
                | StepKind::SolutionFound
                | StepKind::NoSolutionPossible
                | StepKind::FinishedAllSolutions => assert!(step.active().is_none()),
            }
        }
    }

    // Tests messages use raw labels counted from the top
    // Verified by labelling with board ranks
    #[test]
    fn test_messages_use_raw_labels() {
        let steps = trace(4);
        let messages: Vec<&str> = steps.iter().take(5).map(Step::message).collect();
        assert_eq!(
            messages,
            vec![
                "Starting search for 4-Queens with no initial queen.",
                "Attempting to place queen at (A1).",
                "Queen placed at (A1). Moving to next column.",
                "Attempting to place queen at (B1).",
                "Conflict at (B1). Cannot place queen. Conflicting with (A1).",
            ]
        );
        assert_eq!(
            steps.get(4).and_then(Step::conflicts),
            Some(&[Position::new(0, 0)][..])
        );
    }

    // Tests a cloned snapshot outlives the trace it came from
    // Verified by sharing the board between step and clone
    #[test]
    fn test_board_snapshot_survives_trace() {
        let board = {
            let steps = trace(4);
            let Some(place) = steps.get(2) else {
                unreachable!("4-Queens trace has a placement");
            };
            place.board().clone()
        };
        assert!(board.is_queen(Position::new(0, 0)));
        assert_eq!(board.queen_count(), 1);
    }
}
