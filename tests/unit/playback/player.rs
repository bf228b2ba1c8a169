//! Tests for the playback state machine

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use queens_trace::playback::{Playback, Progress};
    use queens_trace::{BoardSize, QueensError, Step, StepKind, solve};

    fn trace(n: usize) -> Vec<Step> {
        BoardSize::new(n).map_or_else(|error| unreachable!("{error}"), |size| solve(size, None))
    }

    fn advance_to_first_solution(playback: &mut Playback<'_>) {
        while playback
            .current()
            .is_some_and(|step| step.kind() != StepKind::SolutionFound)
        {
            assert!(playback.next_step().is_some());
        }
    }

    // Tests a new playback starts paused on the first step
    // Verified by starting in the playing state
    #[test]
    fn test_initial_state() {
        let steps = trace(4);
        let playback = Playback::new(&steps);

        assert_eq!(playback.index(), 0);
        assert!(!playback.is_playing());
        assert!(!playback.is_finished());
        assert_eq!(playback.delay(), Duration::from_millis(500));
        assert_eq!(playback.status(), "Paused. Use controls to navigate.");
        assert_eq!(
            playback.progress(),
            Progress {
                current: 1,
                total: 140
            }
        );
    }

    // Tests stepping forward and stopping on the terminal step
    // Verified by wrapping around to the first step
    #[test]
    fn test_next_step_until_finished() {
        let steps = trace(2);
        let mut playback = Playback::new(&steps);

        let mut advanced = 0;
        while playback.next_step().is_some() {
            advanced += 1;
        }

        assert_eq!(advanced, 15);
        assert_eq!(playback.index(), 15);
        assert!(playback.is_finished());
        assert_eq!(playback.status(), "Visualization finished.");
        assert!(playback.next_step().is_none());
        assert_eq!(playback.index(), 15);
    }

    // Tests play and pause toggling and the end of playback
    // Verified by allowing play after the terminal step
    #[test]
    fn test_toggle_play() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);

        assert!(playback.toggle_play());
        assert_eq!(playback.status(), "Playing...");
        assert!(!playback.toggle_play());
        assert!(playback.toggle_play());

        let advanced = playback.tick(Duration::from_secs(3600));
        assert_eq!(advanced, 139);
        assert!(playback.is_finished());
        assert!(!playback.is_playing());
        assert!(!playback.toggle_play());
    }

    // Tests elapsed time is accumulated across ticks
    // Verified by discarding time shorter than one delay
    #[test]
    fn test_tick_accumulates_time() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);

        assert_eq!(playback.tick(Duration::from_secs(10)), 0);

        playback.toggle_play();
        assert_eq!(playback.tick(Duration::from_millis(499)), 0);
        assert_eq!(playback.tick(Duration::from_millis(1)), 1);
        assert_eq!(playback.tick(Duration::from_millis(1250)), 2);
        assert_eq!(playback.tick(Duration::from_millis(250)), 1);
        assert_eq!(playback.index(), 4);
    }

    // Tests the slider maps inversely onto the delay
    // Verified by using the slider value as the delay
    #[test]
    fn test_set_speed() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);

        assert_eq!(playback.set_speed(500), Duration::from_millis(1600));
        assert_eq!(playback.set_speed(2000), Duration::from_millis(100));
        assert_eq!(playback.set_speed(50), Duration::from_millis(2000));
        assert_eq!(playback.set_speed(9999), Duration::from_millis(100));
        assert_eq!(playback.set_speed(1550), Duration::from_millis(600));
        assert_eq!(playback.delay(), Duration::from_millis(600));
    }

    // Tests a zero delay is raised to one millisecond
    // Verified by looping forever on a zero delay
    #[test]
    fn test_set_delay_minimum() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);
        playback.set_delay(Duration::ZERO);
        assert_eq!(playback.delay(), Duration::from_millis(1));
    }

    // Tests an empty trace cannot be played
    // Verified by indexing into the empty trace
    #[test]
    fn test_empty_trace() {
        let mut playback = Playback::new(&[]);

        assert!(playback.current().is_none());
        assert!(!playback.toggle_play());
        assert!(playback.next_step().is_none());
        assert!(!playback.is_finished());
        assert_eq!(playback.status(), "No steps to play.");
        assert_eq!(playback.progress(), Progress { current: 0, total: 0 });
        assert!(playback.progress().percent().abs() < f64::EPSILON);
        assert_eq!(playback.display_message(), "");
    }

    // Tests only solutions already reached can be viewed
    // Verified by collecting solutions from the whole trace
    #[test]
    fn test_view_undiscovered_solution() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);

        assert!(playback.discovered_solutions().is_empty());
        assert!(matches!(
            playback.view_solution(1),
            Err(QueensError::InvalidParameter {
                parameter: "solution",
                ..
            })
        ));
        assert_eq!(playback.viewing(), None);
    }

    // Tests viewing a solution pauses the trace until resumed
    // Verified by advancing steps while a solution is viewed
    #[test]
    fn test_view_and_resume() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);
        advance_to_first_solution(&mut playback);
        let index = playback.index();
        playback.toggle_play();

        let viewed = playback.view_solution(1).map(Clone::clone);
        let expected = playback.discovered_solutions().first().map(|s| s.board.clone());
        assert_eq!(viewed.ok(), expected);
        assert!(playback.view_solution(2).is_err());

        assert!(!playback.is_playing());
        assert!(playback.current().is_none());
        assert!(playback.next_step().is_none());
        assert!(!playback.toggle_play());
        assert_eq!(playback.tick(Duration::from_secs(60)), 0);
        assert_eq!(
            playback.status(),
            "Viewing solution #1. Resume to return to the search."
        );
        assert_eq!(playback.display_message(), "Displaying solution #1.");
        assert_eq!(playback.progress(), Progress { current: 1, total: 1 });
        assert!(playback.displayed_board().is_some_and(|board| board.queen_count() == 4));

        playback.resume();
        assert_eq!(playback.viewing(), None);
        assert_eq!(playback.index(), index);
        assert!(!playback.is_playing());
        assert_eq!(
            playback.current().map(Step::kind),
            Some(StepKind::SolutionFound)
        );
    }

    // Tests the shown message uses board notation
    // Verified by showing the raw solver message
    #[test]
    fn test_display_message_relabels() {
        let steps = trace(4);
        let mut playback = Playback::new(&steps);
        playback.next_step();

        assert_eq!(
            playback.current().map(Step::message),
            Some("Attempting to place queen at (A1).")
        );
        assert_eq!(
            playback.display_message(),
            "Attempting to place queen at (A4)."
        );
    }

    // Tests progress percentages
    // Verified by using the zero-based index
    #[test]
    fn test_progress_percent() {
        let progress = Progress {
            current: 35,
            total: 140,
        };
        assert!((progress.percent() - 25.0).abs() < 1e-9);
    }
}
