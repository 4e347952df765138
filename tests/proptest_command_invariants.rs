//! Property tests for command and remote controller invariants.
//!
//! Validates:
//! - An on/off command's execute followed by undo restores the power state.
//! - A color change sets the target color and its undo restores the color
//!   the light had when the command was built.
//! - Random press sequences never grow history past the limit, and global
//!   undo only ever reports "nothing to undo" once history is exhausted.

use proptest::prelude::*;

use light_remote::command::{
    LightColorChangeCommand, LightOffCommand, LightOnCommand, RemoteController, UndoOutcome,
    UndoableCommand,
};
use light_remote::messaging::create_status_channel;
use light_remote::receiver::Light;

#[derive(Debug, Clone)]
enum Press {
    Execute(usize),
    UndoSlot(usize),
    UndoLast,
}

const SLOTS: [&str; 4] = ["on", "off", "blue", "unbound"];

fn press_strategy() -> impl Strategy<Value = Press> {
    prop_oneof![
        3 => (0..SLOTS.len()).prop_map(Press::Execute),
        3 => (0..SLOTS.len()).prop_map(Press::UndoSlot),
        2 => Just(Press::UndoLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn on_off_execute_then_undo_restores_power(
        initially_on in any::<bool>(),
        use_off in any::<bool>(),
    ) {
        let (feed, _rx) = create_status_channel(8);
        let light = Light::shared("L", "R", feed);
        if initially_on {
            light.borrow_mut().turn_on();
        }

        let mut cmd: Box<dyn UndoableCommand> = if use_off {
            Box::new(LightOffCommand::new(light.clone()))
        } else {
            Box::new(LightOnCommand::new(light.clone()))
        };

        cmd.execute();
        prop_assert_eq!(light.borrow().is_on(), !use_off);
        cmd.undo();
        prop_assert_eq!(light.borrow().is_on(), initially_on);
    }

    #[test]
    fn color_change_sets_target_and_undo_restores(c0 in ".{0,12}", c1 in ".{0,12}") {
        let (feed, _rx) = create_status_channel(8);
        let light = Light::shared("L", "R", feed);
        light.borrow_mut().set_color(c0.clone());

        let mut cmd = LightColorChangeCommand::new(light.clone(), c1.clone());
        cmd.execute();
        let after_execute = light.borrow().color().to_string();
        prop_assert_eq!(after_execute, c1);
        cmd.undo();
        let after_undo = light.borrow().color().to_string();
        prop_assert_eq!(after_undo, c0);
    }

    #[test]
    fn history_tracks_bound_slot_undos(
        presses in prop::collection::vec(press_strategy(), 0..60),
        limit in 1usize..8,
    ) {
        let (feed, _rx) = create_status_channel(256);
        let light = Light::shared("L", "R", feed.clone());
        let mut remote = RemoteController::with_history_limit(feed, limit);
        remote.bind("on", Box::new(LightOnCommand::new(light.clone())));
        remote.bind("off", Box::new(LightOffCommand::new(light.clone())));
        remote.bind("blue", Box::new(LightColorChangeCommand::new(light.clone(), "Blue")));

        let mut expected_len = 0usize;
        for press in presses {
            match press {
                Press::Execute(i) => {
                    prop_assert_eq!(remote.execute(SLOTS[i]), SLOTS[i] != "unbound");
                }
                Press::UndoSlot(i) => {
                    if remote.undo_slot(SLOTS[i]) {
                        expected_len = (expected_len + 1).min(limit);
                    }
                }
                Press::UndoLast => {
                    let outcome = remote.undo_last();
                    if expected_len == 0 {
                        prop_assert_eq!(outcome, UndoOutcome::NothingToUndo);
                    } else {
                        prop_assert!(
                            matches!(outcome, UndoOutcome::Undone { .. }),
                            "expected an undone entry, got {:?}",
                            outcome
                        );
                        expected_len -= 1;
                    }
                }
            }
            prop_assert_eq!(remote.undo_count(), expected_len);
            prop_assert!(remote.undo_count() <= limit);
            prop_assert!(remote.history().all(|slot| slot != "unbound"));
        }
    }
}
