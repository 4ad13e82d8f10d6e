use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::now;
use crate::motion::{BrowserFrames, RevealConfig, RevealController, RevealPhase, RevealRun};

/// Inline styles for `count` children that reveal once `trigger` is true.
///
/// The controller is latched: later changes of `trigger` do not restart or
/// reverse the sequence. The transitions are applied on the frame after the
/// trigger, so a group triggered at mount still animates from its `from`
/// style.
#[hook]
pub fn use_reveal(count: usize, config: RevealConfig, trigger: bool) -> Vec<String> {
    let phase = use_state_eq(|| RevealPhase::Hidden);
    let run = {
        let phase = phase.clone();
        use_mut_ref(move || {
            RevealRun::new(
                RevealController::new(count, config),
                BrowserFrames,
                move |next| phase.set(next),
            )
        })
    };

    {
        let run = run.clone();
        use_effect_with_deps(
            move |trigger| {
                if *trigger {
                    run.borrow().arm(now());
                }
                || ()
            },
            trigger,
        );
    }

    {
        let run = run.clone();
        use_effect_with_deps(
            move |phase| {
                let settle_timer = (*phase == RevealPhase::Entering).then(|| {
                    let total = run.borrow().total_ms();
                    Timeout::new(total.ceil() as u32, move || {
                        run.borrow().settle(now());
                    })
                });
                move || drop(settle_timer)
            },
            *phase,
        );
    }

    {
        let run = run.clone();
        use_effect_with_deps(move |_| move || run.borrow().dispose(), ());
    }

    let styles = run.borrow().styles();
    styles
}
