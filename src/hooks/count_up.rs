use yew::prelude::*;

use crate::motion::{BrowserFrames, CountUpRun};

/// Counts from 0 to `target` on animation frames, once `trigger` is true.
#[hook]
pub fn use_count_up(target: u64, duration_ms: u32, trigger: bool) -> u64 {
    let count = use_state_eq(|| 0u64);
    let run = use_mut_ref(|| None::<CountUpRun<BrowserFrames>>);

    {
        let count = count.clone();
        let run = run.clone();
        use_effect_with_deps(
            move |trigger| {
                if *trigger && run.borrow().is_none() {
                    let setter = count.setter();
                    let counter = CountUpRun::new(BrowserFrames, move |value| setter.set(value));
                    counter.start(target, duration_ms);
                    *run.borrow_mut() = Some(counter);
                }
                || ()
            },
            trigger,
        );
    }

    {
        let run = run.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(counter) = run.borrow_mut().take() {
                        counter.dispose();
                    }
                }
            },
            (),
        );
    }

    *count
}
