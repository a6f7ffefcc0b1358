use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::utils::visibility;

pub const COUNT_DURATION_MS: u32 = 2_000;
pub const COUNT_TICK_MS: u32 = 16;

/// Stepping state for an animated counter. The displayed value climbs from
/// zero in fixed steps of `target / (duration / tick)` and is clamped so it
/// lands exactly on the target, never past it.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    current: f64,
    step: f64,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        let step = target as f64 / (COUNT_DURATION_MS as f64 / COUNT_TICK_MS as f64);
        Self {
            target,
            current: 0.0,
            step,
        }
    }

    /// Advance one tick. Returns true once the target has been reached.
    pub fn tick(&mut self) -> bool {
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            true
        } else {
            false
        }
    }

    pub fn displayed(&self) -> u32 {
        self.current.floor() as u32
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: String,
    #[prop_or_default]
    pub suffix: String,
}

/// Stat tile whose number counts up from zero the first time at least half
/// of the tile scrolls into view. The animation runs once per mount.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let displayed = use_state(|| 0_u32);

    {
        let node = node.clone();
        let displayed = displayed.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let guard = node.cast::<Element>().and_then(|element| {
                    visibility::observe_once(&element, 0.5, "0px 0px -100px 0px", move || {
                        let displayed = displayed.clone();
                        spawn_local(async move {
                            let mut count = CountUp::new(target);
                            loop {
                                TimeoutFuture::new(COUNT_TICK_MS).await;
                                let done = count.tick();
                                displayed.set(count.displayed());
                                if done {
                                    break;
                                }
                            }
                        });
                    })
                });
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div ref={node} class="stat-item">
            <span class="stat-number">{*displayed}{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{CountUp, COUNT_DURATION_MS, COUNT_TICK_MS};

    fn run_to_completion(target: u32) -> (Vec<u32>, usize) {
        let mut count = CountUp::new(target);
        let mut seen = Vec::new();
        let mut ticks = 0;
        loop {
            let done = count.tick();
            seen.push(count.displayed());
            ticks += 1;
            assert!(ticks <= 10_000, "counter never finished");
            if done {
                break;
            }
        }
        (seen, ticks)
    }

    #[test]
    fn lands_exactly_on_target() {
        let (seen, _) = run_to_completion(250);
        assert_eq!(*seen.last().unwrap(), 250);
    }

    #[test]
    fn never_overshoots() {
        let (seen, _) = run_to_completion(250);
        assert!(seen.iter().all(|&value| value <= 250));
    }

    #[test]
    fn displayed_values_are_non_decreasing() {
        let (seen, _) = run_to_completion(997);
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn finishes_within_the_planned_tick_budget() {
        let planned = (COUNT_DURATION_MS / COUNT_TICK_MS) as usize;
        let (_, ticks) = run_to_completion(250);
        assert!(ticks <= planned);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let (seen, ticks) = run_to_completion(0);
        assert_eq!(ticks, 1);
        assert_eq!(seen, vec![0]);
    }

    #[test]
    fn small_targets_still_reach_their_value() {
        for target in [1, 2, 7] {
            let (seen, _) = run_to_completion(target);
            assert_eq!(*seen.last().unwrap(), target);
        }
    }
}
