use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

const CARS_PROTECTED_START: u32 = 500;
const CARS_PROTECTED_CAP: u32 = 520;
const SUCCESS_RATE_START: f64 = 99.8;
const SUCCESS_RATE_VARIATIONS: [f64; 3] = [99.8, 99.9, 100.0];

/// Ratings and percentages keep one decimal, everything else is a whole count.
pub fn format_counter(target: f64, value: f64) -> String {
    if (target - 4.9).abs() < f64::EPSILON || target >= 99.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value.floor() as u64)
    }
}

/// Value shown after `tick` increments, and whether the animation is done.
pub fn counter_frame(target: f64, tick: u32) -> (f64, bool) {
    let value = target / config::COUNTER_STEPS as f64 * tick as f64;
    if tick >= config::COUNTER_STEPS || value >= target {
        (target, true)
    } else {
        (value, false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveStats {
    pub cars_protected: u32,
    pub success_rate: f64,
}

impl Default for LiveStats {
    fn default() -> Self {
        Self {
            cars_protected: CARS_PROTECTED_START,
            success_rate: SUCCESS_RATE_START,
        }
    }
}

/// Three uniform rolls in `[0, 1)` driving one live-stats update.
pub struct StatsRoll {
    pub cars: f64,
    pub rate: f64,
    pub pick: f64,
}

impl StatsRoll {
    fn random() -> Self {
        Self { cars: Math::random(), rate: Math::random(), pick: Math::random() }
    }
}

impl LiveStats {
    pub fn roll(self, roll: StatsRoll) -> Self {
        let mut next = self;
        // 30% chance of another car
        if roll.cars > 0.7 && next.cars_protected < CARS_PROTECTED_CAP {
            next.cars_protected += 1;
        }
        // 20% chance the success rate wobbles
        if roll.rate > 0.8 {
            let index = ((roll.pick * SUCCESS_RATE_VARIATIONS.len() as f64) as usize)
                .min(SUCCESS_RATE_VARIATIONS.len() - 1);
            next.success_rate = SUCCESS_RATE_VARIATIONS[index];
        }
        next
    }
}

impl Reducible for LiveStats {
    type Action = StatsRoll;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.roll(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: f64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let started = use_state(|| false);
    let tick = use_state(|| 0u32);
    let (_, scroll_y) = use_window_scroll();

    // Start the first time at least half of the counter is on screen
    {
        let started = started.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if !*started && dom::is_in_viewport(&node, 0.5) {
                    started.set(true);
                }
                || ()
            },
            scroll_y,
        );
    }

    {
        let tick_handle = tick.clone();
        use_effect_with_deps(
            move |(started, current): &(bool, u32)| {
                let timeout = (*started && *current < config::COUNTER_STEPS).then(|| {
                    let next = *current + 1;
                    Timeout::new(config::COUNTER_TICK_MS, move || tick_handle.set(next))
                });
                move || drop(timeout)
            },
            (*started, *tick),
        );
    }

    let (value, done) = counter_frame(props.target, *tick);

    html! {
        <div class="stat-card glass-card">
            <div ref={node} class={classes!("counter", done.then(|| "animated"))}>
                {format_counter(props.target, value)}{props.suffix.clone()}
            </div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    let stats = use_reducer(LiveStats::default);

    {
        let stats = stats.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::LIVE_STATS_INTERVAL_MS, move || {
                    stats.dispatch(StatsRoll::random());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="live-stats">
            <AnimatedCounter target={stats.cars_protected as f64} suffix="+" label="Cars Protected" />
            <AnimatedCounter target={stats.success_rate} suffix="%" label="Success Rate" />
            <AnimatedCounter target={4.9} label="Google Rating" />
            <AnimatedCounter target={8.0} suffix="+" label="Years Experience" />
            <style>
                {r#"
                .live-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 16px;
                    max-width: 1000px;
                    margin: -60px auto 0;
                    padding: 0 20px;
                    position: relative;
                    z-index: 2;
                }
                .stat-card {
                    text-align: center;
                    padding: 24px 12px;
                    border-radius: 16px;
                    background: rgba(0, 0, 0, 0.7);
                    border: 1px solid rgba(31, 184, 205, 0.3);
                }
                .counter {
                    font-size: 2.4rem;
                    font-weight: 800;
                    color: #1fb8cd;
                }
                .counter.animated {
                    animation: counterUpdate 0.8s ease;
                }
                @keyframes counterUpdate {
                    0% { transform: scale(1); }
                    50% { transform: scale(1.1); }
                    100% { transform: scale(1); }
                }
                .stat-label {
                    color: #e0f8ff;
                    font-weight: 600;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_by_target() {
        assert_eq!(format_counter(4.9, 2.46), "2.5");
        assert_eq!(format_counter(99.8, 99.8), "99.8");
        assert_eq!(format_counter(100.0, 100.0), "100.0");
        assert_eq!(format_counter(500.0, 123.9), "123");
    }

    #[test]
    fn frames_reach_target_exactly() {
        assert_eq!(counter_frame(500.0, 0), (0.0, false));
        assert_eq!(counter_frame(500.0, 50), (250.0, false));
        assert_eq!(counter_frame(4.9, 100), (4.9, true));
        assert_eq!(counter_frame(500.0, 250), (500.0, true));
    }

    #[test]
    fn cars_increment_on_lucky_roll_until_cap() {
        let stats = LiveStats::default();
        let lucky = || StatsRoll { cars: 0.9, rate: 0.0, pick: 0.0 };
        assert_eq!(stats.roll(lucky()).cars_protected, 501);
        assert_eq!(stats.roll(StatsRoll { cars: 0.5, rate: 0.0, pick: 0.0 }).cars_protected, 500);

        let capped = LiveStats { cars_protected: 520, ..stats };
        assert_eq!(capped.roll(lucky()).cars_protected, 520);
    }

    #[test]
    fn success_rate_picks_from_variations() {
        let stats = LiveStats::default();
        assert_eq!(stats.roll(StatsRoll { cars: 0.0, rate: 0.9, pick: 0.99 }).success_rate, 100.0);
        assert_eq!(stats.roll(StatsRoll { cars: 0.0, rate: 0.9, pick: 0.4 }).success_rate, 99.9);
        assert_eq!(stats.roll(StatsRoll { cars: 0.0, rate: 0.5, pick: 0.99 }).success_rate, 99.8);
    }
}
