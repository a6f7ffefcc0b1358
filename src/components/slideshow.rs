use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::scroll;

/// Milliseconds between automatic slide advances.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Slide/indicator bookkeeping. Exactly one slide is active at a time and
/// the active index is always in bounds; a deck of length zero ignores every
/// operation.
#[derive(Clone, PartialEq, Debug)]
pub struct SlideDeck {
    current: usize,
    len: usize,
}

pub enum SlideAction {
    Next,
    Previous,
    GoTo(usize),
}

impl SlideDeck {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump directly to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

impl Reducible for SlideDeck {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: SlideAction) -> Rc<Self> {
        let mut deck = (*self).clone();
        match action {
            SlideAction::Next => deck.next(),
            SlideAction::Previous => deck.previous(),
            SlideAction::GoTo(index) => deck.go_to(index),
        }
        Rc::new(deck)
    }
}

#[derive(Clone, PartialEq)]
pub struct SlideItem {
    pub heading: &'static str,
    pub caption: &'static str,
    /// CSS background for the panel.
    pub backdrop: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroSlideshowProps {
    pub slides: Vec<SlideItem>,
}

fn start_autoplay(
    handle: &Rc<RefCell<Option<Interval>>>,
    dispatcher: UseReducerDispatcher<SlideDeck>,
) {
    // Replacing the previous handle drops it, so at most one interval is
    // ever live per slideshow instance.
    let interval = Interval::new(AUTOPLAY_INTERVAL_MS, move || {
        dispatcher.dispatch(SlideAction::Next);
    });
    *handle.borrow_mut() = Some(interval);
}

/// Hero slideshow: auto-advancing panels with indicators and prev/next
/// controls. Autoplay pauses while the pointer is over the slideshow and
/// resumes on exit. The whole hero is shifted against the scroll offset for
/// the parallax effect.
#[function_component(HeroSlideshow)]
pub fn hero_slideshow(props: &HeroSlideshowProps) -> Html {
    let deck = use_reducer(|| SlideDeck::new(props.slides.len()));
    let autoplay = use_mut_ref(|| None::<Interval>);
    let parallax = use_state(|| 0.0_f64);

    {
        let autoplay = autoplay.clone();
        let dispatcher = deck.dispatcher();
        let enabled = !props.slides.is_empty();
        use_effect_with_deps(
            move |_| {
                if enabled {
                    start_autoplay(&autoplay, dispatcher);
                }
                move || {
                    autoplay.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Scroll listener for the parallax offset.
    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let parallax = parallax.clone();
                        move || {
                            parallax.set(scroll::scroll_y() * -0.5);
                        }
                    });
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }),
                        Err(_) => {
                            log::warn!("failed to attach parallax scroll listener");
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    if props.slides.is_empty() {
        return html! {};
    }

    let onmouseenter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            // Idempotent: taking an already-empty handle is a no-op.
            autoplay.borrow_mut().take();
        })
    };
    let onmouseleave = {
        let autoplay = autoplay.clone();
        let dispatcher = deck.dispatcher();
        Callback::from(move |_: MouseEvent| {
            start_autoplay(&autoplay, dispatcher.clone());
        })
    };
    let on_prev = {
        let dispatcher = deck.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Previous))
    };
    let on_next = {
        let dispatcher = deck.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Next))
    };

    let hero_style = format!("transform: translateY({:.1}px);", *parallax);

    html! {
        <div class="hero-slideshow" style={hero_style} {onmouseenter} {onmouseleave}>
            <style>{SLIDESHOW_CSS}</style>
            { for props.slides.iter().enumerate().map(|(index, slide)| {
                html! {
                    <div
                        class={classes!("slide", (index == deck.active()).then_some("active"))}
                        style={format!("background: {};", slide.backdrop)}
                    >
                        <div class="slide-content">
                            <h2>{slide.heading}</h2>
                            <p>{slide.caption}</p>
                        </div>
                    </div>
                }
            })}
            <button class="prev-btn" onclick={on_prev} aria-label="Previous slide">
                <i class="fas fa-chevron-left"></i>
            </button>
            <button class="next-btn" onclick={on_next} aria-label="Next slide">
                <i class="fas fa-chevron-right"></i>
            </button>
            <div class="slide-indicators">
                { for (0..props.slides.len()).map(|index| {
                    let on_go = {
                        let dispatcher = deck.dispatcher();
                        Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(SlideAction::GoTo(index));
                        })
                    };
                    html! {
                        <button
                            class={classes!("indicator", (index == deck.active()).then_some("active"))}
                            onclick={on_go}
                            aria-label={format!("Go to slide {}", index + 1)}
                        />
                    }
                })}
            </div>
        </div>
    }
}

const SLIDESHOW_CSS: &str = r#"
    .hero-slideshow {
        position: relative;
        height: 70vh;
        min-height: 420px;
        overflow: hidden;
    }
    .slide {
        position: absolute;
        inset: 0;
        opacity: 0;
        transition: opacity 0.8s ease;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .slide.active {
        opacity: 1;
    }
    .slide-content h2 {
        font-size: 2.6rem;
        margin-bottom: 0.5rem;
    }
    .slide-content p {
        font-size: 1.2rem;
        color: #cfd8e3;
        max-width: 540px;
        margin: 0 auto;
    }
    .prev-btn, .next-btn {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: rgba(15, 20, 32, 0.55);
        color: #eee;
        border: none;
        border-radius: 50%;
        width: 44px;
        height: 44px;
        cursor: pointer;
    }
    .prev-btn { left: 1rem; }
    .next-btn { right: 1rem; }
    .slide-indicators {
        position: absolute;
        bottom: 1.2rem;
        left: 0;
        right: 0;
        display: flex;
        justify-content: center;
        gap: 0.5rem;
    }
    .indicator {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.35);
        cursor: pointer;
        padding: 0;
    }
    .indicator.active {
        background: #7eb2ff;
    }
"#;

#[cfg(test)]
mod tests {
    use super::SlideDeck;

    #[test]
    fn next_wraps_around_after_full_cycle() {
        let mut deck = SlideDeck::new(4);
        for _ in 0..4 {
            deck.next();
        }
        assert_eq!(deck.active(), 0);
    }

    #[test]
    fn autoplay_ticks_land_where_expected() {
        let mut deck = SlideDeck::new(4);
        for _ in 0..3 {
            deck.next();
        }
        assert_eq!(deck.active(), 3);
        deck.next();
        assert_eq!(deck.active(), 0);
    }

    #[test]
    fn previous_then_next_is_identity() {
        for len in 1..=5 {
            let mut deck = SlideDeck::new(len);
            deck.go_to(len / 2);
            let before = deck.active();
            deck.previous();
            deck.next();
            assert_eq!(deck.active(), before);
        }
    }

    #[test]
    fn previous_wraps_from_first_slide() {
        let mut deck = SlideDeck::new(3);
        deck.previous();
        assert_eq!(deck.active(), 2);
    }

    #[test]
    fn go_to_moves_exactly_to_target() {
        let mut deck = SlideDeck::new(5);
        for index in 0..5 {
            deck.go_to(index);
            assert_eq!(deck.active(), index);
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut deck = SlideDeck::new(3);
        deck.go_to(1);
        deck.go_to(7);
        assert_eq!(deck.active(), 1);
    }

    #[test]
    fn empty_deck_ignores_everything() {
        let mut deck = SlideDeck::new(0);
        assert!(deck.is_empty());
        deck.next();
        deck.previous();
        deck.go_to(0);
        assert_eq!(deck.active(), 0);
    }

    #[test]
    fn single_slide_stays_active() {
        let mut deck = SlideDeck::new(1);
        deck.next();
        deck.previous();
        assert_eq!(deck.active(), 0);
        assert_eq!(deck.len(), 1);
    }
}
