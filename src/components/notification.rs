use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Milliseconds a flash message stays on screen unless dismissed earlier.
pub const FLASH_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FlashMessage {
    pub id: u32,
    pub severity: Severity,
    pub text: String,
}

/// Ordered set of live flash messages with unique ids.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FlashQueue {
    next_id: u32,
    messages: Vec<FlashMessage>,
}

impl FlashQueue {
    pub fn push(&mut self, severity: Severity, text: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(FlashMessage {
            id,
            severity,
            text: text.into(),
        });
        id
    }

    /// Remove the message with `id`; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u32) {
        self.messages.retain(|message| message.id != id);
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub enum FlashAction {
    Push(Severity, String),
    Dismiss(u32),
}

impl Reducible for FlashQueue {
    type Action = FlashAction;

    fn reduce(self: Rc<Self>, action: FlashAction) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            FlashAction::Push(severity, text) => {
                queue.push(severity, text);
            }
            FlashAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

#[derive(Properties, PartialEq)]
struct FlashItemProps {
    message: FlashMessage,
    on_dismiss: Callback<u32>,
}

#[function_component(FlashItem)]
fn flash_item(props: &FlashItemProps) -> Html {
    // Auto-dismiss after the fixed timeout; dropping the handle on unmount
    // cancels it, so a manually dismissed message cannot fire twice.
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.message.id;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(FLASH_TIMEOUT_MS, move || {
                    on_dismiss.emit(id);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.message.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("flash-message", props.message.severity.css_class())}>
            <span>{&props.message.text}</span>
            <button class="flash-close" {onclick} aria-label="Dismiss">{"\u{d7}"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashStackProps {
    pub messages: Vec<FlashMessage>,
    pub on_dismiss: Callback<u32>,
}

/// Stacked transient notifications. Renders nothing while there is nothing
/// to show.
#[function_component(FlashStack)]
pub fn flash_stack(props: &FlashStackProps) -> Html {
    if props.messages.is_empty() {
        return html! {};
    }

    html! {
        <div class="flash-messages">
            <style>{FLASH_CSS}</style>
            { for props.messages.iter().map(|message| {
                html! {
                    <FlashItem
                        key={message.id}
                        message={message.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                }
            })}
        </div>
    }
}

const FLASH_CSS: &str = r#"
    .flash-messages {
        position: fixed;
        top: 1.2rem;
        right: 1.2rem;
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
        z-index: 1000;
    }
    .flash-message {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 0.8rem 1rem;
        border-radius: 8px;
        color: #fff;
        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.35);
    }
    .flash-message.error { background: #ef4444; }
    .flash-message.success { background: #22c55e; }
    .flash-close {
        background: none;
        border: none;
        color: inherit;
        font-size: 1.1rem;
        cursor: pointer;
        padding: 0;
    }
"#;

#[cfg(test)]
mod tests {
    use super::{FlashQueue, Severity};

    #[test]
    fn push_adds_exactly_one_message() {
        let mut queue = FlashQueue::default();
        queue.push(Severity::Error, "Please fill in all required fields.");
        assert_eq!(queue.messages().len(), 1);
        assert_eq!(queue.messages()[0].severity, Severity::Error);
    }

    #[test]
    fn ids_are_unique_across_pushes() {
        let mut queue = FlashQueue::default();
        let first = queue.push(Severity::Success, "a");
        queue.dismiss(first);
        let second = queue.push(Severity::Success, "b");
        assert_ne!(first, second);
    }

    #[test]
    fn dismiss_removes_only_the_targeted_message() {
        let mut queue = FlashQueue::default();
        let first = queue.push(Severity::Error, "a");
        let second = queue.push(Severity::Success, "b");
        queue.dismiss(first);
        assert_eq!(queue.messages().len(), 1);
        assert_eq!(queue.messages()[0].id, second);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let mut queue = FlashQueue::default();
        queue.push(Severity::Error, "a");
        queue.dismiss(99);
        assert_eq!(queue.messages().len(), 1);
    }

    #[test]
    fn severity_maps_to_styling_class() {
        assert_eq!(Severity::Error.css_class(), "error");
        assert_eq!(Severity::Success.css_class(), "success");
    }

    #[test]
    fn empty_queue_reports_empty() {
        let mut queue = FlashQueue::default();
        assert!(queue.is_empty());
        let id = queue.push(Severity::Success, "a");
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
