use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content::icons::{Icon, IconId};

pub const DEFAULT_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(title: String, description: Option<String>, variant: ToastVariant) -> Self {
        Self {
            title,
            description,
            variant,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// Visible toasts, oldest first. Every toast expires and is dismissed on its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    /// Removes the toast if it is still showing. Expiry timers of toasts that
    /// were already dismissed by hand land here as no-ops.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|entry| entry.id).collect()
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.push(toast);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Handed down through context so any component can raise a toast.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub push: Callback<Toast>,
}

#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| ToastContext {
        push: Callback::from(|toast: Toast| log::warn!("No toaster mounted, dropping toast: {}", toast.title)),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub entries: Vec<ToastEntry>,
    pub on_dismiss: Callback<u32>,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" role="region" aria-live="polite">
            {
                props.entries.iter().map(|entry| html! {
                    <ToastItem key={entry.id} entry={entry.clone()} on_dismiss={props.on_dismiss.clone()} />
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_dismiss: Callback<u32>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let id = props.entry.id;
    let duration = props.entry.toast.duration_ms;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration, move || on_dismiss.emit(id));
                // dropping the handle on unmount cancels the expiry
                move || drop(timeout)
            },
            id,
        );
    }
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    let variant_class = match props.entry.toast.variant {
        ToastVariant::Default => "toast-default",
        ToastVariant::Success => "toast-success",
        ToastVariant::Destructive => "toast-destructive",
    };
    html! {
        <div class={classes!("toast", variant_class)} role="status">
            <div class="toast-body">
                <div class="toast-title">{ &props.entry.toast.title }</div>
                if let Some(description) = &props.entry.toast.description {
                    <div class="toast-description">{ description }</div>
                }
            </div>
            <button class="toast-close" aria-label="Dismiss" onclick={onclick}>
                <Icon icon={IconId::Close} />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(title: &str) -> Toast {
        Toast::new(title.to_string(), None, ToastVariant::Default)
    }

    #[test]
    fn toasts_stack_and_dismiss_independently() {
        let mut queue = ToastQueue::default();
        let first = queue.push(toast("one"));
        let second = queue.push(toast("two").with_duration(4_000));
        let third = queue.push(toast("three"));
        assert_eq!(queue.ids(), vec![first, second, third]);

        assert!(queue.dismiss(second));
        assert_eq!(queue.ids(), vec![first, third]);
        // the expiry timer of a dismissed toast firing later changes nothing
        assert!(!queue.dismiss(second));
        assert_eq!(queue.entries().len(), 2);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let first = queue.push(toast("one"));
        queue.dismiss(first);
        let second = queue.push(toast("two"));
        assert_ne!(first, second);
    }

    #[test]
    fn reducer_keeps_state_on_stale_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(toast("hello")));
        assert_eq!(queue.entries()[0].toast.duration_ms, DEFAULT_DURATION_MS);
        let same = queue.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&queue, &same));
        let empty = queue.reduce(ToastAction::Dismiss(0));
        assert!(empty.entries().is_empty());
    }
}
