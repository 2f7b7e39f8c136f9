use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn display_ms(self) -> u32 {
        match self {
            NoticeKind::Success => config::SUCCESS_NOTICE_MS,
            NoticeKind::Error | NoticeKind::Info => config::DEFAULT_NOTICE_MS,
        }
    }

    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notification--success",
            NoticeKind::Error => "notification--error",
            NoticeKind::Info => "notification--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Info }
    }
}

/// Handed down through context so any widget can raise a notification.
#[derive(Clone, PartialEq)]
pub struct Notifier(pub Callback<Notice>);

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        self.0.emit(notice);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
}

pub enum NotifierAction {
    Show(Notice),
    // Both the auto-dismiss timer and the close button send this
    Dismiss(u64),
}

/// Single-slot notification queue: a new notice replaces whatever is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotifierState {
    next_id: u64,
    pub current: Option<ActiveNotice>,
}

impl NotifierState {
    pub fn apply(&mut self, action: NotifierAction) {
        match action {
            NotifierAction::Show(notice) => {
                self.next_id += 1;
                self.current = Some(ActiveNotice { id: self.next_id, notice });
            }
            NotifierAction::Dismiss(id) => {
                if self.current.as_ref().map(|c| c.id) == Some(id) {
                    self.current = None;
                }
            }
        }
    }
}

impl Reducible for NotifierState {
    type Action = NotifierAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub current: Option<ActiveNotice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |current: &Option<ActiveNotice>| {
                let timeout = current.as_ref().map(|active| {
                    let id = active.id;
                    Timeout::new(active.notice.kind.display_ms(), move || on_dismiss.emit(id))
                });
                // Dropping the timeout cancels it
                move || drop(timeout)
            },
            props.current.clone(),
        );
    }

    let Some(active) = props.current.clone() else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = active.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(id);
        })
    };

    html! {
        <div key={active.id} class={classes!("notification", active.notice.kind.class())}>
            <span class="notification-message">{&active.notice.message}</span>
            <button class="notification-close" onclick={close}>{"×"}</button>
            <style>
                {r#"
                    @keyframes notificationSlideIn {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        max-width: 400px;
                        padding: 16px 44px 16px 20px;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(10px);
                        border-radius: 12px;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.5);
                        font-weight: 600;
                        font-size: 14px;
                        line-height: 1.4;
                        z-index: 10000;
                        animation: notificationSlideIn 0.3s ease forwards;
                    }
                    .notification--success {
                        border: 2px solid rgba(34, 197, 94, 0.5);
                        color: #86efac;
                    }
                    .notification--error {
                        border: 2px solid rgba(239, 68, 68, 0.5);
                        color: #fca5a5;
                    }
                    .notification--info {
                        border: 2px solid rgba(59, 130, 246, 0.5);
                        color: #93c5fd;
                    }
                    .notification-close {
                        position: absolute;
                        top: 8px;
                        right: 12px;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 20px;
                        font-weight: 700;
                        cursor: pointer;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_lingers_longer() {
        assert_eq!(NoticeKind::Success.display_ms(), 8000);
        assert_eq!(NoticeKind::Error.display_ms(), 5000);
        assert_eq!(NoticeKind::Info.display_ms(), 5000);
    }

    #[test]
    fn new_notice_replaces_current() {
        let mut state = NotifierState::default();
        state.apply(NotifierAction::Show(Notice::info("first")));
        state.apply(NotifierAction::Show(Notice::error("second")));

        let current = state.current.clone().unwrap();
        assert_eq!(current.id, 2);
        assert_eq!(current.notice, Notice::error("second"));
    }

    #[test]
    fn stale_dismiss_leaves_replacement_visible() {
        let mut state = NotifierState::default();
        state.apply(NotifierAction::Show(Notice::info("first")));
        state.apply(NotifierAction::Show(Notice::success("second")));
        state.apply(NotifierAction::Dismiss(1));

        assert_eq!(state.current.map(|c| c.notice.message), Some("second".to_string()));
    }

    #[test]
    fn early_dismiss_clears() {
        let mut state = NotifierState::default();
        state.apply(NotifierAction::Show(Notice::success("done")));
        state.apply(NotifierAction::Dismiss(1));
        assert!(state.current.is_none());

        // the timer firing afterwards is harmless
        state.apply(NotifierAction::Dismiss(1));
        assert!(state.current.is_none());
    }
}
