use iced::{Point, Subscription, event, mouse, touch, window};

/// Capability to attach and detach a window-wide pointer listener.
///
/// The controller only talks to the environment through this trait, so
/// the open/close logic can be exercised with a fake host.
pub trait ListenerHost {
    /// Token identifying one attached listener.
    type Handle;

    /// Start delivering pointer presses.
    fn attach(&mut self) -> Self::Handle;

    /// Stop delivering pointer presses for the given listener.
    fn detach(&mut self, handle: Self::Handle);
}

/// Identifier of a listener attached to a [`SubscriptionHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Listener host backed by an iced subscription.
///
/// The subscription returned by [`SubscriptionHost::subscription`] is only
/// live while a listener is attached; otherwise it is
/// [`Subscription::none`], so the runtime drops the event stream.
#[derive(Debug, Default)]
pub struct SubscriptionHost {
    next_id: u64,
    attached: Option<u64>,
}

impl SubscriptionHost {
    /// Return whether a listener is currently attached.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Pointer press stream for the attached listener.
    pub fn subscription(&self) -> Subscription<PointerPress> {
        if self.is_attached() {
            event::listen_with(pointer_press)
        } else {
            Subscription::none()
        }
    }
}

impl ListenerHost for SubscriptionHost {
    type Handle = ListenerId;

    fn attach(&mut self) -> ListenerId {
        self.next_id = self.next_id.wrapping_add(1);
        self.attached = Some(self.next_id);
        ListenerId(self.next_id)
    }

    fn detach(&mut self, handle: ListenerId) {
        if self.attached == Some(handle.0) {
            self.attached = None;
        }
    }
}

/// Pointer press delivered by the window-wide listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPress {
    /// A mouse button went down at the current cursor position.
    Mouse,
    /// A finger touched the screen at the given position.
    Touch(Point),
}

impl PointerPress {
    /// Resolve the press position, using `cursor` for mouse presses.
    pub fn position(self, cursor: Option<Point>) -> Option<Point> {
        match self {
            PointerPress::Mouse => cursor,
            PointerPress::Touch(position) => Some(position),
        }
    }
}

fn pointer_press(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<PointerPress> {
    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(PointerPress::Mouse)
        },
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerPress::Touch(position))
        },
        _ => None,
    }
}
