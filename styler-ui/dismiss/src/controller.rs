use iced::{Point, Rectangle, Subscription};

use crate::host::{ListenerHost, PointerPress, SubscriptionHost};
use crate::region::Region;

/// Observation state of a [`DismissController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissState {
    /// No listener attached.
    Inactive,
    /// A listener is attached and presses are tested against the region.
    Active,
}

struct Observation<M, R, L> {
    region: R,
    on_close: M,
    listener: L,
}

/// Closes a panel when a pointer press lands outside of it.
///
/// While active the controller owns exactly one listener obtained from its
/// [`ListenerHost`]. The listener is released on [`deactivate`], when the
/// region disappears, and when the controller is dropped.
///
/// [`deactivate`]: DismissController::deactivate
pub struct DismissController<
    M,
    R = Rectangle,
    H: ListenerHost = SubscriptionHost,
> {
    host: H,
    observation: Option<Observation<M, R, H::Handle>>,
}

impl<M, R> DismissController<M, R, SubscriptionHost> {
    /// Create an inactive controller backed by an iced subscription.
    pub fn new() -> Self {
        Self::with_host(SubscriptionHost::default())
    }

    /// Pointer presses to feed into [`DismissController::pointer_down`].
    ///
    /// Empty while the controller is inactive.
    pub fn subscription(&self) -> Subscription<PointerPress> {
        self.host.subscription()
    }
}

impl<M, R> Default for DismissController<M, R, SubscriptionHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, R, H: ListenerHost> DismissController<M, R, H> {
    /// Create an inactive controller on top of a custom listener host.
    pub fn with_host(host: H) -> Self {
        Self {
            host,
            observation: None,
        }
    }

    /// Return the listener host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Return the current observation state.
    pub fn state(&self) -> DismissState {
        if self.observation.is_some() {
            DismissState::Active
        } else {
            DismissState::Inactive
        }
    }

    /// Return whether a listener is attached.
    pub fn is_active(&self) -> bool {
        self.observation.is_some()
    }

    /// Return the observed region while active.
    pub fn region(&self) -> Option<&R> {
        self.observation.as_ref().map(|observation| &observation.region)
    }

    /// Stop observing. Safe to call while inactive.
    pub fn deactivate(&mut self) {
        if let Some(observation) = self.observation.take() {
            self.host.detach(observation.listener);
            log::debug!("dismiss controller deactivated");
        }
    }
}

impl<M, R, H> DismissController<M, R, H>
where
    M: Clone,
    R: Region,
    H: ListenerHost,
{
    /// Start observing presses outside `region`.
    ///
    /// A missing region means the panel is not laid out yet: the controller
    /// stays (or becomes) inactive. Activating again while active keeps the
    /// attached listener and only refreshes the region and close message.
    pub fn activate(&mut self, region: Option<R>, on_close: M) {
        let Some(region) = region else {
            if self.is_active() {
                log::debug!("dismiss region detached");
            }
            self.deactivate();
            return;
        };

        if let Some(observation) = self.observation.as_mut() {
            observation.region = region;
            observation.on_close = on_close;
            return;
        }

        let listener = self.host.attach();
        self.observation = Some(Observation {
            region,
            on_close,
            listener,
        });
        log::debug!("dismiss controller activated");
    }

    /// Drive the state machine from the owner's open flag.
    pub fn sync(&mut self, is_open: bool, region: Option<R>, on_close: M) {
        if is_open {
            self.activate(region, on_close);
        } else {
            self.deactivate();
        }
    }

    /// Test a press position; returns the close message for outside presses.
    pub fn pointer_down(&self, position: Point) -> Option<M> {
        let observation = self.observation.as_ref()?;
        if observation.region.contains(position) {
            None
        } else {
            Some(observation.on_close.clone())
        }
    }
}

impl<M, R, H: ListenerHost> Drop for DismissController<M, R, H> {
    fn drop(&mut self) {
        if let Some(observation) = self.observation.take() {
            self.host.detach(observation.listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use iced::{Point, Rectangle, Size};

    use super::{DismissController, DismissState};
    use crate::host::ListenerHost;

    #[derive(Debug, Default)]
    struct Calls {
        attached: usize,
        detached: usize,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        calls: Rc<RefCell<Calls>>,
    }

    impl FakeHost {
        fn live_listeners(&self) -> usize {
            let calls = self.calls.borrow();
            calls.attached - calls.detached
        }

        fn attached(&self) -> usize {
            self.calls.borrow().attached
        }
    }

    impl ListenerHost for FakeHost {
        type Handle = usize;

        fn attach(&mut self) -> usize {
            let mut calls = self.calls.borrow_mut();
            calls.attached += 1;
            calls.attached
        }

        fn detach(&mut self, _handle: usize) {
            self.calls.borrow_mut().detached += 1;
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Close,
    }

    fn panel() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(300.0, 600.0))
    }

    fn controller(
        host: &FakeHost,
    ) -> DismissController<Message, Rectangle, FakeHost> {
        DismissController::with_host(host.clone())
    }

    #[test]
    fn given_inactive_controller_when_deactivate_then_stays_inactive() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);

        dismiss.deactivate();
        dismiss.deactivate();

        assert_eq!(dismiss.state(), DismissState::Inactive);
        assert_eq!(host.calls.borrow().detached, 0);
    }

    #[test]
    fn given_missing_region_when_activate_then_no_listener_attached() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);

        dismiss.activate(None, Message::Close);

        assert_eq!(dismiss.state(), DismissState::Inactive);
        assert_eq!(host.attached(), 0);
    }

    #[test]
    fn given_active_controller_when_activate_again_then_attaches_once() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);

        dismiss.activate(Some(panel()), Message::Close);
        dismiss.activate(Some(panel()), Message::Close);

        assert!(dismiss.is_active());
        assert_eq!(host.attached(), 1);
        assert_eq!(host.live_listeners(), 1);
    }

    #[test]
    fn given_active_controller_when_region_changes_then_region_replaced() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);
        let wider = Rectangle::new(Point::ORIGIN, Size::new(500.0, 600.0));
        dismiss.activate(Some(panel()), Message::Close);

        dismiss.activate(Some(wider), Message::Close);

        assert_eq!(dismiss.region(), Some(&wider));
        assert_eq!(host.attached(), 1);
        assert_eq!(dismiss.pointer_down(Point::new(400.0, 10.0)), None);
    }

    #[test]
    fn given_active_controller_when_region_detached_then_deactivates() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);
        dismiss.activate(Some(panel()), Message::Close);

        dismiss.activate(None, Message::Close);

        assert_eq!(dismiss.state(), DismissState::Inactive);
        assert_eq!(host.live_listeners(), 0);
    }

    #[test]
    fn given_active_controller_when_press_outside_then_emits_close() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);
        dismiss.activate(Some(panel()), Message::Close);

        let result = dismiss.pointer_down(Point::new(450.0, 100.0));

        assert_eq!(result, Some(Message::Close));
    }

    #[test]
    fn given_active_controller_when_press_inside_then_ignored() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);
        dismiss.activate(Some(panel()), Message::Close);

        let result = dismiss.pointer_down(Point::new(120.0, 240.0));

        assert_eq!(result, None);
        assert!(dismiss.is_active());
    }

    #[test]
    fn given_inactive_controller_when_press_anywhere_then_ignored() {
        let host = FakeHost::default();
        let dismiss = controller(&host);

        assert_eq!(dismiss.pointer_down(Point::new(450.0, 100.0)), None);
    }

    #[test]
    fn given_open_flag_when_sync_then_follows_two_state_machine() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);

        dismiss.sync(true, Some(panel()), Message::Close);
        assert_eq!(dismiss.state(), DismissState::Active);

        dismiss.sync(true, Some(panel()), Message::Close);
        assert_eq!(host.attached(), 1);

        dismiss.sync(false, Some(panel()), Message::Close);
        assert_eq!(dismiss.state(), DismissState::Inactive);
        assert_eq!(host.live_listeners(), 0);

        dismiss.sync(false, None, Message::Close);
        assert_eq!(dismiss.state(), DismissState::Inactive);
    }

    #[test]
    fn given_active_controller_when_dropped_then_listener_released() {
        let host = FakeHost::default();
        let mut dismiss = controller(&host);
        dismiss.activate(Some(panel()), Message::Close);
        assert_eq!(host.live_listeners(), 1);

        drop(dismiss);

        assert_eq!(host.live_listeners(), 0);
    }

    #[test]
    fn given_subscription_host_when_activated_then_host_reports_attached() {
        let mut dismiss: DismissController<Message> = DismissController::new();
        assert!(!dismiss.host().is_attached());

        dismiss.activate(Some(panel()), Message::Close);
        assert!(dismiss.host().is_attached());

        dismiss.deactivate();
        assert!(!dismiss.host().is_attached());
    }
}
