//! Outside-press dismissal for [`iced`] panels.
//!
//! A [`DismissController`] watches pointer presses while a panel is open and
//! hands back a close message when a press lands outside the panel
//! [`Region`]. It is a two-state machine:
//! - inactive: no listener attached, every press is ignored;
//! - active: exactly one listener attached through a [`ListenerHost`].
//!
//! The recommended flow:
//! 1. after every update call [`DismissController::sync`] with the panel
//!    open flag and its current region;
//! 2. map [`DismissController::subscription`] into your message type;
//! 3. resolve each [`PointerPress`] to a position and feed it to
//!    [`DismissController::pointer_down`].
//!
//! See `examples/outside_click.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::{Point, Rectangle, Size, Subscription};
//! use styler_ui_dismiss::{DismissController, PointerPress};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Pressed(PointerPress),
//!     Close,
//! }
//!
//! struct State {
//!     open: bool,
//!     cursor: Option<Point>,
//!     dismiss: DismissController<Message>,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Pressed(press) => {
//!             let close = press
//!                 .position(state.cursor)
//!                 .and_then(|position| state.dismiss.pointer_down(position));
//!             if close.is_some() {
//!                 state.open = false;
//!             }
//!         },
//!         Message::Close => state.open = false,
//!     }
//!
//!     let panel = Rectangle::new(Point::ORIGIN, Size::new(320.0, 480.0));
//!     state.dismiss.sync(state.open, Some(panel), Message::Close);
//! }
//!
//! fn subscription(state: &State) -> Subscription<Message> {
//!     state.dismiss.subscription().map(Message::Pressed)
//! }
//! ```

mod controller;
mod host;
mod region;

pub use controller::{DismissController, DismissState};
pub use host::{ListenerHost, ListenerId, PointerPress, SubscriptionHost};
pub use region::Region;
