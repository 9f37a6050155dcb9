use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Element, Length, Point, Rectangle, Size, Subscription};
use styler_ui_dismiss::{DismissController, PointerPress};

const PANEL_SIZE: Size = Size::new(260.0, 180.0);
const TOGGLE_WIDTH: f32 = 120.0;

#[derive(Debug, Clone)]
enum Message {
    Toggle,
    Dismissed,
    CursorMoved(Point),
    Pressed(PointerPress),
}

#[derive(Default)]
struct Demo {
    open: bool,
    cursor: Option<Point>,
    dismiss: DismissController<Message, [Rectangle; 2]>,
}

impl Demo {
    fn region(&self) -> [Rectangle; 2] {
        [
            Rectangle::new(Point::ORIGIN, PANEL_SIZE),
            Rectangle::new(
                Point::new(PANEL_SIZE.width, 0.0),
                Size::new(TOGGLE_WIDTH, 40.0),
            ),
        ]
    }
}

fn update(demo: &mut Demo, message: Message) {
    match message {
        Message::Toggle => demo.open = !demo.open,
        Message::Dismissed => demo.open = false,
        Message::CursorMoved(position) => demo.cursor = Some(position),
        Message::Pressed(press) => {
            if let Some(close) = press
                .position(demo.cursor)
                .and_then(|position| demo.dismiss.pointer_down(position))
            {
                update(demo, close);
            }
        },
    }

    let region = demo.region();
    demo.dismiss.sync(demo.open, Some(region), Message::Dismissed);
}

fn view(demo: &Demo) -> Element<'_, Message> {
    let panel: Element<'_, Message> = if demo.open {
        container(column![
            text("Panel"),
            text("Click anywhere else to close"),
        ])
        .width(Length::Fixed(PANEL_SIZE.width))
        .height(Length::Fixed(PANEL_SIZE.height))
        .padding(12)
        .into()
    } else {
        container(text(""))
            .width(Length::Fixed(PANEL_SIZE.width))
            .into()
    };

    let toggle = button(text(if demo.open { "Close" } else { "Open" }))
        .width(Length::Fixed(TOGGLE_WIDTH))
        .on_press(Message::Toggle);

    mouse_area(
        container(row![panel, toggle])
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_move(Message::CursorMoved)
    .into()
}

fn subscription(demo: &Demo) -> Subscription<Message> {
    demo.dismiss.subscription().map(Message::Pressed)
}

fn main() -> iced::Result {
    iced::application(Demo::default, update, view)
        .subscription(subscription)
        .run()
}
