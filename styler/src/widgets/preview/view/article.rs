use iced::widget::{Column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::widgets::preview::model::PreviewViewModel;

const TITLE_SCALE: f32 = 2.2;
const SUBTITLE_SCALE: f32 = 1.4;
const LINE_HEIGHT: f32 = 1.5;
const ARTICLE_PADDING: f32 = 48.0;
const PARAGRAPH_SPACING: f32 = 24.0;

/// Props for the article preview.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleProps<'a> {
    pub(crate) vm: PreviewViewModel<'a>,
}

/// Render the article with the applied presentation.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticleProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let resolved = *props.vm.resolved;
    let article = props.vm.article;
    let color = resolved.font_color;
    let paint = move |_: &Theme| text::Style { color: Some(color) };

    let mut body = Column::new()
        .spacing(PARAGRAPH_SPACING)
        .push(
            text(article.title)
                .font(resolved.font)
                .size(resolved.font_size * TITLE_SCALE)
                .style(paint),
        )
        .push(
            text(article.subtitle)
                .font(resolved.font)
                .size(resolved.font_size * SUBTITLE_SCALE)
                .style(paint),
        );

    for paragraph in article.paragraphs {
        body = body.push(
            text(*paragraph)
                .font(resolved.font)
                .size(resolved.font_size)
                .line_height(LINE_HEIGHT)
                .style(paint),
        );
    }

    let column = container(body)
        .max_width(resolved.container_width)
        .padding(ARTICLE_PADDING);

    let centered = container(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let bg_color = resolved.bg_color;
    container(
        scrollable::Scrollable::new(centered)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(bg_color.into()),
        text_color: Some(color),
        ..Default::default()
    })
    .into()
}
