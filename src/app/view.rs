// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen: the image picker on top, the source URL, the image itself and
//! the Save button, with toasts stacked over everything.

use super::{LoadState, Message};
use crate::catalog::{self, CatalogEntry};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use iced::widget::{button, image, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Option<&'static CatalogEntry>,
    pub current_url: &'a str,
    pub current_image: Option<&'a ImageData>,
    pub load_state: LoadState,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picker = pick_list(
        catalog::entries(),
        ctx.selected.copied(),
        Message::SelectionChanged,
    )
    .placeholder(ctx.i18n.tr("picker-placeholder"))
    .width(Length::Fixed(sizing::PICKER_WIDTH));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("picker-label")).size(typography::BODY))
        .push(picker);

    let source = Text::new(format!(
        "{} {}",
        ctx.i18n.tr("source-url-label"),
        ctx.current_url
    ))
    .size(typography::CAPTION)
    .style(|theme: &Theme| iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let save_button = button(Text::new(ctx.i18n.tr("save-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe(ctx.current_image.map(|_| Message::SaveRequested));

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(source)
        .push(view_image_area(ctx.current_image, ctx.load_state, ctx.i18n))
        .push(
            Container::new(save_button)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_image_area<'a>(
    current_image: Option<&'a ImageData>,
    load_state: LoadState,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match (current_image, load_state) {
        (Some(data), _) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, LoadState::Failed) => Text::new(i18n.tr("image-load-failed"))
            .size(typography::BODY)
            .into(),
        (None, _) => Text::new(i18n.tr("loading-image"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
