// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the toolbar, the optional status line, the preview column and the
//! control panel.

use super::status::{StatusKind, StatusLine};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::optics::OpticsModel;
use crate::preview::{ImageOrigin, SampleImage};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use crate::ui::{controls, preview, styles};
use iced::widget::image::Handle;
use iced::widget::{button, container, pick_list, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use unic_langid::LanguageIdentifier;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub model: &'a OpticsModel,
    pub theme_mode: ThemeMode,
    pub sample: &'a SampleImage,
    pub preview_handle: &'a Handle,
    pub loading_image: bool,
    pub status: Option<&'a StatusLine>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let readout = ctx.model.readout();

    let preview_column = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        readout,
        handle: ctx.preview_handle.clone(),
    });

    let controls_column = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        model: ctx.model,
    })
    .map(Message::Controls);

    let body = Row::new()
        .spacing(spacing::LG)
        .push(preview_column)
        .push(controls_column);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(toolbar(&ctx));
    if let Some(status) = ctx.status {
        column = column.push(status_line(ctx.i18n, status));
    }
    column = column.push(body);

    Container::new(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// =============================================================================
// Toolbar
// =============================================================================

/// Theme mode option for the pick list.
#[derive(Debug, Clone, PartialEq)]
struct ThemeOption {
    mode: ThemeMode,
    label: String,
}

impl std::fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Locale option for the pick list.
#[derive(Debug, Clone, PartialEq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl std::fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("app-title")).size(typography::TITLE_MD);

    let open_button = button(Text::new(i18n.tr("toolbar-open-image")).size(typography::BODY))
        .on_press_maybe((!ctx.loading_image).then_some(Message::OpenImage))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let uses_file = matches!(ctx.sample.origin(), ImageOrigin::File(_));
    let generated_button =
        button(Text::new(i18n.tr("toolbar-generated-image")).size(typography::BODY))
            .on_press_maybe(uses_file.then_some(Message::UseGeneratedImage))
            .padding([spacing::XS, spacing::MD]);

    let theme_options: Vec<ThemeOption> = ThemeMode::ALL
        .iter()
        .map(|&mode| ThemeOption {
            mode,
            label: i18n.tr(mode.i18n_key()),
        })
        .collect();
    let selected_theme = theme_options
        .iter()
        .find(|opt| opt.mode == ctx.theme_mode)
        .cloned();
    let theme_picker = pick_list(theme_options, selected_theme, |opt| {
        Message::ThemeSelected(opt.mode)
    })
    .padding(spacing::XS);

    let language_options: Vec<LanguageOption> = i18n
        .available_locales
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: i18n.tr(&format!("language-name-{locale}")),
        })
        .collect();
    let selected_language = language_options
        .iter()
        .find(|opt| &opt.locale == i18n.current_locale())
        .cloned();
    let language_picker = pick_list(language_options, selected_language, |opt| {
        Message::LanguageSelected(opt.locale)
    })
    .padding(spacing::XS);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(open_button)
        .push(generated_button)
        .push(Text::new(i18n.tr("toolbar-theme-label")).size(typography::BODY))
        .push(theme_picker)
        .push(Text::new(i18n.tr("toolbar-language-label")).size(typography::BODY))
        .push(language_picker)
        .into()
}

fn status_line<'a>(i18n: &I18n, status: &StatusLine) -> Element<'a, Message> {
    let line = container(Text::new(status.text(i18n)).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    match status.kind() {
        StatusKind::Error => line.style(styles::container::error_banner).into(),
        StatusKind::Info => line.into(),
    }
}
