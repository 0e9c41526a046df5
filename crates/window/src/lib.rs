//! Interactive histogram window.
//!
//! Owns the Iced application loop: one window holding the title heading, the
//! bar chart canvas and a summary line. The loop runs on the calling thread
//! and [`show`] only returns once the window has been closed.

use histview_chart::BarChart;
use histview_config::ViewerConfig;
use histview_core::{Figure, HistError, Result};
use histview_theme::Palette;
use iced::{
    keyboard::{self, key::Named, Key},
    widget::{canvas, column, text},
    Element, Length, Size, Subscription, Task,
};
use tracing::info;

/// Smallest window edge accepted from the config, in logical pixels.
const MIN_WINDOW_EDGE: f32 = 200.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open a window showing `figure` and block until the user closes it.
///
/// Fails with [`HistError::Display`] when no window can be created, e.g. when
/// there is no display server.
pub fn show(figure: Figure, config: &ViewerConfig) -> Result<()> {
    let palette = Palette::from_config(&config.theme, &config.chart);
    let size = window_size(config);

    info!("Opening '{}' ({}x{})", figure.title, size.width, size.height);

    iced::application(
        move || Viewer::new(figure.clone(), palette.clone()),
        Viewer::update,
        Viewer::view,
    )
    .title(Viewer::title)
    .subscription(Viewer::subscription)
    .style(Viewer::style)
    .window_size(size)
    .run()
    .map_err(|e| HistError::Display(e.to_string()))?;

    info!("Window closed");
    Ok(())
}

fn window_size(config: &ViewerConfig) -> Size {
    Size::new(
        config.window.width.max(MIN_WINDOW_EDGE),
        config.window.height.max(MIN_WINDOW_EDGE),
    )
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    KeyEvent(keyboard::Event),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Viewer {
    title:   String,
    summary: String,
    chart:   BarChart,
    palette: Palette,
}

impl Viewer {
    fn new(figure: Figure, palette: Palette) -> (Self, Task<Message>) {
        let summary = figure.summary();
        let viewer = Self {
            title: figure.title,
            summary,
            chart: BarChart::new(figure.histogram, palette.clone()),
            palette,
        };

        (viewer, Task::none())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyEvent(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if closes_window(&key, modifiers) {
                    info!("Close requested from keyboard");
                    return iced::exit();
                }
                Task::none()
            }
            Message::KeyEvent(_) => Task::none(),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let font = self.palette.font_size;

        column![
            text(&self.title).size(font * 1.3),
            canvas(&self.chart)
                .width(Length::Fill)
                .height(Length::Fill),
            text(&self.summary).size(font * 0.9),
        ]
        .spacing(8)
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(Message::KeyEvent)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.palette.background.to_iced(),
            text_color: self.palette.foreground.to_iced(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `q` or `Escape` without modifiers closes the window.
fn closes_window(key: &Key, modifiers: keyboard::Modifiers) -> bool {
    if !modifiers.is_empty() {
        return false;
    }
    match key {
        Key::Named(Named::Escape) => true,
        Key::Character(c) => c.as_str() == "q",
        _ => false,
    }
}
