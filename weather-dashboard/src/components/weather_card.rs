use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::view::{CardView, DashboardView, WeatherView};

/// Current conditions, error line, or a hint when nothing was searched yet
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub view: &'a DashboardView,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let title = if props.view.is_refreshing {
            " Weather (refreshing) "
        } else {
            " Weather "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match &props.view.weather {
            WeatherView::Empty => vec![Line::from(vec![
                Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
            ])],
            WeatherView::Loading => vec![Line::styled(
                "Loading...",
                Style::default().fg(Color::DarkGray),
            )],
            WeatherView::Error(message) => error_lines(message),
            WeatherView::Ready(card) => card_lines(card),
        };

        let [content, toggle] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let height = lines.len() as u16;
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(content);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

        let toggle_line = Line::from(vec![
            Span::styled("^T ", Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                props.view.toggle_label.as_str(),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(toggle_line), toggle);
    }
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::raw(format!("{ERROR_ICON} ")),
        Span::styled(
            message.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
        ),
    ])]
}

fn card_lines(card: &CardView) -> Vec<Line<'static>> {
    vec![
        Line::styled(card.name.clone(), Style::default().bold()),
        Line::raw(""),
        Line::from(vec![
            Span::raw(format!("{} ", card.icon)),
            Span::styled(card.condition.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::styled(card.temperature.clone(), Style::default().fg(Color::Yellow)),
        Line::raw(card.humidity.clone()),
        Line::raw(card.wind.clone()),
    ]
}
