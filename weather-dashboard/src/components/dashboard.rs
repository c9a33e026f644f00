use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, FavoritesPanel, FavoritesPanelProps, SearchBar, SearchBarProps, WeatherCard,
    WeatherCardProps,
};
use crate::action::Action;
use crate::state::{AppState, Focus};
use crate::view::DashboardView;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for Dashboard - read-only view of state
pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: search box, result card, favorites, help bar
#[derive(Default)]
pub struct Dashboard {
    search: SearchBar,
    favorites: FavoritesPanel,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

fn status_hints(focus: Focus) -> Vec<StatusBarHint<'static>> {
    match focus {
        Focus::Search => vec![
            StatusBarHint::new("enter", "search"),
            StatusBarHint::new("^S", "save"),
            StatusBarHint::new("^T", "units"),
            StatusBarHint::new("tab", "favorites"),
            StatusBarHint::new("esc", "quit"),
        ],
        Focus::Favorites => vec![
            StatusBarHint::new("j/k", "select"),
            StatusBarHint::new("enter", "load"),
            StatusBarHint::new("u", "units"),
            StatusBarHint::new("tab", "search"),
            StatusBarHint::new("q", "quit"),
        ],
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let state = props.state;
        match state.focus {
            Focus::Search => self
                .search
                .handle_event(
                    event,
                    SearchBarProps {
                        query: &state.query,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Focus::Favorites => self
                .favorites
                .handle_event(
                    event,
                    FavoritesPanelProps {
                        favorites: &state.favorites,
                        selected: state.favorites_selected,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let view = DashboardView::from_state(props.state);
        let favorites_height = (view.favorites.len().max(1) as u16).saturating_add(2).min(10);

        let chunks = Layout::vertical([
            Constraint::Length(1),                // Title
            Constraint::Length(3),                // Search
            Constraint::Min(8),                   // Weather card
            Constraint::Length(favorites_height), // Favorites
            Constraint::Length(1),                // Help bar
        ])
        .split(area);

        let title = Line::from(vec![Span::styled(
            "Weather Dashboard",
            Style::default().fg(Color::Cyan).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.search.render(
            frame,
            chunks[1],
            SearchBarProps {
                query: &view.query,
                is_focused: props.is_focused && view.focus == Focus::Search,
            },
        );

        let mut card = WeatherCard;
        card.render(frame, chunks[2], WeatherCardProps { view: &view });

        self.favorites.render(
            frame,
            chunks[3],
            FavoritesPanelProps {
                favorites: &view.favorites,
                selected: view.favorites_selected,
                is_focused: props.is_focused && view.focus == Focus::Favorites,
            },
        );

        let hints = status_hints(view.focus);
        let status = view.status.clone().unwrap_or_default();
        let status_items = [StatusBarItem::span(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        ))];

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::items(&status_items),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
