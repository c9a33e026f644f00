use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::Component;
use crate::action::Action;
use crate::view::NO_FAVORITES;

/// Clickable list of saved cities
pub struct FavoritesPanel {
    list: SelectList,
}

pub struct FavoritesPanelProps<'a> {
    pub favorites: &'a [String],
    pub selected: usize,
    pub is_focused: bool,
}

impl Default for FavoritesPanel {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl FavoritesPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: None,
        },
        selection: SelectionStyle::default(),
        scrollbar: ScrollbarStyle::default(),
    }
}

impl Component<Action> for FavoritesPanel {
    type Props<'a> = FavoritesPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let last = props.favorites.len().saturating_sub(1);
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Down | KeyCode::Char('j') if !props.favorites.is_empty() => {
                    Some(Action::FavoriteSelect((props.selected + 1).min(last)))
                }
                KeyCode::Up | KeyCode::Char('k') if !props.favorites.is_empty() => {
                    Some(Action::FavoriteSelect(props.selected.saturating_sub(1)))
                }
                KeyCode::Enter => Some(Action::FavoriteConfirm),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Tab | KeyCode::Char('/') => Some(Action::UiFocusToggle),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Favorite Cities ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.favorites.is_empty() {
            let empty = Line::styled(NO_FAVORITES, Style::default().fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(empty), inner);
            return;
        }

        let items: Vec<Line<'static>> = props
            .favorites
            .iter()
            .map(|city| Line::raw(city.clone()))
            .collect();
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.selected,
            is_focused: props.is_focused,
            style: list_style(),
            behavior: SelectListBehavior::default(),
            on_select: Action::FavoriteSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn cities() -> Vec<String> {
        vec!["London".into(), "Berlin".into(), "Tokyo".into()]
    }

    fn send(favorites: &[String], selected: usize, k: &str) -> Vec<Action> {
        let mut component = FavoritesPanel::new();
        component
            .handle_event(
                &EventKind::Key(key(k)),
                FavoritesPanelProps {
                    favorites,
                    selected,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_navigation_clamps() {
        let favorites = cities();
        send(&favorites, 0, "down").assert_first(Action::FavoriteSelect(1));
        send(&favorites, 2, "j").assert_first(Action::FavoriteSelect(2));
        send(&favorites, 0, "up").assert_first(Action::FavoriteSelect(0));
        send(&favorites, 2, "k").assert_first(Action::FavoriteSelect(1));
    }

    #[test]
    fn test_navigation_with_no_favorites() {
        send(&[], 0, "down").assert_empty();
    }

    #[test]
    fn test_enter_confirms() {
        send(&cities(), 1, "enter").assert_first(Action::FavoriteConfirm);
    }

    #[test]
    fn test_render_lists_cities() {
        let favorites = cities();
        let mut render = RenderHarness::new(30, 8);
        let mut component = FavoritesPanel::new();

        let output = render.render_to_string_plain(|frame| {
            let props = FavoritesPanelProps {
                favorites: &favorites,
                selected: 0,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("London"));
        assert!(output.contains("Berlin"));
        assert!(output.contains("Tokyo"));
    }

    #[test]
    fn test_render_empty_placeholder() {
        let mut render = RenderHarness::new(40, 5);
        let mut component = FavoritesPanel::new();

        let output = render.render_to_string_plain(|frame| {
            let props = FavoritesPanelProps {
                favorites: &[],
                selected: 0,
                is_focused: false,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("No favorite cities yet."));
    }
}
