//! Weather Dashboard - terminal front end

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_dashboard::action::Action;
use weather_dashboard::api::WeatherClient;
use weather_dashboard::components::{Component, Dashboard, DashboardProps};
use weather_dashboard::config::{ConfigArgs, Settings};
use weather_dashboard::effect::Effect;
use weather_dashboard::favorites::{self, FavoritesWriter};
use weather_dashboard::logging;
use weather_dashboard::reducer::reducer;
use weather_dashboard::state::{AppState, Focus};
use weather_dashboard::storage::{FileStorage, LocalStorage};

/// Weather Dashboard - current conditions and favorite cities
#[derive(Parser, Debug)]
#[command(name = "weather-dashboard")]
#[command(about = "Look up current weather and keep a list of favorite cities")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DashboardComponentId {
    Search,
    Favorites,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DashboardContext {
    Search,
    Favorites,
}

impl EventRoutingState<DashboardComponentId, DashboardContext> for AppState {
    fn focused(&self) -> Option<DashboardComponentId> {
        match self.focus {
            Focus::Search => Some(DashboardComponentId::Search),
            Focus::Favorites => Some(DashboardComponentId::Favorites),
        }
    }

    fn modal(&self) -> Option<DashboardComponentId> {
        None
    }

    fn binding_context(&self, id: DashboardComponentId) -> DashboardContext {
        match id {
            DashboardComponentId::Search => DashboardContext::Search,
            DashboardComponentId::Favorites => DashboardContext::Favorites,
        }
    }

    fn default_context(&self) -> DashboardContext {
        DashboardContext::Search
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        config,
        debug: debug_args,
    } = Args::parse();

    let settings = match Settings::from_args(config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    logging::init(settings.log_file.as_deref())?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::new(&settings.data_dir));
    tracing::info!(data_dir = %settings.data_dir.display(), "using favorites storage");

    let mut state = debug
        .load_state_or_else_async({
            let storage = Arc::clone(&storage);
            move || async move {
                Ok::<AppState, io::Error>(AppState::new(favorites::load(storage.as_ref())))
            }
        })
        .await
        .map_err(debug_error)?;

    let init_action = settings.initial_city.as_ref().map(|city| {
        state.query = city.clone();
        Action::Search
    });

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let client = WeatherClient::with_base_url(settings.api_key.clone(), settings.base_url.clone());

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        replay_actions,
        init_action,
        EffectDeps {
            client,
            favorites: Arc::new(FavoritesWriter::new(storage)),
        },
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct DashboardUi {
    dashboard: Dashboard,
}

impl DashboardUi {
    fn new() -> Self {
        Self {
            dashboard: Dashboard::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DashboardComponentId>,
    ) {
        event_ctx.set_component_area(DashboardComponentId::Search, area);
        event_ctx.set_component_area(DashboardComponentId::Favorites, area);

        let props = DashboardProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.dashboard.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .dashboard
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

/// What effect handlers need to reach the outside world
struct EffectDeps {
    client: WeatherClient,
    favorites: Arc<FavoritesWriter>,
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    init_action: Option<Action>,
    deps: EffectDeps,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DashboardUi::new()));
    let mut bus: EventBus<AppState, Action, DashboardComponentId, DashboardContext> =
        EventBus::new();
    let keybindings: Keybindings<DashboardContext> = Keybindings::new();

    let ui_search = Rc::clone(&ui);
    bus.register(DashboardComponentId::Search, move |event, state| {
        ui_search.borrow_mut().handle_event(&event.kind, state)
    });

    let ui_favorites = Rc::clone(&ui);
    bus.register(DashboardComponentId::Favorites, move |event, state| {
        ui_favorites.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            init_action,
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &deps),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, deps: &EffectDeps) {
    match effect {
        Effect::FetchWeather {
            request_id,
            city,
            unit,
        } => {
            tracing::info!(request_id, %city, ?unit, "looking up weather");
            let client = deps.client.clone();
            // One task per request: earlier lookups are not cancelled, the
            // reducer drops their results by request id
            let key = format!("weather_{request_id}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match client.fetch_current(&city, unit).await {
                    Ok(reading) => Action::WeatherDidLoad {
                        request_id,
                        reading,
                    },
                    Err(e) => {
                        tracing::warn!(request_id, %city, error = %e, "weather lookup failed");
                        Action::WeatherDidError { request_id }
                    }
                }
            });
        }
        Effect::PersistFavorites { cities } => {
            // Ticket is taken here, in dispatch order; an aborted task's
            // blocking write can still finish but never overwrites a newer list
            let ticket = deps.favorites.ticket();
            tracing::info!(ticket, count = cities.len(), "saving favorites");
            let writer = Arc::clone(&deps.favorites);
            ctx.tasks().spawn(TaskKey::new("favorites"), async move {
                let written =
                    tokio::task::spawn_blocking(move || writer.write(ticket, &cities)).await;
                match written {
                    Ok(Ok(_)) => Action::FavoritesDidPersist,
                    Ok(Err(e)) => {
                        tracing::warn!(ticket, error = %e, "failed to save favorites");
                        Action::FavoritesDidError(e.to_string())
                    }
                    Err(e) => Action::FavoritesDidError(e.to_string()),
                }
            });
        }
    }
}
