//! Pokedex TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{
    Component, DetailView, DetailViewProps, ListView, ListViewProps,
};
use pokedex::effect::Effect;
use pokedex::reducer::reducer;
use pokedex::state::{AppState, Screen, SPINNER_TICK_MS};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Pokedex TUI over the PokeAPI catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokedex: paginated list plus a detail view")]
struct Args {
    /// API base URL (also read from POKEDEX_API_URL)
    #[arg(long, env = api::BASE_URL_ENV, default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokedexComponentId {
    List,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokedexContext {
    List,
    Detail,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        match self.screen {
            Screen::List => Some(PokedexComponentId::List),
            Screen::Detail { .. } => Some(PokedexComponentId::Detail),
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        None
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::List => PokedexContext::List,
            PokedexComponentId::Detail => PokedexContext::Detail,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::List
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        base_url,
        debug: debug_args,
    } = Args::parse();

    api::set_base_url(base_url);

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

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

struct PokedexUi {
    list: ListView,
    detail: DetailView,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            list: ListView::new(),
            detail: DetailView::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        match state.screen {
            Screen::List => {
                event_ctx.set_component_area(PokedexComponentId::List, area);
                event_ctx
                    .component_areas
                    .remove(&PokedexComponentId::Detail);
                let props = ListViewProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                self.list.render(frame, area, props);
            }
            Screen::Detail { .. } => {
                event_ctx.set_component_area(PokedexComponentId::Detail, area);
                event_ctx.component_areas.remove(&PokedexComponentId::List);
                let props = DetailViewProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                self.detail.render(frame, area, props);
            }
        }
    }

    fn handle_list_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = ListViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.list.handle_event(event, props).into_iter().collect();
        handler_response(actions)
    }

    fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DetailViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.detail.handle_event(event, props).into_iter().collect();
        handler_response(actions)
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
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

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> = EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_list = Rc::clone(&ui);
    bus.register(PokedexComponentId::List, move |event, state| {
        ui_list.borrow_mut().handle_list_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(PokedexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    // Global quit and resize handling; everything else goes to the screens.
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::ListFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchList { limit, offset } => {
            let key = format!("list_{limit}_{offset}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_catalog_page(limit, offset).await {
                    Ok(page) => Action::ListDidLoad {
                        limit,
                        offset,
                        page,
                    },
                    Err(e) => Action::ListDidError {
                        limit,
                        offset,
                        error: e.to_string(),
                    },
                }
            });
        }
        Effect::FetchDetail { id } => {
            let key = format!("pokemon_{id}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_pokemon_detail(&id).await {
                    Ok(detail) => Action::DetailDidLoad { id, detail },
                    Err(e) => Action::DetailDidError {
                        id,
                        error: e.to_string(),
                    },
                }
            });
        }
    }
}
