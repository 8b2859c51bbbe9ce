//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use pokedex::{
    components::{Component, DetailView, DetailViewProps, ListView, ListViewProps},
    reducer::reducer,
    state::{AppState, CatalogPage, ListItem, PokemonDetail, PokemonStat, Screen},
};
use tui_dispatch::{testing::*, DataResource};

fn starter_page() -> CatalogPage {
    CatalogPage {
        count: 1302,
        results: vec![
            ListItem {
                name: "bulbasaur".into(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
            },
            ListItem {
                name: "charmander".into(),
                url: "https://pokeapi.co/api/v2/pokemon/4/".into(),
            },
            ListItem {
                name: "squirtle".into(),
                url: "https://pokeapi.co/api/v2/pokemon/7/".into(),
            },
        ],
    }
}

fn loaded_list_state() -> AppState {
    let mut state = AppState::default();
    reducer(&mut state, pokedex::action::Action::ListFetch);
    reducer(
        &mut state,
        pokedex::action::Action::ListDidLoad {
            limit: 20,
            offset: 0,
            page: starter_page(),
        },
    );
    state
}

#[test]
fn test_render_list_loading_state() {
    // PATTERN: RenderHarness for visual testing
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();

    let state = AppState {
        list: DataResource::Loading,
        tick_count: 0,
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Loading"), "Should show loading placeholder");
}

#[test]
fn test_render_list_cards() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();
    let state = loaded_list_state();

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("#001"), "Should show padded dex numbers");
    assert!(output.contains("Bulbasaur"), "Should capitalize names");
    assert!(output.contains("Charmander"), "Should list every entry");
    assert!(
        output.contains("Showing 3 of 1302"),
        "Should show result summary"
    );
}

#[test]
fn test_render_pagination_window() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();
    let state = loaded_list_state();

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    // 1302 entries at 20 per page is 66 pages; the window shows the
    // first three, an ellipsis, then the last
    assert!(output.contains("[1]"), "Current page should be marked");
    assert!(output.contains("66"), "Last page should be visible");
    assert!(output.contains("…"), "Gap should collapse to an ellipsis");
}

#[test]
fn test_render_list_error_state() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();

    let state = AppState {
        list: DataResource::Failed("request failed: connect".into()),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("Oops! Something went wrong"),
        "Should show error headline"
    );
    assert!(
        output.contains("request failed: connect"),
        "Should show error message"
    );
    assert!(output.contains("retry"), "Should show retry hint");
}

#[test]
fn test_render_list_help_bar() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();
    let state = loaded_list_state();

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("select"), "Should show select hint");
    assert!(output.contains("page"), "Should show page hint");
    assert!(output.contains("open"), "Should show open hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_detail_record() {
    let mut render = RenderHarness::new(80, 30);
    let mut component = DetailView::new();

    let state = AppState {
        screen: Screen::Detail { id: "1".into() },
        detail: DataResource::Loaded(PokemonDetail {
            id: 1,
            name: "bulbasaur".into(),
            height: 7,
            weight: 69,
            base_experience: Some(64),
            artwork_url: None,
            sprite_url: None,
            types: vec!["grass".into(), "poison".into()],
            stats: vec![
                PokemonStat {
                    name: "hp".into(),
                    value: 45,
                },
                PokemonStat {
                    name: "special-attack".into(),
                    value: 65,
                },
            ],
        }),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = DetailViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("BULBASAUR"), "Should show the name");
    assert!(output.contains("#001"), "Should show the dex number");
    assert!(output.contains("0.7m"), "Height arrives in decimetres");
    assert!(output.contains("6.9kg"), "Weight arrives in hectograms");
    assert!(output.contains("Grass"), "Should show type badges");
    assert!(
        output.contains("Special attack"),
        "Stat labels should be humanized"
    );
}

#[test]
fn test_render_detail_loading_state() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = DetailView::new();

    let state = AppState {
        screen: Screen::Detail { id: "1".into() },
        detail: DataResource::Loading,
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = DetailViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Loading"), "Should show loading placeholder");
    assert!(output.contains("back"), "Should still offer the back hint");
}

#[test]
fn test_render_initial_state() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = ListView::new();

    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = ListViewProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    // Before the first fetch lands the list shows the loading placeholder
    assert!(!output.is_empty(), "Should render something");
    assert!(output.contains("POKÉDEX"), "Should show the title");
}
