// src/components/search_bar.rs
use crate::region_data::{Dataset, Region};
use crate::search::{ClickTarget, KeyOutcome, SearchKey, SearchState};
use gloo_events::EventListener;
use gloo::utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, Node};
use yew::prelude::*;

pub enum SearchAction {
    Type { query: String, dataset: Rc<Dataset> },
    Focus,
    PointerDown(ClickTarget),
    Key(SearchKey),
    Select,
    Clear,
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SearchAction::Type { query, dataset } => next.set_query(&dataset, query),
            SearchAction::Focus => next.focus(),
            SearchAction::PointerDown(target) => next.pointer_down(target),
            SearchAction::Key(key) => {
                next.key(key);
            }
            SearchAction::Select => next.select(),
            SearchAction::Clear => next.clear(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub dataset: Rc<Dataset>,
    pub on_select: Callback<Region>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let state = use_reducer(SearchState::default);
    let input_ref = use_node_ref();
    let results_ref = use_node_ref();

    // ------ CLICK OUTSIDE ------
    {
        let input_ref = input_ref.clone();
        let results_ref = results_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&document(), "mousedown", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let within = |node: &NodeRef| match (node.get(), target.as_ref()) {
                    (Some(node), Some(target)) => node.contains(Some(target)),
                    _ => false,
                };
                let hit = if within(&input_ref) {
                    ClickTarget::Input
                } else if within(&results_ref) {
                    ClickTarget::Results
                } else {
                    ClickTarget::Elsewhere
                };
                dispatcher.dispatch(SearchAction::PointerDown(hit));
            });

            // Cleanup closure
            move || drop(listener)
        });
    }

    let choose = {
        let state = state.clone();
        let on_select = props.on_select.clone();
        let dataset = props.dataset.clone();
        Callback::from(move |id: String| {
            if let Some(region) = dataset.find(&id) {
                log::debug!("Search selected {}", region.id);
                on_select.emit(region.clone());
            }
            state.dispatch(SearchAction::Select);
        })
    };

    let oninput = {
        let state = state.clone();
        let dataset = props.dataset.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(SearchAction::Type {
                    query: input.value(),
                    dataset: dataset.clone(),
                });
            }
        })
    };

    let onfocus = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| state.dispatch(SearchAction::Focus))
    };

    let onkeydown = {
        let state = state.clone();
        let choose = choose.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(key) = SearchKey::from_key(&e.key()) else {
                return;
            };
            let mut preview = (*state).clone();
            match preview.key(key) {
                KeyOutcome::Ignored => {}
                KeyOutcome::Handled => {
                    e.prevent_default();
                    state.dispatch(SearchAction::Key(key));
                }
                KeyOutcome::Select(id) => {
                    e.prevent_default();
                    choose.emit(id);
                }
            }
        })
    };

    let on_clear = {
        let state = state.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(SearchAction::Clear);
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    let results = state.visible_results();

    html! {
        <div class="search-bar">
            <div class={classes!("search-input", (!results.is_empty()).then_some("expanded"))}>
                <span class="search-icon">{"🔍"}</span>
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Search states & territories..."
                    value={state.query.clone()}
                    {oninput}
                    {onfocus}
                    {onkeydown}
                />
                if !state.query.is_empty() {
                    <button class="clear-button" onclick={on_clear} title="Clear search">{"✕"}</button>
                }
            </div>

            if !results.is_empty() {
                <ul ref={results_ref} class="search-results">
                    {for results.iter().enumerate().filter_map(|(index, id)| {
                        let region = props.dataset.find(id)?;
                        let onclick = {
                            let choose = choose.clone();
                            let id = id.clone();
                            Callback::from(move |_: MouseEvent| choose.emit(id.clone()))
                        };
                        let class = if state.highlighted == Some(index) {
                            "search-result highlighted"
                        } else {
                            "search-result"
                        };
                        Some(html! {
                            <li key={region.id.clone()} {class} {onclick}>
                                <span class="result-name">{ region.name.clone() }</span>
                                <span class="result-badge">{ region.kind.short_label() }</span>
                            </li>
                        })
                    })}
                </ul>
            }
        </div>
    }
}
