// src/main.rs
mod components;
mod error;
mod map_config;
mod map_shapes;
mod region_data;
mod search;
mod selection;
mod utils;
mod view_transform;

use components::detail_panel::DetailPanel;
use components::load_error::LoadError;
use components::map_view::MapView;
use components::search_bar::SearchBar;
use map_config::MapConfig;
use region_data::{Dataset, Region, RegionKind};
use selection::Selection;
use std::rc::Rc;
use yew::prelude::*;

pub enum AppMsg {
    SelectRegion(Region),
    CloseDetails,
}

pub struct App {
    dataset: Result<Rc<Dataset>, &'static str>,
    selection: Selection,
    config: MapConfig,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let dataset = Dataset::load().map(Rc::new).map_err(|e| {
            log::error!("Failed to load regions: {}", e);
            e.user_message()
        });

        Self {
            dataset,
            selection: Selection::default(),
            config: MapConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SelectRegion(region) => {
                log::debug!("Selected {}", region.id);
                self.selection.select(region)
            }
            AppMsg::CloseDetails => self.selection.clear(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dataset = match &self.dataset {
            Ok(dataset) => dataset.clone(),
            Err(message) => {
                return html! {
                    <div class="app-container">
                        { self.render_header(ctx, None) }
                        <main class="app-main">
                            <LoadError message={*message} />
                        </main>
                    </div>
                };
            }
        };

        let on_select = ctx.link().callback(AppMsg::SelectRegion);
        let on_close = ctx.link().callback(|_: ()| AppMsg::CloseDetails);
        let selected = self.selection.current().cloned();

        html! {
            <div class="app-container">
                { self.render_header(ctx, Some(dataset.clone())) }

                <main class={classes!("app-main", selected.is_some().then_some("with-details"))}>
                    <div class="map-column">
                        <MapView
                            dataset={dataset.clone()}
                            active={selected.clone()}
                            on_select={on_select}
                            config={self.config.clone()}
                        />
                    </div>

                    if selected.is_some() {
                        <div class="details-column">
                            <DetailPanel region={selected} {on_close} />
                        </div>
                    }
                </main>

                { self.render_info(&dataset) }

                <footer class="app-footer">
                    <p>{ format!("© {} India Political Map Explorer", utils::current_year()) }</p>
                    <p>
                        {"Data sources: "}
                        <a href={self.config.data_source.url.clone()} target="_blank" rel="noopener noreferrer">
                            { format!("{} ↗", self.config.data_source.label) }
                        </a>
                    </p>
                </footer>
            </div>
        }
    }
}

impl App {
    fn render_header(&self, ctx: &Context<Self>, dataset: Option<Rc<Dataset>>) -> Html {
        html! {
            <header class="app-header">
                <span class="eyebrow">{"Interactive Exploration"}</span>
                <h1>{"India Political Map"}</h1>
                <p class="subtitle">
                    {"Explore the diverse states and union territories of India through this interactive map. \
                      Click on any region to learn more about its history, culture, and significance."}
                </p>
                if let Some(dataset) = dataset {
                    <SearchBar {dataset} on_select={ctx.link().callback(AppMsg::SelectRegion)} />
                }
            </header>
        }
    }

    fn render_info(&self, dataset: &Dataset) -> Html {
        let states = dataset.count(RegionKind::State);
        let territories = dataset.count(RegionKind::UnionTerritory);

        html! {
            <section class="info-panel">
                <h2>{"About this map"}</h2>
                <p>
                    { format!(
                        "India is a diverse nation with {} states and {} union territories, each with its unique \
                         culture, language, and traditions. This interactive map allows you to explore the political \
                         divisions of India and learn about each region's distinctive characteristics.",
                        states, territories
                    ) }
                </p>
                <div class="legend">
                    <span class="legend-item"><span class="swatch swatch-default"></span>{"States"}</span>
                    <span class="legend-item"><span class="swatch swatch-highlight"></span>{"Selected State"}</span>
                </div>
            </section>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
