// src/components/detail_panel.rs
use crate::region_data::{Region, RegionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailPanelProps {
    pub region: Option<Region>,
    pub on_close: Callback<()>,
}

#[function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> Html {
    let Some(region) = props.region.as_ref() else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let chip_class = match region.kind {
        RegionKind::State => "region-chip chip-state",
        RegionKind::UnionTerritory => "region-chip chip-ut",
    };

    html! {
        <div class="detail-panel">
            <button class="close-button" onclick={on_close} title="Close">{"✕"}</button>

            <div class="detail-heading">
                <span class={chip_class}>{ region.kind.label() }</span>
                <span class="region-code">{ region.id.clone() }</span>
            </div>
            <h2>{ region.name.clone() }</h2>
            <p class="capital">{ format!("Capital: {}", region.capital) }</p>

            <div class="stats-grid">
                <div class="stat">
                    <p class="stat-label">{"Population"}</p>
                    <p class="stat-value">{ region.population.clone() }</p>
                </div>
                <div class="stat">
                    <p class="stat-label">{"Area"}</p>
                    <p class="stat-value">{ region.area.clone() }</p>
                </div>
            </div>

            <div class="languages">
                <p class="section-label">{"Languages"}</p>
                <div class="chip-row">
                    {for region.languages.iter().map(|language| html! {
                        <span key={language.clone()} class="region-chip chip-language">{ language.clone() }</span>
                    })}
                </div>
            </div>

            <p class="description">{ region.description.clone() }</p>

            <a href={region.url.clone()} target="_blank" rel="noopener noreferrer" class="external-link">
                {"Learn more ↗"}
            </a>
        </div>
    }
}
