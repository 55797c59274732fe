// src/components/map_view.rs
use crate::components::load_error::LoadError;
use crate::components::tooltip::Tooltip;
use crate::map_config::MapConfig;
use crate::map_shapes::{Geometry, Shape, ShapeTable};
use crate::region_data::{Dataset, Region};
use crate::view_transform::{resolve_click, DragState, HoverState, ViewTransform};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub dataset: Rc<Dataset>,
    /// Region selected by the page, highlighted on the map.
    pub active: Option<Region>,
    pub on_select: Callback<Region>,
    #[prop_or_default]
    pub config: MapConfig,
}

pub enum MapViewMsg {
    ZoomIn,
    ZoomOut,
    ResetView,
    StartDrag(MouseEvent),
    DragMap(MouseEvent),
    EndDrag,
    HoverShape(String, f64, f64),
    MovePointer(f64, f64),
    LeaveShape,
    ClickShape(String),
}

pub struct MapView {
    shapes: Result<ShapeTable, &'static str>,
    view: ViewTransform,
    drag: DragState,
    hover: HoverState,
}

impl Component for MapView {
    type Message = MapViewMsg;
    type Properties = MapViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let shapes = ShapeTable::load().map_err(|e| {
            log::error!("Failed to load image map: {}", e);
            e.user_message()
        });

        Self {
            shapes,
            view: ViewTransform::new(ctx.props().config.zoom),
            drag: DragState::default(),
            hover: HoverState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MapViewMsg::ZoomIn => {
                self.view.zoom_in();
                log::debug!("Zoom {}%", self.view.percent());
                true
            }
            MapViewMsg::ZoomOut => {
                self.view.zoom_out();
                log::debug!("Zoom {}%", self.view.percent());
                true
            }
            MapViewMsg::ResetView => {
                self.view.reset();
                true
            }
            MapViewMsg::StartDrag(event) => self.drag.start(
                event.button(),
                event.client_x() as f32,
                event.client_y() as f32,
            ),
            MapViewMsg::DragMap(event) => {
                match self
                    .drag
                    .move_to(event.client_x() as f32, event.client_y() as f32)
                {
                    Some((dx, dy)) => {
                        self.view.pan_by(dx, dy);
                        true
                    }
                    None => false,
                }
            }
            MapViewMsg::EndDrag => self.drag.end(),
            MapViewMsg::HoverShape(id, x, y) => {
                let changed = self.hover.enter(&ctx.props().dataset, &id, x, y);
                if !changed {
                    log::warn!("No region for map shape {}", id);
                }
                changed
            }
            MapViewMsg::MovePointer(x, y) => self.hover.move_to(x, y),
            MapViewMsg::LeaveShape => self.hover.leave(),
            MapViewMsg::ClickShape(id) => {
                match resolve_click(&ctx.props().dataset, &id) {
                    Some(region) => ctx.props().on_select.emit(region),
                    None => log::warn!("No region for map shape {}", id),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let table = match &self.shapes {
            Ok(table) => table,
            Err(message) => {
                return html! { <LoadError message={*message} /> };
            }
        };

        let onmousedown = ctx.link().callback(MapViewMsg::StartDrag);
        let onmousemove = ctx.link().callback(MapViewMsg::DragMap);
        let onmouseup = ctx.link().callback(|_: MouseEvent| MapViewMsg::EndDrag);
        let onmouseleave = ctx.link().callback(|_: MouseEvent| MapViewMsg::EndDrag);

        let dragging = self.drag.is_active();
        let stage_style = format!(
            "transform-origin: center; transform: {}; transition: {};",
            self.view.css_transform(),
            if dragging { "none" } else { "transform 0.3s ease" }
        );

        html! {
            <div
                class={classes!("map-container", if dragging { "grabbing" } else { "grab" })}
                {onmousedown}
                {onmousemove}
                {onmouseup}
                {onmouseleave}
            >
                { self.render_controls(ctx) }

                <div class="map-stage" style={stage_style}>
                    <div class="map-layer">
                        { self.render_region_overlay(ctx, table) }
                    </div>
                </div>

                if let Some(active) = ctx.props().active.as_ref() {
                    <div class="active-badge">{ active.name.clone() }</div>
                }

                { self.render_tooltip(ctx) }
            </div>
        }
    }
}

impl MapView {
    fn render_controls(&self, ctx: &Context<Self>) -> Html {
        // Keep control clicks from starting a pan.
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
        let zoom_in = ctx.link().callback(|_: MouseEvent| MapViewMsg::ZoomIn);
        let zoom_out = ctx.link().callback(|_: MouseEvent| MapViewMsg::ZoomOut);
        let reset = ctx.link().callback(|_: MouseEvent| MapViewMsg::ResetView);

        html! {
            <div class="map-controls" onmousedown={stop}>
                <button onclick={zoom_in} disabled={!self.view.can_zoom_in()} aria-label="Zoom in">{"+"}</button>
                <button onclick={zoom_out} disabled={!self.view.can_zoom_out()} aria-label="Zoom out">{"−"}</button>
                <button onclick={reset} disabled={self.view.is_identity()} aria-label="Reset view">{"⟲"}</button>
                <span class="zoom-level">{ format!("{}%", self.view.percent()) }</span>
            </div>
        }
    }

    /// Hit-testable region shapes in the image map's pixel space.
    fn render_region_overlay(&self, ctx: &Context<Self>, table: &ShapeTable) -> Html {
        if table.width == 0 || table.height == 0 {
            return html! {};
        }

        let active_id = ctx.props().active.as_ref().map(|r| r.id.as_str());

        html! {
            <svg
                class="region-overlay"
                role="img"
                aria-label={ctx.props().config.map_label.clone()}
                style={format!("display: block; width: {}px; height: {}px;", table.width, table.height)}
                width={table.width.to_string()}
                height={table.height.to_string()}
                viewBox={format!("0 0 {} {}", table.width, table.height)}
                preserveAspectRatio="none"
                xmlns="http://www.w3.org/2000/svg"
            >
                {for table.shapes.iter().map(|shape| self.render_shape(ctx, shape, active_id == Some(shape.id.as_str())))}
            </svg>
        }
    }

    fn render_shape(&self, ctx: &Context<Self>, shape: &Shape, active: bool) -> Html {
        let onclick = {
            let id = shape.id.clone();
            ctx.link().callback(move |e: MouseEvent| {
                e.prevent_default();
                MapViewMsg::ClickShape(id.clone())
            })
        };
        let onmouseenter = {
            let id = shape.id.clone();
            ctx.link().callback(move |e: MouseEvent| {
                MapViewMsg::HoverShape(id.clone(), e.client_x() as f64, e.client_y() as f64)
            })
        };
        let onmousemove = ctx.link().callback(|e: MouseEvent| {
            MapViewMsg::MovePointer(e.client_x() as f64, e.client_y() as f64)
        });
        let onmouseleave = ctx.link().callback(|_: MouseEvent| MapViewMsg::LeaveShape);

        let class = classes!("region-shape", active.then_some("active"));
        let style = ctx
            .props()
            .dataset
            .find(&shape.id)
            .and_then(|r| r.color.as_ref())
            .map(|color| format!("--region-color: {};", color));

        match &shape.geometry {
            Geometry::Polygon(_) => html! {
                <polygon
                    key={shape.id.clone()}
                    {class}
                    style={style}
                    points={shape.geometry.svg_points().unwrap_or_default()}
                    {onclick}
                    {onmouseenter}
                    {onmousemove}
                    {onmouseleave}
                >
                    <title>{ shape.title.clone() }</title>
                </polygon>
            },
            Geometry::Circle { cx, cy, r } => html! {
                <circle
                    key={shape.id.clone()}
                    {class}
                    style={style}
                    cx={cx.to_string()}
                    cy={cy.to_string()}
                    r={r.to_string()}
                    {onclick}
                    {onmouseenter}
                    {onmousemove}
                    {onmouseleave}
                >
                    <title>{ shape.title.clone() }</title>
                </circle>
            },
        }
    }

    fn render_tooltip(&self, ctx: &Context<Self>) -> Html {
        let (x, y) = self.hover.pointer();
        let hovered = self.hover.hovered();
        html! {
            <Tooltip
                visible={hovered.is_some()}
                {x}
                {y}
                gap={ctx.props().config.tooltip_gap}
                url={hovered.map(|r| r.url.clone())}
            >
                if let Some(region) = hovered {
                    <div class="tooltip-content">
                        <p class="tooltip-title">{ region.name.clone() }</p>
                        <p class="tooltip-hint">{"Click to view details"}</p>
                    </div>
                }
            </Tooltip>
        }
    }
}
