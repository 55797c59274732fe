// src/components/tooltip.rs
use gloo_utils::window;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Centered,
    /// Tooltip starts at the anchor and extends right.
    LeftAligned,
    /// Tooltip ends at the anchor and extends left.
    RightAligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipPlacement {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            horizontal: Horizontal::Centered,
            vertical: Vertical::Above,
        }
    }
}

/// Choose a placement that keeps a `size` box anchored at `anchor` inside a
/// viewport of `viewport` (width, height). Only the top edge is checked
/// vertically.
pub fn place(anchor: (f64, f64), size: (f64, f64), viewport: (f64, f64)) -> TooltipPlacement {
    let (x, y) = anchor;
    let (w, h) = size;
    let (viewport_w, _) = viewport;

    let horizontal = if x + w / 2.0 > viewport_w {
        Horizontal::RightAligned
    } else if x - w / 2.0 < 0.0 {
        Horizontal::LeftAligned
    } else {
        Horizontal::Centered
    };
    let vertical = if y - h < 0.0 {
        Vertical::Below
    } else {
        Vertical::Above
    };

    TooltipPlacement {
        horizontal,
        vertical,
    }
}

impl TooltipPlacement {
    pub fn css_transform(&self, gap: f64) -> String {
        let tx = match self.horizontal {
            Horizontal::Centered => "-50%",
            Horizontal::LeftAligned => "0",
            Horizontal::RightAligned => "-100%",
        };
        let ty = match self.vertical {
            Vertical::Above => format!("calc(-100% - {}px)", gap),
            Vertical::Below => format!("{}px", gap),
        };
        format!("translate({}, {})", tx, ty)
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub visible: bool,
    /// Anchor in client (viewport) coordinates.
    pub x: f64,
    pub y: f64,
    #[prop_or(12.0)]
    pub gap: f64,
    #[prop_or_default]
    pub url: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let node_ref = use_node_ref();
    let size = use_state(|| (0.0f64, 0.0f64));

    // Measure after every render; only store changes so the effect settles.
    {
        let node_ref = node_ref.clone();
        let size = size.clone();
        use_effect(move || {
            if let Some(el) = node_ref.cast::<web_sys::Element>() {
                let rect = el.get_bounding_client_rect();
                let measured = (rect.width(), rect.height());
                if measured != *size {
                    size.set(measured);
                }
            }
            || ()
        });
    }

    let style = if props.visible {
        let viewport = (
            window().inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            window().inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        );
        let placement = place((props.x, props.y), *size, viewport);
        format!(
            "position: fixed; left: {}px; top: {}px; transform: {}; opacity: 1; visibility: visible; pointer-events: auto; z-index: 50;",
            props.x,
            props.y,
            placement.css_transform(props.gap)
        )
    } else {
        "position: fixed; opacity: 0; visibility: hidden; pointer-events: none;".to_string()
    };

    html! {
        <div ref={node_ref} class="map-tooltip" {style}>
            { props.children.clone() }
            if let Some(url) = props.url.clone() {
                <a
                    href={url}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="tooltip-link"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    {"Visit website ↗"}
                </a>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (f64, f64) = (1000.0, 800.0);
    const SIZE: (f64, f64) = (200.0, 60.0);

    #[test]
    fn test_centered_above_in_the_middle() {
        let p = place((500.0, 400.0), SIZE, VIEWPORT);
        assert_eq!(p, TooltipPlacement::default());
    }

    #[test]
    fn test_left_edge_flips_to_left_aligned() {
        for x in [0.0, 50.0, 99.0] {
            let p = place((x, 400.0), SIZE, VIEWPORT);
            assert_eq!(p.horizontal, Horizontal::LeftAligned, "x = {}", x);
        }
        assert_eq!(
            place((100.0, 400.0), SIZE, VIEWPORT).horizontal,
            Horizontal::Centered
        );
    }

    #[test]
    fn test_right_edge_flips_to_right_aligned() {
        for x in [901.0, 950.0, 1000.0] {
            let p = place((x, 400.0), SIZE, VIEWPORT);
            assert_eq!(p.horizontal, Horizontal::RightAligned, "x = {}", x);
        }
        assert_eq!(
            place((900.0, 400.0), SIZE, VIEWPORT).horizontal,
            Horizontal::Centered
        );
    }

    #[test]
    fn test_right_edge_wins_when_both_overflow() {
        let p = place((50.0, 400.0), (300.0, 60.0), (100.0, 800.0));
        assert_eq!(p.horizontal, Horizontal::RightAligned);
    }

    #[test]
    fn test_top_edge_flips_below() {
        assert_eq!(place((500.0, 59.0), SIZE, VIEWPORT).vertical, Vertical::Below);
        assert_eq!(place((500.0, 60.0), SIZE, VIEWPORT).vertical, Vertical::Above);
    }

    #[test]
    fn test_unmeasured_tooltip_is_centered() {
        let p = place((0.0, 0.0), (0.0, 0.0), VIEWPORT);
        assert_eq!(p, TooltipPlacement::default());
    }

    #[test]
    fn test_css_transform() {
        assert_eq!(
            TooltipPlacement::default().css_transform(12.0),
            "translate(-50%, calc(-100% - 12px))"
        );
        let p = TooltipPlacement {
            horizontal: Horizontal::LeftAligned,
            vertical: Vertical::Below,
        };
        assert_eq!(p.css_transform(12.0), "translate(0, 12px)");
        let p = TooltipPlacement {
            horizontal: Horizontal::RightAligned,
            vertical: Vertical::Above,
        };
        assert_eq!(p.css_transform(8.0), "translate(-100%, calc(-100% - 8px))");
    }
}
