// src/map_shapes.rs
//
// Image-map shape table: the clickable outline of every region, expressed in
// the pixel space of the base map image.

use crate::error::MapDataError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const IMAGE_MAP_XML: &str = include_str!("../public/data/india-map.xml");

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<(u32, u32)>),
    Circle { cx: u32, cy: u32, r: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Region id this shape activates.
    pub id: String,
    pub title: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeTable {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl Geometry {
    /// Parse an HTML image-map `coords` list for the given `shape` kind.
    pub fn parse(id: &str, shape: &str, coords: &str) -> Result<Self, MapDataError> {
        let bad_coords = || MapDataError::BadCoords {
            id: id.to_string(),
            coords: coords.to_string(),
        };

        let values = coords
            .split(',')
            .map(|v| v.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| bad_coords())?;

        match shape {
            "poly" | "polygon" => {
                if values.len() < 6 || values.len() % 2 != 0 {
                    return Err(bad_coords());
                }
                let points = values.chunks_exact(2).map(|c| (c[0], c[1])).collect();
                Ok(Geometry::Polygon(points))
            }
            "circle" => match values.as_slice() {
                [cx, cy, r] => Ok(Geometry::Circle {
                    cx: *cx,
                    cy: *cy,
                    r: *r,
                }),
                _ => Err(bad_coords()),
            },
            other => Err(MapDataError::UnknownShape {
                id: id.to_string(),
                shape: other.to_string(),
            }),
        }
    }

    /// Polygon points formatted for an SVG `points` attribute.
    pub fn svg_points(&self) -> Option<String> {
        match self {
            Geometry::Polygon(points) => Some(
                points
                    .iter()
                    .map(|(x, y)| format!("{},{}", x, y))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Geometry::Circle { .. } => None,
        }
    }
}

impl ShapeTable {
    /// Parse the image map compiled into the binary.
    pub fn load() -> Result<Self, MapDataError> {
        let table = parse_image_map(IMAGE_MAP_XML)?;
        log::info!(
            "Loaded image map '{}' with {} shapes",
            table.name,
            table.shapes.len()
        );
        Ok(table)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

fn attribute(e: &BytesStart, key: &str) -> Result<Option<String>, MapDataError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required(
    e: &BytesStart,
    element: &'static str,
    key: &'static str,
) -> Result<String, MapDataError> {
    attribute(e, key)?.ok_or(MapDataError::MissingAttribute {
        element,
        attribute: key,
    })
}

fn dimension(e: &BytesStart, key: &str) -> Result<u32, MapDataError> {
    Ok(attribute(e, key)?
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0))
}

/// Parse an image-map document (`<map>` with `<area>` children).
/// Elements other than `map` and `area` are ignored.
pub fn parse_image_map(xml_content: &str) -> Result<ShapeTable, MapDataError> {
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut table: Option<ShapeTable> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match name.as_str() {
                    "map" => {
                        table = Some(ShapeTable {
                            name: attribute(e, "name")?.unwrap_or_default(),
                            width: dimension(e, "width")?,
                            height: dimension(e, "height")?,
                            shapes: Vec::new(),
                        });
                    }
                    // areas outside a <map> have nothing to attach to
                    "area" => {
                        if let Some(table) = table.as_mut() {
                            let id = required(e, "area", "id")?;
                            let shape =
                                attribute(e, "shape")?.unwrap_or_else(|| "poly".to_string());
                            let coords = required(e, "area", "coords")?;
                            let title = attribute(e, "title")?.unwrap_or_else(|| id.clone());
                            let geometry = Geometry::parse(&id, &shape, &coords)?;
                            table.shapes.push(Shape {
                                id,
                                title,
                                geometry,
                            });
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    table.ok_or(MapDataError::NoMapElement)
}
