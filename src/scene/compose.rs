use crate::geometry::Triangle;
use crate::math::Point2;
use crate::operations::{Morley, MorleyFigure, Napoleon, NapoleonFigure};

use super::{Arc, FillTag, Polygon, Scene, Segment, StyleTag};

/// Backward extension factor approximating the infinite trisection carriers
/// for rendering.
const EDGE_EXTENSION_FACTOR: f64 = 100.0;

/// Vertex arc radius as a fraction of the shorter adjacent side.
const ARC_RADIUS_RATIO: f64 = 0.3;

/// Computes the full scene for the given input points.
///
/// A construction that hits a degenerate configuration — expected
/// transiently while a point is dragged through a collinear position — is
/// skipped for the frame and logged at debug level; the rest of the scene is
/// still emitted. No `NaN` or infinity ever reaches the output.
#[must_use]
pub fn compose(points: [Point2; 3]) -> Scene {
    let triangle = Triangle::new(points);
    let mut scene = Scene::default();

    scene.polygons.push(Polygon {
        vertices: triangle.vertices().to_vec(),
        fill: FillTag::Input,
    });

    match Napoleon::new(triangle).execute() {
        Ok(figure) => push_napoleon(&mut scene, &figure),
        Err(err) => tracing::debug!(%err, "skipping Napoleon construction"),
    }

    match Morley::new(triangle).execute() {
        Ok(figure) => push_morley(&mut scene, &triangle, &figure),
        Err(err) => tracing::debug!(%err, "skipping Morley construction"),
    }

    scene
}

fn push_napoleon(scene: &mut Scene, figure: &NapoleonFigure) {
    for (i, flank) in figure.flanks.iter().enumerate() {
        scene.polygons.push(Polygon {
            vertices: flank.vertices().to_vec(),
            fill: FillTag::Equilateral(i),
        });
    }
    scene.polygons.push(Polygon {
        vertices: figure.outer.vertices().to_vec(),
        fill: FillTag::NapoleonOuter,
    });
}

fn push_morley(scene: &mut Scene, triangle: &Triangle, figure: &MorleyFigure) {
    // Dashed backward extensions of every edge, visualizing the carriers of
    // the exterior trisection.
    for i in 0..3 {
        let u = triangle.vertex(i);
        let w = triangle.vertex(i + 1);
        let edge = w - u;
        scene.segments.push(Segment {
            start: u,
            end: u - edge * EDGE_EXTENSION_FACTOR,
            style: StyleTag::Construction,
        });
        scene.segments.push(Segment {
            start: w,
            end: w + edge * EDGE_EXTENSION_FACTOR,
            style: StyleTag::Construction,
        });
    }

    // Outer tip triangles, farther tips first so the closer ones paint over
    // them.
    for (i, tips) in figure.tips.iter().enumerate() {
        let u = triangle.vertex(i);
        let w = triangle.vertex(i + 1);
        if let Some(other) = tips.other {
            scene.polygons.push(Polygon {
                vertices: vec![u, w, other],
                fill: FillTag::MorleyOuter(2 * i + 1),
            });
        }
        scene.polygons.push(Polygon {
            vertices: vec![u, w, tips.closest],
            fill: FillTag::MorleyOuter(2 * i),
        });
    }

    // Trisectors from each inner Morley point back to the two vertices that
    // produced it.
    for i in 0..3 {
        let inner = figure.inner.vertex(i);
        for vertex in [triangle.vertex(i), triangle.vertex(i + 1)] {
            scene.segments.push(Segment {
                start: inner,
                end: vertex,
                style: StyleTag::Trisector(2 - i),
            });
        }
    }

    scene.polygons.push(Polygon {
        vertices: figure.inner.vertices().to_vec(),
        fill: FillTag::MorleyInner,
    });

    // One arc per vertex, sweeping the trisected interior angle.
    let sides = triangle.side_lengths();
    for (i, trisection) in figure.trisections.iter().enumerate() {
        let radius = ARC_RADIUS_RATIO * sides[i].min(sides[(i + 2) % 3]);
        scene.arcs.push(Arc {
            center: trisection.vertex,
            radius,
            start_angle: trisection.start_angle,
            extent: trisection.extent,
            palette: i,
        });
    }
}
