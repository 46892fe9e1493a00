//! Built-in Voronoi provider backed by Delaunay triangulation

use delaunator::{triangulate, Point, EMPTY};

use super::{Diagram, Edge, Orientation, Site, VoronoiProvider};
use crate::error::Result;
use crate::vector::Vector;

/// Default [`VoronoiProvider`]. Triangulates the seed points and emits
/// one bisector edge per Delaunay edge, bounded by the circumcenters of
/// the triangles on its two sides. A hull bisector has a triangle on one
/// side only and stays open on the other until clipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayProvider;

impl VoronoiProvider for DelaunayProvider {
    fn compute(&self, points: &[Vector]) -> Result<Diagram> {
        let mut sites: Vec<Site> = points
            .iter()
            .enumerate()
            .map(|(i, p)| Site::new(i, p.clone()))
            .collect();

        let input: Vec<Point> = points
            .iter()
            .map(|p| Point { x: p.x(), y: p.y() })
            .collect();
        let triangulation = triangulate(&input);

        let triangle_count = triangulation.triangles.len() / 3;
        let circumcenters: Vec<Vector> = (0..triangle_count)
            .map(|t| {
                circumcenter(
                    &points[triangulation.triangles[3 * t]],
                    &points[triangulation.triangles[3 * t + 1]],
                    &points[triangulation.triangles[3 * t + 2]],
                )
            })
            .collect();

        let mut edges: Vec<Edge> = Vec::new();
        for halfedge in 0..triangulation.triangles.len() {
            let opposite = triangulation.halfedges[halfedge];
            // An interior Delaunay edge appears as two halfedges; emit one
            // bisector for the pair.
            if opposite != EMPTY && opposite < halfedge {
                continue;
            }
            let left = triangulation.triangles[halfedge];
            let right = triangulation.triangles[next_halfedge(halfedge)];
            let left_pos = &points[left];
            let right_pos = &points[right];
            let origin = left_pos.add(right_pos)?.scale(0.5);
            // Quarter turn counter-clockwise of the left-to-right site
            // offset, so the left site stays on the left of the walk.
            let direction = Vector::xy(
                -(right_pos.y() - left_pos.y()),
                right_pos.x() - left_pos.x(),
            );

            let index = edges.len();
            let mut edge = Edge::new(index, left, Some(right), origin, direction);
            edge.set_endpoint(Orientation::Right, circumcenters[halfedge / 3].clone());
            if opposite != EMPTY {
                edge.set_endpoint(Orientation::Left, circumcenters[opposite / 3].clone());
            }
            sites[left].add_edge(index);
            sites[right].add_edge(index);
            edges.push(edge);
        }

        Ok(Diagram::new(sites, edges))
    }
}

fn next_halfedge(halfedge: usize) -> usize {
    if halfedge % 3 == 2 {
        halfedge - 2
    } else {
        halfedge + 1
    }
}

fn circumcenter(a: &Vector, b: &Vector, c: &Vector) -> Vector {
    let (ax, ay) = (a.x(), a.y());
    let (bx, by) = (b.x(), b.y());
    let (cx, cy) = (c.x(), c.y());
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < f64::EPSILON {
        // Degenerate triangle; the centroid is the best anchor left.
        return Vector::xy((ax + bx + cx) / 3.0, (ay + by + cy) / 3.0);
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    Vector::xy(ux, uy)
}
