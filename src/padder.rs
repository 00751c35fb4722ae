//! C2: Fibonacci-sphere surface padding.
//!
//! Closes the voxelized atomic surface by emitting auxiliary points on a
//! sphere around every atom centre, so the occlusion classifier (C3) never
//! leaks through a one-voxel gap between adjacent atoms.

use std::f64::consts::PI;

/// Safety margin applied on top of the minimum point count required to keep
/// neighbouring sphere points within `voxel_size` of each other. Without it,
/// the approximation `spacing ~ sqrt(4*pi*r^2/K)` (average, not worst-case,
/// nearest-neighbour distance) would leave some gaps on the sphere slightly
/// larger than `voxel_size`.
const SAFETY_MARGIN: f64 = 1.5;

/// Concatenates `points` with `K` Fibonacci-lattice points per atom, on a
/// sphere of radius `voxel_size` centred at each atom.
pub(crate) fn pad(points: &[[f64; 3]], voxel_size: f64) -> Vec<[f64; 3]> {
    let k = point_count(voxel_size, voxel_size);
    let offsets = fibonacci_sphere(k, voxel_size);

    let mut padded = Vec::with_capacity(points.len() * (offsets.len() + 1));
    padded.extend_from_slice(points);
    for &centre in points {
        for &offset in &offsets {
            padded.push([
                centre[0] + offset[0],
                centre[1] + offset[1],
                centre[2] + offset[2],
            ]);
        }
    }
    padded
}

/// Minimum `K` such that the average nearest-neighbour spacing of `K`
/// Fibonacci-lattice points on a sphere of radius `r` is at or below
/// `max_spacing`, solved from `sqrt(4*pi*r^2/K) <= max_spacing`.
fn point_count(r: f64, max_spacing: f64) -> usize {
    if max_spacing <= 0.0 {
        return 1;
    }
    let k = (4.0 * PI * r * r / (max_spacing * max_spacing)) * SAFETY_MARGIN;
    k.ceil().max(1.0) as usize
}

/// Points on a sphere of radius `r` centred at the origin, distributed by
/// the Fibonacci lattice with golden-angle increments.
fn fibonacci_sphere(k: usize, r: f64) -> Vec<[f64; 3]> {
    if k == 0 {
        return Vec::new();
    }
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let mut points = Vec::with_capacity(k);
    for m in 0..k {
        let y = if k == 1 {
            0.0
        } else {
            1.0 - 2.0 * (m as f64) / ((k - 1) as f64)
        };
        let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
        let theta = golden_angle * m as f64;
        let x = theta.cos() * radius_at_y;
        let z = theta.sin() * radius_at_y;
        points.push([x * r, y * r, z * r]);
    }
    points
}
