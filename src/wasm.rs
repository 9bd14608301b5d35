//! Bindings for driving the solver and estimator from JavaScript.
//!
//! Regions arrive as an array of id strings, adjacencies as an array of
//! `[id, id]` pairs. Builder and solver failures surface as `JsValue` error
//! strings.

use js_sys::{Array, Map};
use unordered_pair::UnorderedPair;
use wasm_bindgen::prelude::*;

use crate::builder::LevelBuilder;
use crate::estimator::ComplexityEstimator;
use crate::level::Level;

fn level_from_js(regions: &Array, adjacencies: &Array) -> Result<Level, JsValue> {
    let mut builder = LevelBuilder::new();

    for region in regions.iter() {
        let id = region
            .as_string()
            .ok_or_else(|| JsValue::from_str("region ids must be strings"))?;
        builder.add_region(id);
    }

    let mut pairs = Vec::with_capacity(adjacencies.length() as usize);
    for entry in adjacencies.iter() {
        let pair = Array::from(&entry);
        match (pair.get(0).as_string(), pair.get(1).as_string()) {
            (Some(a), Some(b)) => pairs.push((a, b)),
            _ => return Err(JsValue::from_str("adjacencies must be [string, string] pairs")),
        }
    }
    for (a, b) in &pairs {
        builder.add_adjacency(UnorderedPair(a.as_str(), b.as_str()));
    }

    match builder.build() {
        Ok(level) => Ok(level),
        Err(reasons) => Err(JsValue::from_str(&format!("invalid level: {reasons:?}"))),
    }
}

/// Solve a level exactly, returning a JS `Map` from region id to color index.
///
/// The number of distinct colors in the map is the level's chromatic number.
#[wasm_bindgen]
pub fn solve_level(regions: Array, adjacencies: Array) -> Result<Map, JsValue> {
    let level = level_from_js(&regions, &adjacencies)?;
    let coloring = level
        .solve()
        .map_err(|failure| JsValue::from_str(&format!("solve failed: {failure:?}")))?;

    let colors = Map::new();
    for (id, color) in level.region_colors(&coloring) {
        colors.set(&JsValue::from_str(&id), &JsValue::from_f64(color as f64));
    }
    Ok(colors)
}

/// Estimate a level's difficulty in `[0, 1]` with the given trial count and seed.
#[wasm_bindgen]
pub fn estimate_difficulty(
    regions: Array,
    adjacencies: Array,
    iterations: u32,
    seed: u32,
) -> Result<f64, JsValue> {
    let level = level_from_js(&regions, &adjacencies)?;
    let estimator = ComplexityEstimator::new()
        .iterations(iterations as usize)
        .seed(seed as u64);
    level
        .difficulty(&estimator)
        .map_err(|failure| JsValue::from_str(&format!("estimate failed: {failure:?}")))
}
