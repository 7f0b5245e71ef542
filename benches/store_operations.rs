//! Store Operation Benchmarks
//!
//! **Purpose:** Measure the cost of recomputing derived views as the collection grows
//!
//! **Baseline Metrics (2026-10, 1000 recipes):**
//! - Filter pass (search + criteria): ~50-150µs
//! - Recommendation pass: ~100-300µs
//! - Favorite toggle (learn + recompute): ~100-300µs
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench store_operations
//! ```
//!
//! **What's Being Measured:**
//! 1. `apply filters` - Case-insensitive search plus criteria over the collection
//! 2. `generate recommendations` - Scoring and sorting every non-favorite
//! 3. `toggle favorite` - Preference update followed by recommendation refresh
//!
//! **Performance Notes:**
//! - Every mutation clones the matching recipes into the derived views
//! - Scoring does a handful of BTreeMap lookups per recipe

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use recipe_store::config::ConfigFile;
use recipe_store::infra::SeededJitter;
use recipe_store::model::{Difficulty, FilterCriteria, Recipe, TimeBucket, UserPreferences};
use recipe_store::store::{apply_filters, generate_recommendations, RecipeStore};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["dessert", "main", "side", "breakfast"];
const TAGS: [&str; 5] = ["baking", "french", "vegan", "quick", "spicy"];

fn generate_catalog(size: u64) -> Vec<Recipe> {
    (0..size)
        .map(|id| {
            let i = id as usize;
            Recipe::new(id, format!("Recipe {}", id), "A generated benchmark recipe")
                .with_preparation_time(10 + (id % 18) as u32 * 10)
                .with_difficulty(Difficulty::ALL[i % 3])
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_ingredients(["flour", "butter", "salt"])
                .with_tags([TAGS[i % TAGS.len()], TAGS[(i + 2) % TAGS.len()]])
        })
        .collect()
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply filters");
    let criteria = FilterCriteria {
        preparation_time: Some(TimeBucket::Medium),
        difficulty: Some(Difficulty::Easy),
        category: None,
    };

    for size in [100u64, 1000] {
        let catalog = generate_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| apply_filters(black_box(catalog), black_box("vegan"), black_box(&criteria)))
        });
    }

    group.finish();
}

fn bench_generate_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate recommendations");
    let config = ConfigFile::default();

    for size in [100u64, 1000] {
        let catalog = generate_catalog(size);
        let favorites = [0, 1, 7];
        let mut prefs = UserPreferences::default();
        for recipe in catalog.iter().filter(|r| favorites.contains(&r.id)) {
            prefs.record(recipe);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            let mut jitter = SeededJitter::new(42);
            b.iter(|| {
                generate_recommendations(
                    black_box(catalog),
                    black_box(&favorites),
                    &prefs,
                    &config,
                    &mut jitter,
                )
            })
        });
    }

    group.finish();
}

fn bench_toggle_favorite(c: &mut Criterion) {
    let mut store = RecipeStore::with_jitter(SeededJitter::new(42));
    store.set_recipes(generate_catalog(1000));

    c.bench_function("toggle favorite", |b| {
        b.iter(|| {
            store.add_favorite(black_box(3));
            store.remove_favorite(black_box(3));
        })
    });
}

criterion_group!(
    benches,
    bench_apply_filters,
    bench_generate_recommendations,
    bench_toggle_favorite
);
criterion_main!(benches);
