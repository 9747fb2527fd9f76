// ABOUTME: Criterion benchmarks for recipe validation and SQLite ingest
// ABOUTME: Measures constraint checking for valid/invalid payloads and store insert throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe ingest path.
//!
//! Measures validation cost for payloads of various sizes and the
//! `SQLite` insert through the recipe store.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_api::config::DatabaseConfig;
use recipe_api::database::Database;
use recipe_api::recipes::{validate_submission, RecipeService, SqliteRecipeStore};
use serde_json::{json, Value};
use tokio::runtime::Runtime;

/// Generate a valid payload with `ingredient_count` ingredients and steps
fn generate_payload(ingredient_count: usize) -> Value {
    let ingredients: Vec<Value> = (0..ingredient_count)
        .map(|index| {
            json!({
                "name": format!("ingredient {index}"),
                "quantity": 1.5,
                "unit": "g"
            })
        })
        .collect();
    let instructions: Vec<String> = (0..ingredient_count)
        .map(|index| format!("Step {index}: combine"))
        .collect();

    json!({
        "title": "Benchmark stew",
        "description": "A stew with a configurable number of ingredients",
        "ingredients": ingredients,
        "instructions": instructions,
        "prepTimeMinutes": 20,
        "cookTimeMinutes": 90,
        "servings": 6
    })
}

/// Payload that violates every field plus two unknown keys
fn generate_invalid_payload() -> Value {
    json!({
        "title": "",
        "description": 7,
        "ingredients": [{"name": "", "quantity": 0, "unit": null, "brand": "x"}],
        "instructions": ["", 3],
        "prepTimeMinutes": "soon",
        "cookTimeMinutes": 0,
        "servings": -1,
        "rating": 5,
        "tags": []
    })
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_submission");

    for size in [1_usize, 10, 100] {
        let payload = generate_payload(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("valid", size), &payload, |b, payload| {
            b.iter(|| validate_submission(black_box(payload)));
        });
    }

    let invalid = generate_invalid_payload();
    group.bench_function("invalid_all_fields", |b| {
        b.iter(|| validate_submission(black_box(&invalid)));
    });

    group.finish();
}

fn bench_store_insert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("recipe_create");

    let database = rt
        .block_on(Database::new(&DatabaseConfig::in_memory()))
        .unwrap();
    let service = RecipeService::new(Arc::new(SqliteRecipeStore::new(
        database.pool().clone(),
    )));
    let submission = validate_submission(&generate_payload(10)).unwrap();

    group.bench_function("single_recipe", |b| {
        b.iter(|| rt.block_on(service.create(black_box(submission.clone()))));
    });

    group.finish();
}

criterion_group!(benches, bench_validation, bench_store_insert);
criterion_main!(benches);
