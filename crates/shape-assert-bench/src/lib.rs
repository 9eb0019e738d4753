//! Fixture generator and benchmark utilities for shape-assert.
//!
//! Produces deterministic object graphs in three layouts: wide (many sibling
//! records), deep (a long chain of nested records) and cyclic (a ring of
//! shared nodes). Each fixture can be regenerated from its seed, so two
//! independent copies compare equal without sharing any reference.

use std::cell::OnceCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use shape_assert::reflect_record;

const NAMES: &[&str] = &[
    "Acme Corp",
    "Global Trade Ltd",
    "Pacific Metals Inc",
    "Rhine Chemicals GmbH",
    "Nordic Timber AB",
    "Atlas Logistics",
    "Delta Textiles",
    "Summit Energy",
];

const COUNTRIES: &[&str] = &["US", "GB", "DE", "FR", "NL", "JP", "CN", "BR"];

const TAGS: &[&str] = &["tier-1", "tier-2", "certified", "audited", "preferred"];

// ---------------------------------------------------------------------------
// Fixture types
// ---------------------------------------------------------------------------

/// A supplier record; `parent` links suppliers into deep chains.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub rating: f64,
    pub tags: Vec<String>,
    pub parent: Option<Box<Supplier>>,
}

reflect_record! {
    Supplier {
        id: u64,
        name: String,
        country: String,
        rating: f64,
        tags: Vec<String>,
        parent: Option<Box<Supplier>>,
    }
}

/// A node of a cyclic ring.
///
/// Rings are reference cycles and are never freed; benchmarks build them once
/// per size tier.
pub struct RingNode {
    pub label: String,
    pub weight: i32,
    pub next: OnceCell<Rc<RingNode>>,
}

reflect_record! {
    RingNode {
        label: String,
        weight: i32,
        next: OnceCell<Rc<RingNode>>,
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the fixture generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of sibling suppliers in a wide fixture.
    pub width: usize,
    /// Length of the parent chain in a deep fixture.
    pub depth: usize,
    /// Number of nodes in a cyclic ring.
    pub ring_len: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 suppliers, depth 16, ring of 8.
    Small,
    /// 500 suppliers, depth 64, ring of 64.
    Medium,
    /// 5000 suppliers, depth 256, ring of 256.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                width: 50,
                depth: 16,
                ring_len: 8,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                width: 500,
                depth: 64,
                ring_len: 64,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                width: 5000,
                depth: 256,
                ring_len: 256,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn supplier(rng: &mut StdRng, id: u64, parent: Option<Box<Supplier>>) -> Supplier {
    let tag_count = rng.gen_range(0..=3);
    let tags = (0..tag_count)
        .map(|_| TAGS[rng.gen_range(0..TAGS.len())].to_owned())
        .collect();
    Supplier {
        id,
        name: NAMES[rng.gen_range(0..NAMES.len())].to_owned(),
        country: COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_owned(),
        rating: f64::from(rng.gen_range(0_u8..=50)) / 10.0,
        tags,
        parent,
    }
}

/// Generates `config.width` independent suppliers.
pub fn generate_wide(config: &GeneratorConfig) -> Vec<Supplier> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.width as u64)
        .map(|id| supplier(&mut rng, id, None))
        .collect()
}

/// Generates one supplier whose parent chain is `config.depth` records long.
pub fn generate_deep(config: &GeneratorConfig) -> Supplier {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut current = supplier(&mut rng, 0, None);
    for id in 1..config.depth as u64 {
        current = supplier(&mut rng, id, Some(Box::new(current)));
    }
    current
}

/// Generates a ring of `config.ring_len` nodes and returns its first node.
pub fn generate_ring(config: &GeneratorConfig) -> Rc<RingNode> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let nodes: Vec<Rc<RingNode>> = (0..config.ring_len.max(1))
        .map(|i| {
            Rc::new(RingNode {
                label: format!("n-{i}"),
                weight: rng.gen_range(-100..100),
                next: OnceCell::new(),
            })
        })
        .collect();
    for (node, next) in nodes.iter().zip(nodes.iter().cycle().skip(1)) {
        let linked = node.next.get_or_init(|| Rc::clone(next));
        debug_assert!(Rc::ptr_eq(linked, next));
    }
    Rc::clone(&nodes[0])
}

/// Renders suppliers as a JSON array, the way a service response would carry them.
pub fn suppliers_to_json(suppliers: &[Supplier]) -> Value {
    Value::Array(suppliers.iter().map(supplier_to_json).collect())
}

fn supplier_to_json(supplier: &Supplier) -> Value {
    json!({
        "id": supplier.id,
        "name": supplier.name,
        "country": supplier.country,
        "rating": supplier.rating,
        "tags": supplier.tags,
        "parent": supplier.parent.as_deref().map(supplier_to_json),
    })
}
