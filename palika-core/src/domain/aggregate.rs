// palika-core/src/domain/aggregate.rs

// One aggregation routine for every categorical section. The legacy data
// flows re-implemented ward totals and percentage-of-total per domain; here
// all six domains share this distribution type, parameterized by their
// category enum.

use crate::domain::profile::Category;
use serde::Serialize;
use std::collections::BTreeMap;

/// One stored row: households (or persons) of one category in one ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WardCount<C> {
    pub ward: u32,
    pub category: C,
    pub count: u64,
}

/// Municipality-level slice for one category, display-ready.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryAggregate {
    pub code: &'static str,
    pub label_en: &'static str,
    pub label_ne: &'static str,
    pub count: u64,
    /// count / municipality total * 100; 0.0 when the total is 0.
    pub percentage: f64,
}

/// Per-ward breakdown: counts in category display order plus the ward total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WardAggregate {
    pub ward: u32,
    pub counts: Vec<u64>,
    pub total: u64,
}

/// Ward-by-category distribution for one section.
#[derive(Debug, Clone)]
pub struct WardDistribution<C: Category> {
    // ward -> counts indexed parallel to C::all(); BTreeMap keeps ward order.
    per_ward: BTreeMap<u32, Vec<u64>>,
    _marker: std::marker::PhantomData<C>,
}

impl<C: Category> WardDistribution<C> {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = WardCount<C>>,
    {
        let width = C::all().len();
        let mut per_ward: BTreeMap<u32, Vec<u64>> = BTreeMap::new();

        for row in rows {
            let slot = per_ward.entry(row.ward).or_insert_with(|| vec![0; width]);
            if let Some(idx) = C::all().iter().position(|c| *c == row.category) {
                // Duplicate (ward, category) rows accumulate; the repository
                // upsert keeps them unique, so this is a plain assignment in
                // practice.
                slot[idx] += row.count;
            }
        }

        Self {
            per_ward,
            _marker: std::marker::PhantomData,
        }
    }

    /// No rows at all. "All-zero rows" is NOT empty: the section exists but
    /// every percentage reports 0.
    pub fn is_empty(&self) -> bool {
        self.per_ward.is_empty()
    }

    /// Municipality total across every ward and category.
    pub fn total(&self) -> u64 {
        self.per_ward.values().flatten().sum()
    }

    pub fn category_total(&self, category: C) -> u64 {
        let Some(idx) = C::all().iter().position(|c| *c == category) else {
            return 0;
        };
        self.per_ward.values().map(|counts| counts[idx]).sum()
    }

    /// Percentage of the municipality total, zero-guarded.
    pub fn percentage(&self, category: C) -> f64 {
        percentage_of(self.category_total(category), self.total())
    }

    /// Category -> {count, percentage, bilingual label}, in display order.
    pub fn municipality_data(&self) -> Vec<CategoryAggregate> {
        let total = self.total();
        C::all()
            .iter()
            .map(|c| CategoryAggregate {
                code: c.code(),
                label_en: c.label_en(),
                label_ne: c.label_ne(),
                count: self.category_total(*c),
                percentage: percentage_of(self.category_total(*c), total),
            })
            .collect()
    }

    /// Ward -> per-category counts + ward total, ordered by ward number.
    pub fn ward_data(&self) -> Vec<WardAggregate> {
        self.per_ward
            .iter()
            .map(|(ward, counts)| WardAggregate {
                ward: *ward,
                counts: counts.clone(),
                total: counts.iter().sum(),
            })
            .collect()
    }

    /// Highest-count category, used by the narrative generator.
    /// Ties resolve to the earlier category in display order.
    pub fn dominant(&self) -> Option<(C, u64)> {
        if self.is_empty() {
            return None;
        }
        let mut best: Option<(C, u64)> = None;
        for c in C::all() {
            let count = self.category_total(*c);
            match best {
                Some((_, b)) if count <= b => {}
                _ => best = Some((*c, count)),
            }
        }
        best
    }
}

/// `count / total * 100`, reporting 0 when the total is 0.
pub fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}
