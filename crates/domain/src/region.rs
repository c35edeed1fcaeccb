// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static mapping from region display names to logistics clusters.

use crate::error::DomainError;
use crate::types::ClusterId;

/// Region display names and the cluster each one resolves to.
pub const REGION_CLUSTERS: [(&str, i64); 17] = [
    ("Санкт-Петербург и СЗО", 2),
    ("Урал", 3),
    ("Дальний Восток", 7),
    ("Калининград", 12),
    ("Воронеж", 16),
    ("Краснодар", 17),
    ("Тюмень", 144),
    ("Волгоград", 146),
    ("Ростов", 147),
    ("Уфа", 148),
    ("Казань", 149),
    ("Самара", 150),
    ("Новосибирск", 151),
    ("Омск", 152),
    ("Кавказ", 153),
    ("Москва, МО и Дальние регионы", 154),
    ("Красноярск", 155),
];

/// Resolves a region display name to its cluster identifier.
///
/// Surrounding whitespace is ignored; the comparison is otherwise exact.
///
/// # Errors
///
/// Returns `DomainError::UnknownRegion` if the name is not mapped.
pub fn resolve(region: &str) -> Result<ClusterId, DomainError> {
    let name: &str = region.trim();
    REGION_CLUSTERS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, id)| ClusterId::new(*id))
        .ok_or_else(|| DomainError::UnknownRegion(name.to_string()))
}

/// Returns every mapped region with its cluster identifier.
#[must_use]
pub fn regions() -> Vec<(&'static str, ClusterId)> {
    REGION_CLUSTERS
        .iter()
        .map(|(name, id)| (*name, ClusterId::new(*id)))
        .collect()
}
