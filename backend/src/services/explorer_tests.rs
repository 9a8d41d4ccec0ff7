use super::*;

#[test]
fn test_full_catalog_view() {
    let catalog = Catalog::seed();
    let data =
        compute_explorer_data(&catalog, &ExplorerQuery::default(), &ProjectionSettings::default())
            .unwrap();

    assert_eq!(data.planets.len(), 10);
    assert_eq!(data.stats.total_count, 10);
    assert_eq!(data.stats.catalog_count, 10);
    assert_eq!(data.stats.distance_min, Some(1.3));
    assert_eq!(data.stats.distance_max, Some(1402.0));

    let count = |c: PlanetCategory| {
        data.categories.iter().find(|i| i.category == c).unwrap().count
    };
    assert_eq!(count(PlanetCategory::Terrestrial), 1);
    assert_eq!(count(PlanetCategory::Neptunian), 1);
    assert_eq!(count(PlanetCategory::SuperEarth), 8);
    assert_eq!(count(PlanetCategory::GasGiant), 0);
}

#[test]
fn test_empty_selection() {
    let catalog = Catalog::seed();
    let query = ExplorerQuery {
        filters: FilterCriteria {
            category: Some(PlanetCategory::GasGiant),
            ..Default::default()
        },
        ..Default::default()
    };
    let data = compute_explorer_data(&catalog, &query, &ProjectionSettings::default()).unwrap();
    assert!(data.planets.is_empty());
    assert_eq!(data.stats.mean_habitability, 0.0);
    assert!(data.stats.distance_min.is_none());
    assert!(data.stats.most_habitable_id.is_none());
    assert_eq!(data.categories.len(), 4);
}

#[test]
fn test_most_habitable_matches_sort() {
    let catalog = Catalog::seed();
    let data =
        compute_explorer_data(&catalog, &ExplorerQuery::default(), &ProjectionSettings::default())
            .unwrap();
    let sorted = sort_exoplanets(&catalog.processed(), SortField::Habitability, false);
    assert_eq!(data.stats.most_habitable_id.as_deref(), Some(sorted[0].record.id.as_str()));
}

#[test]
fn test_query_sorts_when_requested() {
    let catalog = Catalog::seed();
    let query = ExplorerQuery {
        sort_by: Some(SortField::Distance),
        ascending: false,
        ..Default::default()
    };
    let planets = query_planets(&catalog, &query);
    assert_eq!(planets[0].record.id, "kepler-452b");
    assert_eq!(planets[9].record.id, "proxima-centauri-b");
}

#[test]
fn test_query_deserializes_flat() {
    let query: ExplorerQuery =
        serde_json::from_str(r#"{"starType": "G", "sortBy": "radius"}"#).unwrap();
    assert_eq!(query.filters.star_type.as_deref(), Some("G"));
    assert_eq!(query.sort_by, Some(SortField::Radius));
    assert!(query.ascending);
}

#[test]
fn test_find_planet_positions_use_both_scales() {
    let catalog = Catalog::seed();
    let settings = ProjectionSettings::default();
    let planet = find_planet(&catalog, "trappist-1e", &settings).unwrap();
    let ratio = planet.compact_position.norm() / planet.position.norm();
    assert!((ratio - settings.compact_scale / settings.primary_scale).abs() < 1e-9);
    assert_eq!(planet.category_color, "#4ade80");

    assert!(matches!(
        find_planet(&catalog, "earth", &settings),
        Err(ExplorerError::NotFound(_))
    ));
}
