//! Integration tests for the place filtering pipeline.
//!
//! The first half exercises the documented behavior on hand-written
//! fixtures; the second half checks the structural properties of the
//! engine (identity of blank queries, absolute inactive exclusion,
//! order preservation, case-insensitivity) over generated place lists.

use filter::{filter_places, FilterCriteria};
use place_data::Place;
use proptest::prelude::*;

fn make_place(
    id: &str,
    name: &str,
    address: &str,
    cuisine: Option<&str>,
    category: &str,
    active: bool,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        description: None,
        cuisine: cuisine.map(|c| c.to_string()),
        category_id: category.to_string(),
        is_active: active,
        latitude: 36.5684,
        longitude: 128.7294,
        image_url: None,
    }
}

fn fixture() -> Vec<Place> {
    vec![
        make_place("p1", "Hahoe House", "Andong-si", None, "heritage", true),
        make_place("p2", "Jjimdak Alley", "Andong-si", Some("korean"), "food", true),
        make_place("p3", "Closed Spot", "X", None, "food", false),
    ]
}

#[test]
fn text_search_spans_all_fields_and_respects_active_flag() {
    let result = filter_places(&fixture(), &FilterCriteria::new().with_query("andong"));
    let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Hahoe House", "Jjimdak Alley"]);
}

#[test]
fn category_selection_returns_exactly_the_active_members() {
    let result = filter_places(&fixture(), &FilterCriteria::new().with_category("food"));
    let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Jjimdak Alley"]);
}

#[test]
fn query_and_category_compose() {
    let places = vec![
        make_place("p1", "Andong Jjimdak", "Beonyeong-gil", Some("korean"), "food", true),
        make_place("p2", "Andong Soju Museum", "Suha-dong", None, "heritage", true),
        make_place("p3", "Gu Jjimdak", "Beonyeong-gil", Some("korean"), "food", true),
    ];

    let criteria = FilterCriteria::new()
        .with_query("andong")
        .with_category("food");
    let result = filter_places(&places, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "p1");
}

#[test]
fn places_without_optional_fields_match_only_via_name_and_address() {
    let places = vec![make_place("p1", "Hahoe House", "Hahoe-ri", None, "heritage", true)];

    assert_eq!(
        filter_places(&places, &FilterCriteria::new().with_query("hahoe")).len(),
        1
    );
    assert!(filter_places(&places, &FilterCriteria::new().with_query("korean")).is_empty());
}

#[test]
fn surrounding_whitespace_in_the_query_is_ignored() {
    let places = vec![make_place("p1", "Andong Cafe", "Okdong", None, "cafe", true)];

    let padded = filter_places(&places, &FilterCriteria::new().with_query(" cafe "));
    assert_eq!(padded.len(), 1);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

prop_compose! {
    fn arb_place()(
        id in "[a-z]{4}-[0-9]{3}",
        name in prop::sample::select(vec![
            "Hahoe House", "Jjimdak Alley", "Andong Cafe", "Wolyeonggyo Bridge",
            "Soju Museum", "Bongjeongsa Temple",
        ]),
        address in prop::sample::select(vec!["Andong-si", "Hahoe-ri", "Okdong", "X"]),
        description in prop::option::of(prop::sample::select(vec![
            "Riverside hanok stay", "Famous braised chicken", "Quiet temple",
        ])),
        cuisine in prop::option::of(prop::sample::select(vec!["korean", "cafe", "fusion"])),
        category in prop::sample::select(vec!["food", "heritage", "cafe"]),
        active in any::<bool>(),
    ) -> Place {
        Place {
            id,
            name: name.to_string(),
            address: address.to_string(),
            description: description.map(str::to_string),
            cuisine: cuisine.map(str::to_string),
            category_id: category.to_string(),
            is_active: active,
            latitude: 36.5684,
            longitude: 128.7294,
            image_url: None,
        }
    }
}

fn arb_places() -> impl Strategy<Value = Vec<Place>> {
    prop::collection::vec(arb_place(), 0..24)
}

/// Result ids must be a subsequence of the input ids.
fn is_subsequence(result: &[Place], input: &[Place]) -> bool {
    let mut input_ids = input.iter().map(|p| &p.id);
    result
        .iter()
        .all(|r| input_ids.any(|id| *id == r.id))
}

proptest! {
    #[test]
    fn empty_and_whitespace_queries_are_equivalent(
        places in arb_places(),
        category in prop::option::of(prop::sample::select(vec!["food", "heritage", "cafe"])),
    ) {
        let mut blank = FilterCriteria::new().with_query("");
        let mut padded = FilterCriteria::new().with_query("   \t ");
        if let Some(c) = category {
            blank = blank.with_category(c);
            padded = padded.with_category(c);
        }

        prop_assert_eq!(
            filter_places(&places, &blank),
            filter_places(&places, &padded)
        );
    }

    #[test]
    fn inactive_places_never_appear(
        places in arb_places(),
        query in prop::sample::select(vec!["", "andong", "korean", "ZZZ", " cafe "]),
        category in prop::option::of(prop::sample::select(vec!["food", "heritage"])),
    ) {
        let mut criteria = FilterCriteria::new().with_query(query);
        if let Some(c) = category {
            criteria = criteria.with_category(c);
        }

        let result = filter_places(&places, &criteria);
        prop_assert!(result.iter().all(|p| p.is_active));
    }

    #[test]
    fn result_is_an_order_preserving_subsequence(
        places in arb_places(),
        query in prop::sample::select(vec!["", "hahoe", "temple", "si"]),
    ) {
        let result = filter_places(&places, &FilterCriteria::new().with_query(query));
        prop_assert!(is_subsequence(&result, &places));
    }

    #[test]
    fn query_matching_is_case_insensitive(places in arb_places()) {
        prop_assert_eq!(
            filter_places(&places, &FilterCriteria::new().with_query("CAFE")),
            filter_places(&places, &FilterCriteria::new().with_query("cafe"))
        );
    }

    #[test]
    fn category_selection_is_exact(places in arb_places()) {
        let result = filter_places(&places, &FilterCriteria::new().with_category("food"));
        let expected: Vec<&Place> = places
            .iter()
            .filter(|p| p.is_active && p.category_id == "food")
            .collect();

        prop_assert_eq!(result.iter().collect::<Vec<_>>(), expected);
    }
}
