//! Catalog filtering: combines the text query, category, price range, and
//! keyword of a [`FilterState`] into a single stable projection of the catalog.
//!
//! Every active dimension must match (logical AND). Inactive dimensions, an
//! empty string or an unset bound, never exclude anything.

use crate::types::{FilterState, Product};

// ---------------------------------------------------------------------------
// Text matching
// ---------------------------------------------------------------------------

/// A lowercased needle prepared once per evaluation.
struct Needle(Option<String>);

impl Needle {
    fn new(raw: &str) -> Self {
        if raw.is_empty() {
            Needle(None)
        } else {
            Needle(Some(raw.to_lowercase()))
        }
    }

    fn is_active(&self) -> bool {
        self.0.is_some()
    }

    /// Case-insensitive substring test. An inactive needle matches everything.
    fn found_in(&self, text: &str) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Criteria compiled from a [`FilterState`] so repeated matching does not
/// re-lowercase the query and keyword for every product.
pub struct CompiledFilter<'a> {
    search: Needle,
    keyword: Needle,
    category: Option<&'a str>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            search: Needle::new(&state.search_query),
            keyword: Needle::new(&state.keyword),
            category: (!state.selected_category.is_empty()).then_some(state.selected_category.as_str()),
            min_price: state.min_price,
            max_price: state.max_price,
        }
    }

    /// True when no criterion is active.
    pub fn is_pass_through(&self) -> bool {
        !self.search.is_active()
            && !self.keyword.is_active()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Test one product against every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            // Written as a negated `>=` so a NaN on either side excludes.
            if !(product.price >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !(product.price <= max) {
                return false;
            }
        }
        if !self.keyword.found_in(&product.title) {
            return false;
        }
        // Free-text search looks at the title first, then the description.
        self.search.found_in(&product.title) || self.search.found_in(&product.description)
    }
}

/// Return the products of `catalog` that satisfy every active criterion of
/// `state`, in catalog order.
pub fn evaluate<'p>(catalog: &'p [Product], state: &FilterState) -> Vec<&'p Product> {
    let filter = CompiledFilter::new(state);
    if filter.is_pass_through() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| filter.matches(p)).collect()
}

/// Owned variant of [`evaluate`] for callers that hand the result to a renderer.
pub fn evaluate_owned(catalog: &[Product], state: &FilterState) -> Vec<Product> {
    evaluate(catalog, state).into_iter().cloned().collect()
}

// ---------------------------------------------------------------------------
// Sidebar input helpers
// ---------------------------------------------------------------------------

/// Interpret the contents of a price text box.
///
/// Blank input clears the bound. Input that is not a finite number also clears
/// it rather than producing a bound nothing can satisfy.
pub fn parse_price_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::debug!(input = trimmed, "Ignoring non-numeric price input");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.into(),
            description: String::new(),
            price,
            images: vec![format!("https://cdn.example/{id}.png")],
            rating: 4.0,
            category: category.into(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Apple Watch", 299.0, "wearables"),
            product(2, "Leather Shoes", 89.0, "footwear"),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<u64> {
        result.iter().map(|p| p.id).collect()
    }

    #[test]
    fn keyword_watch_selects_apple_watch() {
        let cat = catalog();
        let state = FilterState { keyword: "watch".into(), ..Default::default() };
        let result = evaluate(&cat, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Apple Watch");
        assert_eq!(result[0].price, 299.0);
        assert_eq!(result[0].category, "wearables");
    }

    #[test]
    fn price_range_is_inclusive() {
        let cat = catalog();
        let state = FilterState { min_price: Some(100.0), max_price: Some(300.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &state)), vec![1]);

        let exact = FilterState { min_price: Some(89.0), max_price: Some(89.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &exact)), vec![2]);
    }

    #[test]
    fn single_bound_applies_alone() {
        let cat = catalog();
        let min_only = FilterState { min_price: Some(90.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &min_only)), vec![1]);
        let max_only = FilterState { max_price: Some(90.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &max_only)), vec![2]);
    }

    #[test]
    fn defaults_return_full_catalog_in_order() {
        let cat = catalog();
        assert_eq!(ids(&evaluate(&cat, &FilterState::default())), vec![1, 2]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let state = FilterState {
            search_query: "apple".into(),
            selected_category: "wearables".into(),
            min_price: Some(1.0),
            max_price: Some(2.0),
            keyword: "watch".into(),
        };
        assert!(evaluate(&[], &state).is_empty());
        assert!(evaluate(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let cat = catalog();
        let state = FilterState { selected_category: "footwear".into(), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &state)), vec![2]);
        let wrong_case = FilterState { selected_category: "Footwear".into(), ..Default::default() };
        assert!(evaluate(&cat, &wrong_case).is_empty());
        let partial = FilterState { selected_category: "foot".into(), ..Default::default() };
        assert!(evaluate(&cat, &partial).is_empty());
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut cat = catalog();
        cat[1].description = "Hand-stitched Italian LEATHER".into();
        let by_title = FilterState { search_query: "APPLE".into(), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &by_title)), vec![1]);
        let by_desc = FilterState { search_query: "italian".into(), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &by_desc)), vec![2]);
    }

    #[test]
    fn search_query_is_not_trimmed() {
        let cat = catalog();
        let state = FilterState { search_query: " watch ".into(), ..Default::default() };
        assert!(evaluate(&cat, &state).is_empty());
    }

    #[test]
    fn keyword_ignores_description() {
        let mut cat = catalog();
        cat[1].description = "goes with any watch".into();
        let state = FilterState { keyword: "watch".into(), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &state)), vec![1]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let cat = catalog();
        let state = FilterState {
            keyword: "watch".into(),
            selected_category: "footwear".into(),
            ..Default::default()
        };
        assert!(evaluate(&cat, &state).is_empty());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let cat = catalog();
        let state = FilterState { min_price: Some(300.0), max_price: Some(100.0), ..Default::default() };
        assert!(evaluate(&cat, &state).is_empty());
    }

    #[test]
    fn output_is_ordered_subset_of_input() {
        let cat: Vec<Product> = (0..20)
            .map(|i| {
                let category = if i % 3 == 0 { "a" } else { "b" };
                product(i, &format!("Item {i}"), i as f64 * 10.0, category)
            })
            .collect();
        let states = [
            FilterState::default(),
            FilterState { selected_category: "a".into(), ..Default::default() },
            FilterState { min_price: Some(45.0), max_price: Some(150.0), ..Default::default() },
            FilterState { search_query: "item 1".into(), ..Default::default() },
        ];
        for state in &states {
            let result = evaluate(&cat, state);
            let positions: Vec<usize> = result
                .iter()
                .map(|r| cat.iter().position(|p| std::ptr::eq(p, *r)).expect("not from catalog"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {state:?}");
        }
    }

    #[test]
    fn empty_category_ignores_product_categories() {
        let cat = catalog();
        let mut relabeled = cat.clone();
        relabeled[0].category = "something-else".into();
        relabeled[1].category = String::new();
        let state = FilterState { min_price: Some(50.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &state)), ids(&evaluate(&relabeled, &state)));
    }

    #[test]
    fn evaluate_owned_clones_matches() {
        let cat = catalog();
        let state = FilterState { keyword: "shoes".into(), ..Default::default() };
        let owned = evaluate_owned(&cat, &state);
        assert_eq!(owned, vec![cat[1].clone()]);
    }

    #[test]
    fn price_input_parsing() {
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("   "), None);
        assert_eq!(parse_price_input("12.5"), Some(12.5));
        assert_eq!(parse_price_input(" 100 "), Some(100.0));
        assert_eq!(parse_price_input("abc"), None);
        assert_eq!(parse_price_input("NaN"), None);
        assert_eq!(parse_price_input("inf"), None);
    }

    #[test]
    fn needle_is_case_insensitive_and_empty_matches_all() {
        assert!(Needle::new("WATCH").found_in("Apple Watch"));
        assert!(Needle::new("").found_in("anything"));
        assert!(!Needle::new("").is_active());
        assert!(!Needle::new("shirt").found_in("Shoes"));
    }

    #[test]
    fn nan_bounds_match_nothing() {
        let cat = catalog();
        let min_nan = FilterState { min_price: Some(f64::NAN), ..Default::default() };
        assert!(evaluate(&cat, &min_nan).is_empty());
        let max_nan = FilterState { max_price: Some(f64::NAN), ..Default::default() };
        assert!(evaluate(&cat, &max_nan).is_empty());
    }

    #[test]
    fn nan_priced_product_is_excluded_by_any_bound() {
        let mut cat = catalog();
        cat[0].price = f64::NAN;
        let min_only = FilterState { min_price: Some(0.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &min_only)), vec![2]);
        let max_only = FilterState { max_price: Some(1_000.0), ..Default::default() };
        assert_eq!(ids(&evaluate(&cat, &max_only)), vec![2]);
    }
}
