use pipeline_model::{DevelopmentPhase, Program, TherapeuticArea};
use pipeline_portfolio::{Portfolio, ProgramFilter};
use pipeline_test_utils::fixture_programs;
use proptest::prelude::*;
use std::sync::OnceLock;

fn portfolio() -> &'static Portfolio {
    static PORTFOLIO: OnceLock<Portfolio> = OnceLock::new();
    PORTFOLIO.get_or_init(|| Portfolio::new(fixture_programs()))
}

fn phase() -> impl Strategy<Value = DevelopmentPhase> {
    prop::sample::select(DevelopmentPhase::ALL.to_vec())
}

fn area() -> impl Strategy<Value = TherapeuticArea> {
    prop::sample::select(TherapeuticArea::ALL.to_vec())
}

fn in_order(hits: &[&Program]) -> bool {
    hits.windows(2).all(|w| w[0].id < w[1].id)
}

proptest! {
    #[test]
    fn prop_results_satisfy_every_facet(
        phases in prop::collection::btree_set(phase(), 0..4),
        areas in prop::collection::btree_set(area(), 0..4),
    ) {
        let filter = ProgramFilter { query: String::new(), phases: phases.clone(), areas: areas.clone() };
        let hits = portfolio().search(&filter);

        prop_assert!(in_order(&hits));
        for p in &hits {
            prop_assert!(phases.is_empty() || phases.contains(&p.phase));
            prop_assert!(areas.is_empty() || areas.contains(&p.therapeutic_area));
        }
        let expected = portfolio()
            .programs()
            .iter()
            .filter(|p| (phases.is_empty() || phases.contains(&p.phase))
                && (areas.is_empty() || areas.contains(&p.therapeutic_area)))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn prop_adding_a_facet_value_never_shrinks_results(
        phases in prop::collection::btree_set(phase(), 1..3),
        extra in phase(),
    ) {
        let narrow = ProgramFilter::new().with_phases(phases.clone());
        let wide = ProgramFilter::new().with_phases(phases.into_iter().chain([extra]));
        prop_assert!(portfolio().search(&wide).len() >= portfolio().search(&narrow).len());
    }

    #[test]
    fn prop_double_toggle_is_identity(p in phase(), a in area()) {
        let mut filter = ProgramFilter::new().with_query("x");
        let before = filter.clone();
        filter.toggle_phase(p);
        filter.toggle_area(a);
        filter.toggle_phase(p);
        filter.toggle_area(a);
        prop_assert_eq!(filter, before);
    }

    #[test]
    fn prop_query_case_does_not_matter(query in "[a-zA-Z0-9 -]{0,6}") {
        let lower = ProgramFilter::new().with_query(query.to_lowercase());
        let upper = ProgramFilter::new().with_query(query.to_uppercase());
        prop_assert_eq!(portfolio().search(&lower).len(), portfolio().search(&upper).len());
    }
}
