use nf_chem::{Catalog, Ion, RangeStatus, check_range, recipe, recipes};
use nf_engine::{
    BalanceStatus, NitrogenForm, aggregate_solution, estimate_conductivity, ion_balance,
    nutrient_ratios,
};

fn assert_within(label: &str, value: f64, low: f64, high: f64) {
    assert!(
        (low..=high).contains(&value),
        "{label} = {value} not in [{low}, {high}]"
    );
}

#[test]
fn hoagland_macro_concentrations() {
    let catalog = Catalog::builtin();
    let hoagland = recipe("hoagland").unwrap();
    let result = aggregate_solution(&catalog, &hoagland.dosages).unwrap();

    assert_eq!(result.totals.len(), 16);
    assert_eq!(result.breakdowns.len(), hoagland.dosages.len());

    assert_within("NO3-N", result.total(Ion::NO3).ppm(), 170.0, 195.0);
    assert_within("K", result.total(Ion::K).ppm(), 220.0, 270.0);
    assert_within("Ca", result.total(Ion::Ca).ppm(), 140.0, 180.0);
    assert_within("Mg", result.total(Ion::Mg).ppm(), 40.0, 60.0);
    assert_within("P", result.total(Ion::H2PO4).ppm(), 25.0, 40.0);

    assert_eq!(result.total(Ion::NH4).ppm(), 0.0);
    assert_eq!(result.total(Ion::Si).ppm(), 0.0);
}

#[test]
fn hoagland_conductivity_and_balance() {
    let catalog = Catalog::builtin();
    let hoagland = recipe("hoagland").unwrap();
    let result = aggregate_solution(&catalog, &hoagland.dosages).unwrap();

    assert_within("EC", estimate_conductivity(&result.totals), 1.5, 2.5);

    let balance = ion_balance(&result.totals).unwrap();
    assert_eq!(balance.status, BalanceStatus::Balanced);

    let ratios = nutrient_ratios(&result.totals);
    assert_eq!(ratios.no3_nh4, Some(NitrogenForm::AllNitrate));
    assert!(ratios.npk.is_some());
}

#[test]
fn every_preset_converts_and_stays_in_range() {
    let catalog = Catalog::builtin();
    for preset in recipes() {
        let result = aggregate_solution(&catalog, &preset.dosages).unwrap();
        for ion in [Ion::NO3, Ion::K, Ion::Ca, Ion::Mg] {
            let ppm = result.total(ion).ppm();
            assert_eq!(
                check_range(ion, ppm),
                Some(RangeStatus::Ok),
                "{}: {ion} at {ppm} ppm",
                preset.id
            );
        }
        let ec = estimate_conductivity(&result.totals);
        assert!(ec > 0.5 && ec < 4.0, "{}: EC {ec}", preset.id);
    }
}
