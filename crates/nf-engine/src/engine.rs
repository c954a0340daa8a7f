//! Chemical dosage → ion concentration conversion and aggregation.

use crate::concentration::{ChemicalBreakdown, IonConcentration, SolutionResult};
use crate::error::{EngineError, EngineResult};
use nf_chem::{Chemical, ChemicalSource, Dosage, Ion};

/// Ion concentrations produced by `mg_per_l` of `chemical`.
///
/// The dosage must be finite and non-negative. A zero dosage gives exact
/// zeros everywhere.
pub fn breakdown(chemical: &Chemical, mg_per_l: f64) -> EngineResult<ChemicalBreakdown> {
    if !mg_per_l.is_finite() || mg_per_l < 0.0 {
        return Err(EngineError::InvalidDosage {
            chemical_id: chemical.id.clone(),
            value: mg_per_l,
        });
    }

    // mg/L ÷ g/mol = mmol/L
    let mmol_per_l = mg_per_l / chemical.molecular_weight;

    let ions = chemical
        .ions
        .iter()
        .map(|c| IonConcentration::from_mmol_per_l(c.ion, mmol_per_l * c.coefficient))
        .collect();

    Ok(ChemicalBreakdown {
        chemical_id: chemical.id.clone(),
        mg_per_l,
        mmol_per_l,
        ions,
    })
}

/// Look up `chemical_id` in `source` and convert its dosage.
///
/// Fails with [`nf_chem::ChemError::UnknownChemical`] for ids the source
/// does not know.
pub fn convert_chemical<S>(
    source: &S,
    chemical_id: &str,
    mg_per_l: f64,
) -> EngineResult<ChemicalBreakdown>
where
    S: ChemicalSource + ?Sized,
{
    let chemical = source.require(chemical_id)?;
    breakdown(chemical, mg_per_l)
}

/// Convert every dosage and sum the contributions per ion.
///
/// Totals always hold every tracked ion in canonical order, including ions no
/// input contributes to. Contributions are summed in input order.
pub fn aggregate_solution<S>(source: &S, dosages: &[Dosage]) -> EngineResult<SolutionResult>
where
    S: ChemicalSource + ?Sized,
{
    let breakdowns = dosages
        .iter()
        .map(|d| convert_chemical(source, &d.chemical_id, d.mg_per_l))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut mmol = [0.0_f64; Ion::ALL.len()];
    for b in &breakdowns {
        for c in &b.ions {
            mmol[c.ion().index()] += c.mmol_per_l();
        }
    }

    let totals = Ion::ALL
        .iter()
        .map(|&ion| IonConcentration::from_mmol_per_l(ion, mmol[ion.index()]))
        .collect();

    tracing::trace!(dosages = dosages.len(), "aggregated solution");

    Ok(SolutionResult { breakdowns, totals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_chem::{Catalog, ChemError};

    fn ion_of(b: &ChemicalBreakdown, ion: Ion) -> IonConcentration {
        *b.ions.iter().find(|c| c.ion() == ion).unwrap()
    }

    #[test]
    fn unknown_chemical_fails() {
        let catalog = Catalog::builtin();
        let err = convert_chemical(&catalog, "nonexistent", 100.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::Chem(ChemError::UnknownChemical {
                id: "nonexistent".into()
            })
        );
        assert_eq!(err.to_string(), "Unknown chemical: nonexistent");
    }

    #[test]
    fn zero_dose_is_exactly_zero() {
        let catalog = Catalog::builtin();
        for chemical in catalog.iter() {
            let b = breakdown(chemical, 0.0).unwrap();
            assert_eq!(b.mg_per_l, 0.0);
            assert_eq!(b.mmol_per_l, 0.0);
            for c in &b.ions {
                assert_eq!(c.mmol_per_l(), 0.0);
                assert_eq!(c.ppm(), 0.0);
                assert_eq!(c.me_per_l(), 0.0);
            }
        }
    }

    #[test]
    fn negative_and_nan_doses_rejected() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            convert_chemical(&catalog, "potassium-nitrate", -1.0),
            Err(EngineError::InvalidDosage { .. })
        ));
        assert!(matches!(
            convert_chemical(&catalog, "potassium-nitrate", f64::NAN),
            Err(EngineError::InvalidDosage { .. })
        ));
    }

    #[test]
    fn kno3_one_millimolar() {
        let catalog = Catalog::builtin();
        let b = convert_chemical(&catalog, "potassium-nitrate", 101.102).unwrap();
        assert!((b.mmol_per_l - 1.0).abs() < 1e-12);

        let k = ion_of(&b, Ion::K);
        assert!((k.ppm() - 39.098).abs() < 1e-9);
        assert!((k.me_per_l() - 1.0).abs() < 1e-12);

        let no3 = ion_of(&b, Ion::NO3);
        assert!((no3.ppm() - 14.007).abs() < 1e-9);
        assert!((no3.mmol_per_l() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn calcium_nitrate_coefficient_two() {
        let catalog = Catalog::builtin();
        let b = convert_chemical(&catalog, "calcium-nitrate", 236.146).unwrap();
        let ca = ion_of(&b, Ion::Ca);
        let no3 = ion_of(&b, Ion::NO3);
        assert!((ca.ppm() - 40.078).abs() < 1e-9);
        assert!((ca.me_per_l() - 2.0).abs() < 1e-12);
        assert!((no3.mmol_per_l() - 2.0).abs() < 1e-12);
        assert!((no3.ppm() - 28.014).abs() < 1e-9);
    }

    #[test]
    fn breakdown_keeps_input_dose() {
        let catalog = Catalog::builtin();
        let b = convert_chemical(&catalog, "potassium-nitrate", 500.0).unwrap();
        assert_eq!(b.chemical_id, "potassium-nitrate");
        assert_eq!(b.mg_per_l, 500.0);
    }

    #[test]
    fn empty_input_gives_zero_totals() {
        let catalog = Catalog::builtin();
        let result = aggregate_solution(&catalog, &[]).unwrap();
        assert!(result.breakdowns.is_empty());
        assert_eq!(result.totals.len(), 16);
        assert!(result.totals.iter().all(|t| t.ppm() == 0.0));
    }

    #[test]
    fn overlapping_ions_are_summed() {
        let catalog = Catalog::builtin();
        let result = aggregate_solution(
            &catalog,
            &[
                Dosage::new("potassium-nitrate", 101.102),
                Dosage::new("calcium-nitrate", 236.146),
            ],
        )
        .unwrap();
        let no3 = result.total(Ion::NO3);
        assert!((no3.mmol_per_l() - 3.0).abs() < 1e-9);
        assert!((no3.ppm() - 3.0 * 14.007).abs() < 1e-9);
        assert_eq!(result.breakdowns.len(), 2);
        assert_eq!(result.breakdowns[1].chemical_id, "calcium-nitrate");
    }

    #[test]
    fn unknown_id_in_list_fails_whole_aggregate() {
        let catalog = Catalog::builtin();
        let err = aggregate_solution(
            &catalog,
            &[
                Dosage::new("potassium-nitrate", 10.0),
                Dosage::new("unobtainium", 1.0),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Chem(ChemError::UnknownChemical { .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use nf_chem::Catalog;
    use nf_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn rel_close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    proptest! {
        #[test]
        fn breakdown_fields_are_consistent(idx in 0_usize..32, mg in 0.0_f64..5000.0) {
            let catalog = Catalog::builtin();
            let chemical = &catalog.as_slice()[idx];
            let b = breakdown(chemical, mg).unwrap();
            for c in &b.ions {
                let ion = c.ion();
                prop_assert!(rel_close(c.me_per_l(), c.mmol_per_l() * f64::from(ion.valence())));
                prop_assert!(rel_close(c.ppm(), c.mmol_per_l() * ion.atomic_weight()));
            }
        }

        #[test]
        fn aggregation_is_additive(
            a_idx in 0_usize..32,
            b_idx in 0_usize..32,
            a_mg in 0.0_f64..2000.0,
            b_mg in 0.0_f64..2000.0,
        ) {
            let catalog = Catalog::builtin();
            let a = Dosage::new(catalog.as_slice()[a_idx].id.clone(), a_mg);
            let b = Dosage::new(catalog.as_slice()[b_idx].id.clone(), b_mg);

            let both = aggregate_solution(&catalog, &[a.clone(), b.clone()]).unwrap();
            let only_a = aggregate_solution(&catalog, &[a]).unwrap();
            let only_b = aggregate_solution(&catalog, &[b]).unwrap();

            for ion in Ion::ALL {
                let sum = only_a.total(ion).ppm() + only_b.total(ion).ppm();
                prop_assert!((both.total(ion).ppm() - sum).abs() <= 1e-9 * sum.max(1.0));
                let sum_me = only_a.total(ion).me_per_l() + only_b.total(ion).me_per_l();
                prop_assert!((both.total(ion).me_per_l() - sum_me).abs() <= 1e-9 * sum_me.max(1.0));
            }
        }
    }
}
