//! Tests for the parameter store and the formula registry

use crate::error::{EvalError, FormulaError, ParameterError};
use crate::model::{
    BUILTIN_NAMES, FormulaDraft, FormulaId, FormulaRegistry, ParameterDraft, ParameterId,
    ParameterStore, SeededFormula,
};

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_parameter_names_are_sanitized() {
    let mut store = ParameterStore::new();
    let id = store
        .add(ParameterDraft::new("discount rate (%)", "5").label("Discount Rate"))
        .unwrap();

    let parameter = store.get(id).unwrap();
    assert_eq!(parameter.name, "discountrate");
    assert_eq!(parameter.label, "Discount Rate");
    assert_eq!(parameter.numeric_value(), 5.0);
}

#[test]
fn test_builtin_names_are_reserved() {
    let mut store = ParameterStore::new();
    for name in BUILTIN_NAMES {
        assert_eq!(
            store.add(ParameterDraft::new(name, "1")),
            Err(ParameterError::ReservedName(name.to_string()))
        );
    }
    // Sanitizing can turn an innocent-looking name into a reserved one
    assert_eq!(
        store.add(ParameterDraft::new("selling Price", "1")),
        Err(ParameterError::ReservedName("sellingPrice".into()))
    );
    assert!(store.is_empty());
}

#[test]
fn test_duplicate_and_empty_names_are_rejected() {
    let mut store = ParameterStore::new();
    store.add(ParameterDraft::new("discountRate", "5")).unwrap();

    assert_eq!(
        store.add(ParameterDraft::new("discountRate", "7")),
        Err(ParameterError::DuplicateName("discountRate".into()))
    );
    assert_eq!(
        store.add(ParameterDraft::new("%%%", "7")),
        Err(ParameterError::EmptyName)
    );
    assert_eq!(
        store.add(ParameterDraft::new("42", "7")),
        Err(ParameterError::InvalidName("42".into()))
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_edit_may_keep_its_own_name() {
    let mut store = ParameterStore::new();
    let id = store.add(ParameterDraft::new("discountRate", "5")).unwrap();
    let other = store.add(ParameterDraft::new("royalty", "2")).unwrap();

    store
        .edit(id, ParameterDraft::new("discountRate", "6").unit("%"))
        .unwrap();
    assert_eq!(store.get(id).unwrap().value, "6");
    assert_eq!(store.get(id).unwrap().unit, "%");

    assert_eq!(
        store.edit(other, ParameterDraft::new("discountRate", "1")),
        Err(ParameterError::DuplicateName("discountRate".into()))
    );
    assert_eq!(store.get(other).unwrap().name, "royalty");
}

#[test]
fn test_set_value_applies_numeric_gate() {
    let mut store = ParameterStore::new();
    let id = store.add(ParameterDraft::new("rate", "5")).unwrap();

    assert!(!store.set_value(id, "5a"));
    assert!(!store.set_value(id, "-1"));
    assert_eq!(store.get(id).unwrap().value, "5");

    assert!(store.set_value(id, "7."));
    assert_eq!(store.get(id).unwrap().numeric_value(), 7.0);

    assert!(store.set_value(id, ""));
    assert_eq!(store.get(id).unwrap().numeric_value(), 0.0);

    assert!(!store.set_value(ParameterId(99), "1"));
}

#[test]
fn test_remove_parameter() {
    let mut store = ParameterStore::new();
    let id = store.add(ParameterDraft::new("rate", "5")).unwrap();

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.name, "rate");
    assert_eq!(store.remove(id), Err(ParameterError::NotFound(id)));

    // Ids are never reused
    let next = store.add(ParameterDraft::new("rate", "1")).unwrap();
    assert_ne!(next, id);
}

// ============================================================================
// Formulas
// ============================================================================

#[test]
fn test_registry_is_seeded_in_order() {
    let registry = FormulaRegistry::seeded();
    let ids: Vec<&str> = registry.iter().map(|f| f.id.as_str()).collect();
    let expected: Vec<&str> = SeededFormula::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, expected);
    assert!(registry.iter().all(|f| !f.subtract_from_profit));
    assert_eq!(
        registry.get_seeded(SeededFormula::Emissions).unwrap().unit,
        "tons CO2"
    );
}

#[test]
fn test_add_formula_assigns_fresh_ids() {
    let mut registry = FormulaRegistry::seeded();
    let first = registry
        .add(FormulaDraft::new("Royalty", "sellingPrice * 0.02").subtract_from_profit())
        .unwrap();
    let second = registry.add(FormulaDraft::new("Other", "1")).unwrap();

    assert_ne!(first, second);
    assert_eq!(registry.len(), 10);
    assert!(registry.get(&first).unwrap().subtract_from_profit);
    assert!(registry.get(&first).unwrap().seeded().is_none());
}

#[test]
fn test_invalid_formulas_are_rejected() {
    let mut registry = FormulaRegistry::seeded();

    assert_eq!(
        registry.add(FormulaDraft::new("  ", "1")),
        Err(FormulaError::EmptyName)
    );
    assert_eq!(
        registry.add(FormulaDraft::new("Blank", " ")),
        Err(FormulaError::EmptyExpression)
    );
    assert_eq!(
        registry.add(FormulaDraft::new("Broken", "1 +")),
        Err(FormulaError::InvalidExpression {
            expression: "1 +".into(),
            source: EvalError::UnexpectedEnd,
        })
    );
    assert_eq!(registry.len(), 8);

    // Unknown identifiers are accepted here and reported on evaluation
    assert!(registry.add(FormulaDraft::new("Later", "carbonTax * 2")).is_ok());
}

#[test]
fn test_edit_and_remove_seeded_formula() {
    let mut registry = FormulaRegistry::seeded();
    let revenue = FormulaId::from(SeededFormula::Revenue);

    registry
        .edit(
            &revenue,
            FormulaDraft::new("Gross Revenue", "sellingPrice * salesVolume * 1.05").unit("INR"),
        )
        .unwrap();
    let edited = registry.get(&revenue).unwrap();
    assert_eq!(edited.id, revenue);
    assert_eq!(edited.name, "Gross Revenue");
    assert_eq!(edited.seeded(), Some(SeededFormula::Revenue));

    let total_cost = FormulaId::from(SeededFormula::TotalCost);
    registry.remove(&total_cost).unwrap();
    assert!(registry.get_seeded(SeededFormula::TotalCost).is_none());
    assert_eq!(
        registry.remove(&total_cost),
        Err(FormulaError::NotFound(total_cost))
    );
}

#[test]
fn test_failed_edit_leaves_formula_untouched() {
    let mut registry = FormulaRegistry::seeded();
    let revenue = FormulaId::from(SeededFormula::Revenue);
    let before = registry.get(&revenue).unwrap().clone();

    assert!(registry.edit(&revenue, FormulaDraft::new("Revenue", "(")).is_err());
    assert_eq!(registry.get(&revenue), Some(&before));
}
